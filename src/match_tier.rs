// src/match_tier.rs
//! Display tier for recommendation match scores

use std::fmt;

const HIGH_CUTOFF: u8 = 80;
const MEDIUM_CUTOFF: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

impl MatchTier {
    /// Classify a 0-100 match score. Scores above 100 are a programming
    /// error upstream, not a runtime condition.
    pub fn for_score(score: u8) -> Self {
        debug_assert!(score <= 100, "match score out of range: {score}");
        if score >= HIGH_CUTOFF {
            MatchTier::High
        } else if score >= MEDIUM_CUTOFF {
            MatchTier::Medium
        } else {
            MatchTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::High => "high",
            MatchTier::Medium => "medium",
            MatchTier::Low => "low",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
