// src/render.rs
//! Terminal rendering surface - one function per view variant, selected by
//! the controller's current state.

use std::fmt::Write;

use crate::controller::{ActiveView, ViewState};
use crate::match_tier::MatchTier;
use crate::types::models::Recommendation;

const DESCRIPTION_PREVIEW_CHARS: usize = 200;

pub fn render_view(state: &ViewState, recommendations: &[Recommendation]) -> String {
    let mut out = String::new();

    render_tabs(&mut out, state.active_view);
    if let Some(notice) = &state.notice {
        let _ = writeln!(out, "! {notice}");
    }

    match state.active_view {
        ActiveView::Listings => render_listings(&mut out, state),
        ActiveView::Upload => render_upload(&mut out, state),
        ActiveView::Recommendations => render_recommendations(&mut out, recommendations),
    }

    out
}

fn render_tabs(out: &mut String, active: ActiveView) {
    let tab = |view: ActiveView, label: &str| {
        if view == active {
            format!("[{label}]")
        } else {
            format!(" {label} ")
        }
    };

    let _ = writeln!(
        out,
        "{} {} {}",
        tab(ActiveView::Listings, "Job Listings"),
        tab(ActiveView::Upload, "Upload Resume"),
        tab(ActiveView::Recommendations, "Recommendations"),
    );
    let _ = writeln!(out, "{}", "-".repeat(52));
}

fn render_listings(out: &mut String, state: &ViewState) {
    let _ = writeln!(
        out,
        "Search: {:?}  Location: {:?}",
        state.search_term, state.location_filter
    );

    if state.jobs.is_empty() {
        let _ = writeln!(out, "No jobs to show. Try 'search'.");
        return;
    }

    for job in &state.jobs {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", job.title);
        let _ = writeln!(out, "{} - {}", job.company, job.location);
        let _ = writeln!(out, "Posted: {}", job.posted_date);
        let _ = writeln!(out, "{}", preview(&job.description));
    }
}

fn render_upload(out: &mut String, state: &ViewState) {
    let _ = writeln!(out, "Upload your PDF resume to get job recommendations.");
    let _ = writeln!(out, "Use: send <path-to-pdf>");

    if let Some(candidate) = &state.candidate {
        let _ = writeln!(out);
        let _ = writeln!(out, "Skills found: {}", candidate.skills.join(", "));
        if !candidate.resume_excerpt.is_empty() {
            let _ = writeln!(out, "Extracted text: {}", preview(&candidate.resume_excerpt));
        }
    }
}

fn render_recommendations(out: &mut String, recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        let _ = writeln!(out, "No recommendations yet. Upload a resume first.");
        return;
    }

    for rec in recommendations {
        let tier = MatchTier::for_score(rec.match_score);
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({}% match, {tier})", rec.job_title, rec.match_score);
        let _ = writeln!(out, "{} - {}", rec.company, rec.location);
        let _ = writeln!(out, "Matching skills: {}", rec.matching_skills.join(", "));
        let _ = writeln!(out, "Skills to learn: {}", rec.missing_skills.join(", "));
        let _ = writeln!(out, "{}", rec.explanation);
    }
}

fn preview(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ActiveView;
    use crate::types::models::Job;
    use chrono::NaiveDate;

    fn state_with_jobs() -> ViewState {
        ViewState {
            active_view: ActiveView::Listings,
            search_term: String::new(),
            location_filter: String::new(),
            jobs: vec![Job {
                id: 1,
                title: "Backend Engineer".to_string(),
                company: "Acme".to_string(),
                location: "Austin, TX".to_string(),
                description: "d".repeat(300),
                posted_date: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
            }],
            candidate: None,
            notice: None,
        }
    }

    #[test]
    fn test_active_tab_is_marked() {
        let state = state_with_jobs();
        let rendered = render_view(&state, &[]);
        assert!(rendered.contains("[Job Listings]"));
        assert!(!rendered.contains("[Upload Resume]"));
    }

    #[test]
    fn test_listings_view_shows_jobs_and_truncates_description() {
        let state = state_with_jobs();
        let rendered = render_view(&state, &[]);
        assert!(rendered.contains("Backend Engineer"));
        assert!(rendered.contains("Acme - Austin, TX"));
        assert!(rendered.contains("Posted: 2026-08-20"));
        assert!(rendered.contains(&format!("{}...", "d".repeat(200))));
        assert!(!rendered.contains(&"d".repeat(201)));
    }

    #[test]
    fn test_recommendations_view_shows_score_and_tier() {
        let mut state = state_with_jobs();
        state.active_view = ActiveView::Recommendations;
        let recs = vec![Recommendation {
            job_id: 1,
            job_title: "Data Engineer".to_string(),
            company: "Netflix".to_string(),
            location: "Boston, MA".to_string(),
            match_score: 85,
            matching_skills: vec!["Python".to_string()],
            missing_skills: vec!["Spark".to_string()],
            explanation: "Good fit.".to_string(),
        }];

        let rendered = render_view(&state, &recs);
        assert!(rendered.contains("Data Engineer (85% match, high)"));
        assert!(rendered.contains("Matching skills: Python"));
        assert!(rendered.contains("Skills to learn: Spark"));
    }

    #[test]
    fn test_notice_is_rendered_on_any_view() {
        let mut state = state_with_jobs();
        state.active_view = ActiveView::Upload;
        state.notice = Some("Error processing resume. Please try again.".to_string());

        let rendered = render_view(&state, &[]);
        assert!(rendered.contains("! Error processing resume."));
    }

    #[test]
    fn test_preview_keeps_short_text_intact() {
        assert_eq!(preview("short"), "short");
    }
}
