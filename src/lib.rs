pub mod api;
pub mod config;
pub mod controller;
pub mod match_tier;
pub mod render;
pub mod services;
pub mod types;

pub use api::{HttpPortalClient, PortalApi};
pub use config::ClientConfig;
pub use controller::{ActiveView, ViewState, ViewStateController};
pub use match_tier::MatchTier;
