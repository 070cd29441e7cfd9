pub mod ai;
pub mod auth;
pub mod content;
pub mod dashboard;
pub mod engagement;
pub mod feed;
pub mod generation;
pub mod membership;
pub mod narrative;
