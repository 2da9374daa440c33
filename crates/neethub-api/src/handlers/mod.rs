pub mod ai;
pub mod analytics;
pub mod health;
pub mod mock_tests;
pub mod practice;
pub mod questions;
pub mod study_plan;
pub mod syllabus;
pub mod users;

pub use ai::{BuddyResponse, MessageResponse};
pub use health::HealthResponse;
pub use questions::{PopulateResponse, QuestionsResponse};
