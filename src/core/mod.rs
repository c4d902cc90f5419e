pub mod calendar;
pub mod engine;
pub mod evaluator;
pub mod milestones;
pub mod narrative;
pub mod report;
pub mod scoring;
pub mod session;
pub mod share;

pub use crate::domain::model::{BirthDate, EvaluationResult, MilestoneRecord, Weekday};
pub use crate::domain::ports::SettingsProvider;
pub use crate::utils::error::Result;
