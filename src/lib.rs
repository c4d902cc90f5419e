pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::core::{
    engine::MilestoneEngine,
    milestones::{MilestoneSet, RemovalPolicy, SelectionMask},
    report::{OutputFormat, Report},
    scoring::{ScoreTier, TierBoundaries},
    session::Session,
};
pub use domain::model::{BirthDate, DayClass, EvaluationResult, MilestoneRecord, Weekday};
pub use utils::error::{MilestoneError, Result};
