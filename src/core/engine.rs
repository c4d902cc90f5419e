use crate::core::evaluator::{self, EvaluationOptions};
use crate::core::narrative;
use crate::core::report::Report;
use crate::core::scoring::{ScoreTier, TierBoundaries};
use crate::core::share;
use crate::domain::model::{BirthDate, EvaluationResult};
use crate::domain::ports::SettingsProvider;
use crate::utils::error::{MilestoneError, Result};

/// Runs evaluation, scoring and narration for one birth date.
#[derive(Debug, Clone, Default)]
pub struct MilestoneEngine {
    options: EvaluationOptions,
    boundaries: TierBoundaries,
    share_base: Option<String>,
}

impl MilestoneEngine {
    pub fn new(options: EvaluationOptions, boundaries: TierBoundaries) -> Self {
        Self {
            options,
            boundaries,
            share_base: None,
        }
    }

    pub fn from_settings<S: SettingsProvider>(settings: &S) -> Result<Self> {
        let options = EvaluationOptions {
            significance: settings.significance_enabled(),
            significant_ages: settings.significant_ages().to_vec(),
        };
        let boundaries = TierBoundaries::new(settings.tier_boundaries().0)?;
        let engine = Self::new(options, boundaries);
        Ok(match settings.share_base_url() {
            Some(base) => engine.with_share_base(base),
            None => engine,
        })
    }

    pub fn with_share_base(mut self, base: impl Into<String>) -> Self {
        self.share_base = Some(base.into());
        self
    }

    pub fn evaluate(&self, birth: &BirthDate, ages: &[u32]) -> Result<EvaluationResult> {
        evaluator::evaluate(birth, ages, &self.options)
    }

    /// Takes the birth date as typed. Checks run in the order a form would:
    /// missing date, empty selection, then date validity.
    pub fn run(&self, birth_input: &str, ages: &[u32]) -> Result<Report> {
        if birth_input.trim().is_empty() {
            return Err(MilestoneError::MissingBirthDate);
        }
        if ages.is_empty() {
            return Err(MilestoneError::NoMilestonesSelected);
        }
        let birth = BirthDate::parse(birth_input)?;
        self.report(&birth, ages)
    }

    pub fn report(&self, birth: &BirthDate, ages: &[u32]) -> Result<Report> {
        let result = self.evaluate(birth, ages)?;
        let tier = ScoreTier::classify(result.party_count, &self.boundaries);

        tracing::info!(
            "🎂 {} party milestones out of {} ({})",
            result.party_count,
            result.total_milestones,
            tier.as_str()
        );

        let share_url = self
            .share_base
            .as_deref()
            .map(|base| share::share_url(base, birth))
            .transpose()?
            .map(String::from);

        Ok(Report {
            birth_line: narrative::birth_line(&result),
            tier,
            score_class: tier.css_class(),
            score_caption: narrative::score_caption(tier),
            score_message: narrative::score_message(&result, tier),
            summary: narrative::summary(&result, tier),
            explanation: narrative::clustering_explanation(result.birth_weekday),
            share_url,
            result,
        })
    }
}
