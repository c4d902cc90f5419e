use crate::core::calendar;
use crate::core::milestones::check_age;
use crate::core::scoring::{self, SIGNIFICANT_AGES};
use crate::domain::model::{BirthDate, EvaluationResult, MilestoneRecord};
use crate::utils::error::{MilestoneError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// When false no record is significant and the best pick is simply the
    /// first party-day record.
    pub significance: bool,
    pub significant_ages: Vec<u32>,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            significance: true,
            significant_ages: SIGNIFICANT_AGES.to_vec(),
        }
    }
}

/// One record per age, in the order given.
///
/// The birth day is passed through unchanged, so a February 29th birthday
/// reports March 1st in common milestone years.
pub fn evaluate(
    birth: &BirthDate,
    ages: &[u32],
    options: &EvaluationOptions,
) -> Result<EvaluationResult> {
    if ages.is_empty() {
        return Err(MilestoneError::NoMilestonesSelected);
    }
    birth.validate()?;

    let birth_weekday = birth.weekday();

    let records = ages
        .iter()
        .map(|&age| -> Result<MilestoneRecord> {
            check_age(age as i64)?;
            let milestone_year = birth.year.checked_add(age as i32).ok_or_else(|| {
                MilestoneError::InvalidDate {
                    input: birth.to_string(),
                }
            })?;
            let weekday = calendar::weekday_of(milestone_year, birth.month, birth.day);
            Ok(MilestoneRecord {
                age,
                milestone_year,
                weekday,
                is_party_day: weekday.is_party_day(),
                is_significant: options.significance && options.significant_ages.contains(&age),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let party_milestones = scoring::party_milestones(&records);
    let best = scoring::select_best(&party_milestones, &options.significant_ages).cloned();

    tracing::debug!(
        "Evaluated {} milestones for {} ({}): {} on a party day",
        records.len(),
        birth,
        birth_weekday,
        party_milestones.len()
    );

    Ok(EvaluationResult {
        birth_date: *birth,
        birth_weekday,
        party_count: party_milestones.len(),
        total_milestones: records.len(),
        records,
        party_milestones,
        best,
    })
}
