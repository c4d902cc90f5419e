use crate::domain::model::MilestoneRecord;
use crate::utils::error::{MilestoneError, Result};
use crate::utils::validation::validate_non_decreasing;
use serde::{Deserialize, Serialize};

/// Ages worth highlighting, most preferred first.
pub const SIGNIFICANT_AGES: [u32; 5] = [18, 21, 30, 40, 50];

/// Records that land on Friday or Saturday, in evaluator order.
pub fn party_milestones(records: &[MilestoneRecord]) -> Vec<MilestoneRecord> {
    records.iter().filter(|r| r.is_party_day).cloned().collect()
}

/// Picks the party-day record to highlight. Significant ages win in the
/// order of `significance_order`, regardless of where they appear in the
/// input; otherwise the first party-day record is used.
pub fn select_best<'a>(
    party: &'a [MilestoneRecord],
    significance_order: &[u32],
) -> Option<&'a MilestoneRecord> {
    let rank = |record: &MilestoneRecord| {
        significance_order
            .iter()
            .position(|&age| age == record.age)
    };

    party
        .iter()
        .filter(|r| r.is_significant)
        .filter_map(|r| rank(r).map(|pos| (pos, r)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, r)| r)
        .or_else(|| party.first())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    None,
    Single,
    Modest,
    Good,
    Great,
}

impl ScoreTier {
    pub fn classify(party_count: usize, boundaries: &TierBoundaries) -> Self {
        let [none, single, modest, good] = boundaries.0;
        if party_count <= none {
            ScoreTier::None
        } else if party_count <= single {
            ScoreTier::Single
        } else if party_count <= modest {
            ScoreTier::Modest
        } else if party_count <= good {
            ScoreTier::Good
        } else {
            ScoreTier::Great
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreTier::None => "none",
            ScoreTier::Single => "single",
            ScoreTier::Modest => "modest",
            ScoreTier::Good => "good",
            ScoreTier::Great => "great",
        }
    }

    /// Score card styling; the two lowest tiers are unstyled.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            ScoreTier::None | ScoreTier::Single => None,
            ScoreTier::Modest => Some("score-okay"),
            ScoreTier::Good => Some("score-good"),
            ScoreTier::Great => Some("score-great"),
        }
    }
}

/// Upper party counts of the none, single, modest and good tiers. Anything
/// above the last one is great. `[0, 1, 3, 3]` merges modest and good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBoundaries(pub [usize; 4]);

impl TierBoundaries {
    pub fn new(bounds: [usize; 4]) -> Result<Self> {
        validate_non_decreasing("scoring.tier_boundaries", &bounds)?;
        if bounds[0] != 0 {
            return Err(MilestoneError::InvalidConfigValueError {
                field: "scoring.tier_boundaries".to_string(),
                value: format!("{:?}", bounds),
                reason: "The first boundary must be 0".to_string(),
            });
        }
        Ok(Self(bounds))
    }
}

impl Default for TierBoundaries {
    fn default() -> Self {
        Self([0, 1, 2, 3])
    }
}
