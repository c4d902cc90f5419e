//! Text built from an [`EvaluationResult`]. Everything here is a pure
//! function of its inputs.
//!
//! Summary wording is looked up in [`SUMMARY_RULES`] by tone and by how the
//! party days split between Friday and Saturday, instead of branching on
//! every count separately.

use crate::core::calendar::ordinal;
use crate::core::scoring::ScoreTier;
use crate::domain::model::{EvaluationResult, MilestoneRecord, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Apologetic,
    Modest,
    Congratulatory,
}

impl Tone {
    pub fn for_tier(tier: ScoreTier) -> Self {
        match tier {
            ScoreTier::None => Tone::Apologetic,
            ScoreTier::Single | ScoreTier::Modest => Tone::Modest,
            ScoreTier::Good | ScoreTier::Great => Tone::Congratulatory,
        }
    }
}

/// How party days split between Friday and Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPattern {
    NoParty,
    FridayHeavy,
    SaturdayHeavy,
    Mixed,
}

impl DayPattern {
    pub fn from_counts(fridays: usize, saturdays: usize) -> Self {
        if fridays == 0 && saturdays == 0 {
            DayPattern::NoParty
        } else if fridays > 0 && saturdays > 0 {
            DayPattern::Mixed
        } else if saturdays > fridays {
            DayPattern::SaturdayHeavy
        } else {
            DayPattern::FridayHeavy
        }
    }
}

/// Which part of the pattern a rule applies to; `None` matches any pattern.
struct SummaryRule {
    tone: Tone,
    pattern: Option<DayPattern>,
    sentences: &'static [&'static str],
}

const SUMMARY_RULES: &[SummaryRule] = &[
    SummaryRule {
        tone: Tone::Apologetic,
        pattern: None,
        sentences: &[
            "Unfortunately, none of your selected milestones fall on a Friday or Saturday.",
            "Consider celebrating on the nearest weekend instead.",
        ],
    },
    SummaryRule {
        tone: Tone::Modest,
        pattern: None,
        sentences: &["You have a modest number of weekend milestones."],
    },
    SummaryRule {
        tone: Tone::Congratulatory,
        pattern: Some(DayPattern::Mixed),
        sentences: &[
            "You have excellent party luck.",
            "A good mix of Fridays and Saturdays gives you flexibility for celebrations.",
        ],
    },
    SummaryRule {
        tone: Tone::Congratulatory,
        pattern: Some(DayPattern::SaturdayHeavy),
        sentences: &[
            "You have excellent party luck.",
            "Most of your party milestones land on Saturdays.",
        ],
    },
    SummaryRule {
        tone: Tone::Congratulatory,
        pattern: None,
        sentences: &[
            "You have excellent party luck.",
            "Many of your milestones fall on Fridays, perfect for starting birthday weekends.",
        ],
    },
];

fn lookup_rule(tone: Tone, pattern: DayPattern) -> Option<&'static SummaryRule> {
    SUMMARY_RULES
        .iter()
        .find(|rule| rule.tone == tone && rule.pattern.map_or(true, |p| p == pattern))
}

/// Joins ages as ordinals: "18th", "18th and 21st", "1st, 18th, and 80th".
pub fn join_ages(records: &[&MilestoneRecord]) -> String {
    let names: Vec<String> = records.iter().map(|r| ordinal(r.age)).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

/// "Your 18th falls on Friday." / "Your 18th and 80th fall on Friday."
fn day_sentence(records: &[&MilestoneRecord], singular: &str, plural: &str, day: Weekday) -> String {
    let verb = if records.len() == 1 { singular } else { plural };
    format!("Your {} {} on {}.", join_ages(records), verb, day)
}

pub fn score_message(result: &EvaluationResult, tier: ScoreTier) -> String {
    let count = result.party_count;
    let total = result.total_milestones;
    match tier {
        ScoreTier::None => format!(
            "None of your {} milestone birthdays land on a Friday or Saturday",
            total
        ),
        ScoreTier::Single => format!(
            "{} of {} milestone birthdays lands on a Friday or Saturday",
            count, total
        ),
        ScoreTier::Modest => format!(
            "{} of {} milestone birthdays on Friday or Saturday, a fair share",
            count, total
        ),
        ScoreTier::Good => format!(
            "{} of {} milestone birthdays on Friday or Saturday, a good run",
            count, total
        ),
        ScoreTier::Great => format!(
            "{} of {} milestone birthdays on Friday or Saturday, a great party record",
            count, total
        ),
    }
}

/// Caption that sits next to the big party count on the score card.
pub fn score_caption(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::None => "No milestone birthdays on Friday or Saturday",
        ScoreTier::Single => "milestone birthday on a Friday or Saturday",
        _ => "milestone birthdays on Friday or Saturday",
    }
}

pub fn summary(result: &EvaluationResult, tier: ScoreTier) -> String {
    let fridays = result.on_weekday(Weekday::Friday);
    let saturdays = result.on_weekday(Weekday::Saturday);
    let sundays = result.on_weekday(Weekday::Sunday);

    let mut sentences = vec![format!(
        "Born on a {}, your milestone days follow a set pattern.",
        result.birth_weekday
    )];

    let tone = Tone::for_tier(tier);
    let pattern = DayPattern::from_counts(fridays.len(), saturdays.len());
    if let Some(rule) = lookup_rule(tone, pattern) {
        sentences.extend(rule.sentences.iter().map(|s| s.to_string()));
    }

    if tone == Tone::Modest {
        if !fridays.is_empty() {
            sentences.push(day_sentence(&fridays, "falls", "fall", Weekday::Friday));
        }
        if !saturdays.is_empty() {
            sentences.push(day_sentence(&saturdays, "lands", "land", Weekday::Saturday));
        }
    }

    if (1..=2).contains(&sundays.len()) {
        sentences.push(day_sentence(&sundays, "falls", "fall", Weekday::Sunday));
    }

    sentences.join(" ")
}

/// Why milestones clump together. Depends only on the birth weekday.
pub fn clustering_explanation(birth_weekday: Weekday) -> String {
    format!(
        "Each year, your birthday shifts forward by one day of the week (two days after a leap year). \
         This creates predictable \"clumps\" of milestones that land on similar days. \
         For someone born on a {}, certain milestone groups tend to cluster together. \
         That's why your 1st, 18th, and 80th birthdays often land on adjacent days, \
         while your 21st, 60th, and 100th form another cluster.",
        birth_weekday
    )
}

/// "Born on March 4th, 1998, a Wednesday"
pub fn birth_line(result: &EvaluationResult) -> String {
    format!(
        "Born on {}, a {}",
        result.birth_date.formatted(),
        result.birth_weekday
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluator::{evaluate, EvaluationOptions};
    use crate::core::scoring::TierBoundaries;
    use crate::domain::model::BirthDate;

    fn run(birth: (i32, u32, u32), ages: &[u32]) -> (EvaluationResult, ScoreTier) {
        let birth = BirthDate::new(birth.0, birth.1, birth.2);
        let result = evaluate(&birth, ages, &EvaluationOptions::default()).unwrap();
        let tier = ScoreTier::classify(result.party_count, &TierBoundaries::default());
        (result, tier)
    }

    #[test]
    fn test_join_ages() {
        let rec = |age| MilestoneRecord {
            age,
            milestone_year: 2000,
            weekday: Weekday::Friday,
            is_party_day: true,
            is_significant: false,
        };
        let (a, b, c) = (rec(1), rec(18), rec(80));
        assert_eq!(join_ages(&[&a]), "1st");
        assert_eq!(join_ages(&[&a, &b]), "1st and 18th");
        assert_eq!(join_ages(&[&a, &b, &c]), "1st, 18th, and 80th");
    }

    #[test]
    fn test_summary_zero() {
        let (result, tier) = run((1998, 3, 4), &[1, 16, 21]);
        assert_eq!(
            summary(&result, tier),
            "Born on a Wednesday, your milestone days follow a set pattern. \
             Unfortunately, none of your selected milestones fall on a Friday or Saturday. \
             Consider celebrating on the nearest weekend instead."
        );
    }

    #[test]
    fn test_summary_single_friday() {
        let (result, tier) = run((1998, 3, 4), &[1, 16, 18, 21]);
        assert_eq!(tier, ScoreTier::Single);
        assert_eq!(
            summary(&result, tier),
            "Born on a Wednesday, your milestone days follow a set pattern. \
             You have a modest number of weekend milestones. \
             Your 18th falls on Friday."
        );
    }

    #[test]
    fn test_summary_modest_friday_and_saturday() {
        let (result, tier) = run((1998, 3, 4), &[18, 30]);
        assert_eq!(tier, ScoreTier::Modest);
        assert_eq!(
            summary(&result, tier),
            "Born on a Wednesday, your milestone days follow a set pattern. \
             You have a modest number of weekend milestones. \
             Your 18th falls on Friday. Your 30th lands on Saturday."
        );
    }

    #[test]
    fn test_summary_modest_plural_friday() {
        let (result, tier) = run((1998, 3, 4), &[18, 80]);
        assert!(summary(&result, tier).ends_with("Your 18th and 80th fall on Friday."));
    }

    #[test]
    fn test_summary_mixed_with_sunday() {
        let (result, tier) = run((1998, 3, 4), &[1, 16, 18, 21, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(tier, ScoreTier::Good);
        assert_eq!(
            summary(&result, tier),
            "Born on a Wednesday, your milestone days follow a set pattern. \
             You have excellent party luck. \
             A good mix of Fridays and Saturdays gives you flexibility for celebrations. \
             Your 70th falls on Sunday."
        );
    }

    #[test]
    fn test_summary_friday_heavy() {
        let (result, tier) = run((2000, 1, 1), &[16, 21, 100]);
        assert!(summary(&result, tier).contains(
            "Many of your milestones fall on Fridays, perfect for starting birthday weekends."
        ));
    }

    #[test]
    fn test_summary_saturday_heavy() {
        let (result, tier) = run((1990, 6, 15), &[1, 40, 90]);
        assert!(summary(&result, tier).contains("Most of your party milestones land on Saturdays."));
    }

    #[test]
    fn test_summary_two_sundays_plural() {
        let (result, tier) = run((2000, 1, 1), &[40, 90]);
        assert!(summary(&result, tier).ends_with("Your 40th and 90th fall on Sunday."));
    }

    #[test]
    fn test_summary_skips_three_sundays() {
        // only one or two Sunday milestones get named
        let (mut result, tier) = run((2000, 1, 1), &[40, 90]);
        let mut extra = result.records[0].clone();
        extra.age = 96;
        result.records.push(extra);
        assert!(!summary(&result, tier).contains("Sunday"));
    }

    #[test]
    fn test_summary_modest_plural_saturday() {
        let (result, tier) = run((1990, 6, 15), &[1, 40]);
        assert_eq!(tier, ScoreTier::Modest);
        assert_eq!(
            summary(&result, tier),
            "Born on a Friday, your milestone days follow a set pattern. \
             You have a modest number of weekend milestones. \
             Your 1st and 40th land on Saturday."
        );
    }

    #[test]
    fn test_score_message_per_tier() {
        let cases: [((i32, u32, u32), &[u32], ScoreTier, &str); 5] = [
            (
                (1998, 3, 4),
                &[1, 16, 21],
                ScoreTier::None,
                "None of your 3 milestone birthdays land on a Friday or Saturday",
            ),
            (
                (1998, 3, 4),
                &[1, 16, 18, 21],
                ScoreTier::Single,
                "1 of 4 milestone birthdays lands on a Friday or Saturday",
            ),
            (
                (1998, 3, 4),
                &[18, 30],
                ScoreTier::Modest,
                "2 of 2 milestone birthdays on Friday or Saturday, a fair share",
            ),
            (
                (1998, 3, 4),
                &[1, 16, 18, 21, 30, 40, 50, 60, 70, 80, 90, 100],
                ScoreTier::Good,
                "3 of 12 milestone birthdays on Friday or Saturday, a good run",
            ),
            (
                (2000, 1, 1),
                &[16, 21, 50, 100],
                ScoreTier::Great,
                "4 of 4 milestone birthdays on Friday or Saturday, a great party record",
            ),
        ];

        for (birth, ages, expected_tier, expected) in cases {
            let (result, tier) = run(birth, ages);
            assert_eq!(tier, expected_tier);
            assert_eq!(score_message(&result, tier), expected);
        }
    }

    #[test]
    fn test_clustering_explanation_mentions_weekday() {
        let text = clustering_explanation(Weekday::Wednesday);
        assert!(text.contains("born on a Wednesday"));
        assert!(text.starts_with("Each year, your birthday shifts forward by one day"));
    }

    #[test]
    fn test_birth_line() {
        let (result, _) = run((1998, 3, 4), &[18]);
        assert_eq!(birth_line(&result), "Born on March 4th, 1998, a Wednesday");
    }
}
