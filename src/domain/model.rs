use crate::core::calendar;
use crate::utils::error::{MilestoneError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week, indexed from Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Maps any index onto the week, so 7 is Sunday again.
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % 7) as usize]
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        calendar::DAY_NAMES[self as usize]
    }

    pub fn is_party_day(self) -> bool {
        matches!(self, Weekday::Friday | Weekday::Saturday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A calendar date as supplied by the caller. Not guaranteed to be real
/// until it has passed [`BirthDate::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl BirthDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parses `YYYY-MM-DD`, the format used by date inputs and share links.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MilestoneError::MissingBirthDate);
        }

        let invalid = || MilestoneError::InvalidDate {
            input: trimmed.to_string(),
        };

        let mut parts = trimmed.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let year = y.parse::<i32>().map_err(|_| invalid())?;
        let month = m.parse::<u32>().map_err(|_| invalid())?;
        let day = d.parse::<u32>().map_err(|_| invalid())?;

        let date = Self::new(year, month, day);
        date.validate()?;
        Ok(date)
    }

    /// Real calendar date with a year in `MIN_YEAR..=MAX_YEAR`.
    pub fn validate(&self) -> Result<()> {
        let year_ok = (calendar::MIN_YEAR..=calendar::MAX_YEAR).contains(&self.year);
        if year_ok && calendar::is_valid_date(self.year, self.month, self.day) {
            Ok(())
        } else {
            Err(MilestoneError::InvalidDate {
                input: self.to_string(),
            })
        }
    }

    pub fn weekday(&self) -> Weekday {
        calendar::weekday_of(self.year, self.month, self.day)
    }

    /// "March 4th, 1998"
    pub fn formatted(&self) -> String {
        calendar::format_date(self.year, self.month, self.day)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Styling bucket for a row of the full calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayClass {
    Friday,
    Saturday,
    Sunday,
    Weekday,
}

impl DayClass {
    pub fn as_str(self) -> &'static str {
        match self {
            DayClass::Friday => "friday",
            DayClass::Saturday => "saturday",
            DayClass::Sunday => "sunday",
            DayClass::Weekday => "weekday",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneRecord {
    pub age: u32,
    pub milestone_year: i32,
    pub weekday: Weekday,
    pub is_party_day: bool,
    pub is_significant: bool,
}

impl MilestoneRecord {
    pub fn weekday_index(&self) -> u32 {
        self.weekday.index()
    }

    pub fn weekday_name(&self) -> &'static str {
        self.weekday.name()
    }

    /// "18th"
    pub fn ordinal_age(&self) -> String {
        calendar::ordinal(self.age)
    }

    pub fn day_class(&self) -> DayClass {
        match self.weekday {
            Weekday::Friday => DayClass::Friday,
            Weekday::Saturday => DayClass::Saturday,
            Weekday::Sunday => DayClass::Sunday,
            _ => DayClass::Weekday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub birth_date: BirthDate,
    pub birth_weekday: Weekday,
    pub records: Vec<MilestoneRecord>,
    pub party_milestones: Vec<MilestoneRecord>,
    pub party_count: usize,
    pub total_milestones: usize,
    pub best: Option<MilestoneRecord>,
}

impl EvaluationResult {
    pub fn on_weekday(&self, weekday: Weekday) -> Vec<&MilestoneRecord> {
        self.records.iter().filter(|r| r.weekday == weekday).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_birth_date() {
        let date = BirthDate::parse("1998-03-04").unwrap();
        assert_eq!(date, BirthDate::new(1998, 3, 4));
        assert_eq!(date.to_string(), "1998-03-04");
        assert_eq!(date.weekday(), Weekday::Wednesday);
    }

    #[test]
    fn test_parse_missing_birth_date() {
        assert!(matches!(
            BirthDate::parse("   "),
            Err(MilestoneError::MissingBirthDate)
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_and_unreal_dates() {
        for input in ["1998/03/04", "1998-03", "1998-03-04-01", "abcd-01-01", "2021-02-29", "2020-13-01"] {
            assert!(
                matches!(BirthDate::parse(input), Err(MilestoneError::InvalidDate { .. })),
                "{input} should be invalid"
            );
        }
    }

    #[test]
    fn test_parse_rejects_years_outside_four_digits() {
        for input in ["0000-01-01", "-005-01-01", "10000-01-01", "2147483647-01-01"] {
            assert!(
                matches!(BirthDate::parse(input), Err(MilestoneError::InvalidDate { .. })),
                "{input} should be invalid"
            );
        }
        assert!(matches!(
            BirthDate::new(-5, 1, 1).validate(),
            Err(MilestoneError::InvalidDate { .. })
        ));
        assert!(BirthDate::parse("0001-01-01").is_ok());
        assert!(BirthDate::parse("9999-12-31").is_ok());
    }

    #[test]
    fn test_valid_dates_display_in_parseable_form() {
        for date in [BirthDate::new(1, 1, 1), BirthDate::new(9999, 12, 31)] {
            assert_eq!(BirthDate::parse(&date.to_string()).unwrap(), date);
        }
    }

    #[test]
    fn test_weekday_index_round_trip() {
        for weekday in Weekday::ALL {
            assert_eq!(Weekday::from_index(weekday.index()), weekday);
        }
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
        assert!(Weekday::Friday.is_party_day());
        assert!(Weekday::Saturday.is_party_day());
        assert!(!Weekday::Sunday.is_party_day());
    }

    #[test]
    fn test_day_class() {
        let record = |weekday| MilestoneRecord {
            age: 18,
            milestone_year: 2016,
            weekday,
            is_party_day: weekday.is_party_day(),
            is_significant: true,
        };
        assert_eq!(record(Weekday::Friday).day_class(), DayClass::Friday);
        assert_eq!(record(Weekday::Sunday).day_class(), DayClass::Sunday);
        assert_eq!(record(Weekday::Tuesday).day_class(), DayClass::Weekday);
        assert_eq!(record(Weekday::Tuesday).ordinal_age(), "18th");
    }
}
