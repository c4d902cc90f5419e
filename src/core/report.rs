use crate::core::scoring::ScoreTier;
use crate::domain::model::{EvaluationResult, MilestoneRecord};
use crate::utils::error::{MilestoneError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

pub const NO_PARTY_MILESTONES: &str = "None of your milestones land on a weekend";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Everything a presentation layer needs from one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub birth_line: String,
    pub result: EvaluationResult,
    pub tier: ScoreTier,
    pub score_class: Option<&'static str>,
    pub score_caption: &'static str,
    pub score_message: String,
    pub summary: String,
    pub explanation: String,
    pub share_url: Option<String>,
}

#[derive(Serialize)]
struct CsvRow {
    age: u32,
    year: i32,
    weekday: &'static str,
    party_day: bool,
    significant: bool,
}

impl From<&MilestoneRecord> for CsvRow {
    fn from(record: &MilestoneRecord) -> Self {
        Self {
            age: record.age,
            year: record.milestone_year,
            weekday: record.weekday_name(),
            party_day: record.is_party_day,
            significant: record.is_significant,
        }
    }
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Csv => self.to_csv(),
        }
    }

    /// One line per party-day milestone, or a single placeholder line.
    pub fn party_lines(&self) -> Vec<String> {
        if self.result.party_milestones.is_empty() {
            return vec![NO_PARTY_MILESTONES.to_string()];
        }
        self.result
            .party_milestones
            .iter()
            .map(|m| {
                format!(
                    "{} Birthday  {}  {}",
                    m.ordinal_age(),
                    m.milestone_year,
                    m.weekday
                )
            })
            .collect()
    }

    /// Every evaluated milestone with its styling class.
    pub fn calendar_lines(&self) -> Vec<String> {
        self.result
            .records
            .iter()
            .map(|m| {
                format!(
                    "{:<6} {}  {:<9} [{}]",
                    m.ordinal_age(),
                    m.milestone_year,
                    m.weekday_name(),
                    m.day_class().as_str()
                )
            })
            .collect()
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();

        // write! 到 String 不會失敗
        let _ = writeln!(out, "{}", self.birth_line);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "🎉 {} {} [{}]",
            self.result.party_count,
            self.score_caption,
            self.score_class.unwrap_or(self.tier.as_str())
        );
        let _ = writeln!(out, "{}", self.score_message);

        let _ = writeln!(out, "\nParty milestones");
        for line in self.party_lines() {
            let _ = writeln!(out, "  {}", line);
        }
        if let Some(best) = &self.result.best {
            let _ = writeln!(
                out,
                "  ★ Best: your {} on {}, {}",
                best.ordinal_age(),
                best.weekday,
                best.milestone_year
            );
        }

        let _ = writeln!(out, "\nFull calendar");
        for line in self.calendar_lines() {
            let _ = writeln!(out, "  {}", line);
        }

        let _ = writeln!(out, "\nSummary\n  {}", self.summary);
        let _ = writeln!(out, "\nWhy the clumps?\n  {}", self.explanation);

        if let Some(url) = &self.share_url {
            let _ = writeln!(out, "\nShare: {}", url);
        }
        out
    }

    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in &self.result.records {
            writer.serialize(CsvRow::from(record))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| MilestoneError::IoError(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
