use crate::core::milestones::{MAX_MILESTONE_AGE, MIN_MILESTONE_AGE};
use crate::core::report::OutputFormat;
use crate::core::scoring::{TierBoundaries, SIGNIFICANT_AGES};
use crate::domain::ports::SettingsProvider;
use crate::utils::error::{MilestoneError, Result};
use crate::utils::validation::{validate_range, validate_unique, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub milestones: MilestonesConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    pub share: Option<ShareConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MilestonesConfig {
    pub custom: Option<Vec<u32>>,
    pub allow_remove_defaults: Option<bool>,
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub significance: Option<bool>,
    pub significant_ages: Option<Vec<u32>>,
    pub tier_boundaries: Option<[usize; 4]>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MilestoneError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MilestoneError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SHARE_BASE_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MilestoneError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(custom) = &self.milestones.custom {
            for &age in custom {
                validate_range("milestones.custom", age, MIN_MILESTONE_AGE, MAX_MILESTONE_AGE)?;
            }
            validate_unique("milestones.custom", custom)?;
        }

        if let Some(ages) = &self.scoring.significant_ages {
            for &age in ages {
                validate_range(
                    "scoring.significant_ages",
                    age,
                    MIN_MILESTONE_AGE,
                    MAX_MILESTONE_AGE,
                )?;
            }
            validate_unique("scoring.significant_ages", ages)?;
        }

        if let Some(bounds) = self.scoring.tier_boundaries {
            TierBoundaries::new(bounds)?;
        }

        if let Some(share) = &self.share {
            validate_url("share.base_url", &share.base_url)?;
        }

        Ok(())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }
}

impl SettingsProvider for TomlConfig {
    fn custom_milestones(&self) -> &[u32] {
        self.milestones.custom.as_deref().unwrap_or(&[])
    }

    fn allow_remove_defaults(&self) -> bool {
        self.milestones.allow_remove_defaults.unwrap_or(false)
    }

    fn strict(&self) -> bool {
        self.milestones.strict.unwrap_or(false)
    }

    fn significance_enabled(&self) -> bool {
        self.scoring.significance.unwrap_or(true)
    }

    fn significant_ages(&self) -> &[u32] {
        self.scoring
            .significant_ages
            .as_deref()
            .unwrap_or(&SIGNIFICANT_AGES)
    }

    fn tier_boundaries(&self) -> TierBoundaries {
        self.scoring
            .tier_boundaries
            .map(TierBoundaries)
            .unwrap_or_default()
    }

    fn share_base_url(&self) -> Option<&str> {
        self.share.as_ref().map(|s| s.base_url.as_str())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
