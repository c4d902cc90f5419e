use crate::config::toml_config::{OutputConfig, ShareConfig, TomlConfig};
use crate::core::report::OutputFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "milestone-days")]
#[command(about = "Find out which milestone birthdays land on a Friday or Saturday")]
pub struct CliConfig {
    /// Birth date as YYYY-MM-DD
    #[arg(short, long)]
    pub birthday: Option<String>,

    /// Read the birth date from a shared link (its `b` parameter)
    #[arg(long, conflicts_with = "birthday")]
    pub from_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Extra milestone ages to add
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub add: Vec<i64>,

    /// Milestone ages to remove
    #[arg(long, value_delimiter = ',')]
    pub remove: Vec<u32>,

    /// Evaluate only these ages
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<u32>,

    /// Deselect every milestone
    #[arg(long)]
    pub none: bool,

    /// Allow default ages to be removed
    #[arg(long)]
    pub allow_remove_defaults: bool,

    /// Treat rejected additions and removals as errors
    #[arg(long)]
    pub strict: bool,

    /// Do not prefer significant ages when picking the best milestone
    #[arg(long)]
    pub no_significance: bool,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Base URL for the share link
    #[arg(long)]
    pub share_base: Option<String>,

    /// Print the current milestone set and exit
    #[arg(long)]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 命令列參數覆蓋檔案設定
    pub fn apply_to(&self, config: &mut TomlConfig) {
        if self.allow_remove_defaults {
            config.milestones.allow_remove_defaults = Some(true);
        }
        if self.strict {
            config.milestones.strict = Some(true);
        }
        if self.no_significance {
            config.scoring.significance = Some(false);
        }
        if let Some(base_url) = &self.share_base {
            config.share = Some(ShareConfig {
                base_url: base_url.clone(),
            });
        }
        if let Some(format) = self.format {
            config.output = Some(OutputConfig {
                format: Some(format),
            });
        }
    }

    pub fn birth_input(&self) -> Option<&str> {
        self.birthday.as_deref()
    }
}
