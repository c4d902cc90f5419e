use crate::core::scoring::TierBoundaries;

/// Anything that can tell the engine how to behave: the TOML file, CLI
/// overrides or plain defaults.
pub trait SettingsProvider {
    fn custom_milestones(&self) -> &[u32];
    fn allow_remove_defaults(&self) -> bool;
    fn strict(&self) -> bool;
    fn significance_enabled(&self) -> bool;
    fn significant_ages(&self) -> &[u32];
    fn tier_boundaries(&self) -> TierBoundaries;
    fn share_base_url(&self) -> Option<&str>;
}
