use crate::core::milestones::{MilestoneSet, RemovalPolicy, SelectionMask};
use crate::domain::ports::SettingsProvider;
use crate::utils::error::{MilestoneError, Result};

/// Owns the one mutable milestone set plus which of its ages are selected.
///
/// In strict mode rejected changes come back as errors. Otherwise they are
/// logged and reported as `Ok(false)`; in both cases the set is unchanged.
#[derive(Debug, Clone)]
pub struct Session {
    milestones: MilestoneSet,
    selection: SelectionMask,
    policy: RemovalPolicy,
    strict: bool,
}

impl Session {
    pub fn new(policy: RemovalPolicy, strict: bool) -> Self {
        let milestones = MilestoneSet::defaults();
        let selection = milestones.toggle_all(true);
        Self {
            milestones,
            selection,
            policy,
            strict,
        }
    }

    /// Starts from the defaults and adds the configured custom ages.
    pub fn from_settings<S: SettingsProvider>(settings: &S) -> Result<Self> {
        let policy = RemovalPolicy {
            allow_remove_defaults: settings.allow_remove_defaults(),
        };
        let mut session = Self::new(policy, settings.strict());
        for &age in settings.custom_milestones() {
            session.add_milestone(age as i64)?;
        }
        Ok(session)
    }

    pub fn list_current(&self) -> &[u32] {
        self.milestones.ages()
    }

    pub fn selection(&self) -> &SelectionMask {
        &self.selection
    }

    pub fn selected_ages(&self) -> Vec<u32> {
        self.selection.selected_ages()
    }

    /// Newly added ages start out selected.
    pub fn add_milestone(&mut self, age: i64) -> Result<bool> {
        match self.milestones.add(age) {
            Ok(updated) => {
                self.milestones = updated;
                self.selection.insert(age as u32, true);
                tracing::info!("➕ Added milestone {}", age);
                Ok(true)
            }
            Err(e) => self.rejected(e),
        }
    }

    pub fn remove_milestone(&mut self, age: u32) -> Result<bool> {
        if !self.milestones.contains(age) {
            tracing::debug!("Milestone {} not in set, nothing to remove", age);
            return Ok(false);
        }
        match self.milestones.remove(age, self.policy) {
            Ok(updated) => {
                self.milestones = updated;
                self.selection.forget(age);
                tracing::info!("➖ Removed milestone {}", age);
                Ok(true)
            }
            Err(e) => self.rejected(e),
        }
    }

    pub fn toggle_all(&mut self, selected: bool) {
        self.selection = self.milestones.toggle_all(selected);
    }

    /// Returns false when the age is not part of the set.
    pub fn set_selected(&mut self, age: u32, selected: bool) -> bool {
        self.selection.set(age, selected)
    }

    fn rejected(&self, error: MilestoneError) -> Result<bool> {
        if self.strict {
            return Err(error);
        }
        tracing::warn!("⚠️ {}", error);
        Ok(false)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RemovalPolicy::default(), false)
    }
}
