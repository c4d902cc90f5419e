use crate::utils::error::{MilestoneError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_MILESTONES: [u32; 12] = [1, 16, 18, 21, 30, 40, 50, 60, 70, 80, 90, 100];

pub const MIN_MILESTONE_AGE: u32 = 1;
pub const MAX_MILESTONE_AGE: u32 = 150;

/// Whether the default ages may be taken out of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemovalPolicy {
    pub allow_remove_defaults: bool,
}

pub fn is_default_milestone(age: u32) -> bool {
    DEFAULT_MILESTONES.contains(&age)
}

/// Checks a raw age as typed by a user and narrows it to `u32`.
pub fn check_age(age: i64) -> Result<u32> {
    if age < MIN_MILESTONE_AGE as i64 || age > MAX_MILESTONE_AGE as i64 {
        return Err(MilestoneError::MilestoneOutOfRange { age });
    }
    Ok(age as u32)
}

/// Ascending, de-duplicated ages. Operations return a new set and leave
/// `self` untouched, so a rejected change never leaves a half-applied state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneSet {
    ages: Vec<u32>,
}

impl MilestoneSet {
    pub fn defaults() -> Self {
        Self {
            ages: DEFAULT_MILESTONES.to_vec(),
        }
    }

    pub fn ages(&self) -> &[u32] {
        &self.ages
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    pub fn contains(&self, age: u32) -> bool {
        self.ages.binary_search(&age).is_ok()
    }

    pub fn add(&self, age: i64) -> Result<Self> {
        let age = check_age(age)?;
        match self.ages.binary_search(&age) {
            Ok(_) => Err(MilestoneError::DuplicateMilestone { age }),
            Err(pos) => {
                let mut ages = self.ages.clone();
                ages.insert(pos, age);
                Ok(Self { ages })
            }
        }
    }

    /// Removing an absent age is a no-op and returns an equal set.
    pub fn remove(&self, age: u32, policy: RemovalPolicy) -> Result<Self> {
        let Ok(pos) = self.ages.binary_search(&age) else {
            return Ok(self.clone());
        };

        if is_default_milestone(age) && !policy.allow_remove_defaults {
            return Err(MilestoneError::DefaultMilestoneNotRemovable { age });
        }

        let mut ages = self.ages.clone();
        ages.remove(pos);
        Ok(Self { ages })
    }

    /// Marks every age in the set as included or excluded. The set itself
    /// does not change.
    pub fn toggle_all(&self, selected: bool) -> SelectionMask {
        SelectionMask {
            flags: self.ages.iter().map(|&age| (age, selected)).collect(),
        }
    }
}

impl Default for MilestoneSet {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Which ages of a [`MilestoneSet`] take part in the next evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionMask {
    flags: BTreeMap<u32, bool>,
}

impl SelectionMask {
    pub fn is_selected(&self, age: u32) -> bool {
        self.flags.get(&age).copied().unwrap_or(false)
    }

    /// Returns false when the age is not part of the mask.
    pub fn set(&mut self, age: u32, selected: bool) -> bool {
        match self.flags.get_mut(&age) {
            Some(flag) => {
                *flag = selected;
                true
            }
            None => false,
        }
    }

    pub fn insert(&mut self, age: u32, selected: bool) {
        self.flags.insert(age, selected);
    }

    pub fn forget(&mut self, age: u32) {
        self.flags.remove(&age);
    }

    /// Selected ages in ascending order.
    pub fn selected_ages(&self) -> Vec<u32> {
        self.flags
            .iter()
            .filter(|(_, &selected)| selected)
            .map(|(&age, _)| age)
            .collect()
    }
}
