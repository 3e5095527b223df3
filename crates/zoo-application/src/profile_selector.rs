//! The profile picker shown after login.
//!
//! Two modes: quick select, where picking one profile confirms it at once,
//! and custom, where any of the non-`None` profiles are toggled into a
//! pending set that is confirmed explicitly.

use zoo_core::{AccessibilityProfile, ProfileSet};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorMode {
    #[default]
    Quick,
    Custom,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileSelector {
    mode: SelectorMode,
    pending: ProfileSet,
}

impl ProfileSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SelectorMode {
        self.mode
    }

    /// The custom selection so far, in toggle order.
    pub fn pending(&self) -> &ProfileSet {
        &self.pending
    }

    /// Options listed in quick-select mode.
    pub fn quick_options() -> Vec<AccessibilityProfile> {
        AccessibilityProfile::selectable()
    }

    /// Options listed in custom mode.
    pub fn custom_options() -> Vec<AccessibilityProfile> {
        AccessibilityProfile::selectable()
    }

    pub fn begin_custom(&mut self) {
        self.mode = SelectorMode::Custom;
        self.pending.clear();
    }

    /// Adds `profile` to the pending set, or removes it if already there.
    pub fn toggle(&mut self, profile: AccessibilityProfile) -> Result<()> {
        if self.mode != SelectorMode::Custom {
            return Err(AppError::NotCustomizing);
        }
        if profile == AccessibilityProfile::None {
            return Err(AppError::NotSelectable(profile));
        }
        self.pending.toggle(profile);
        Ok(())
    }

    /// Leaves custom mode and discards the pending set.
    pub fn cancel(&mut self) {
        self.mode = SelectorMode::Quick;
        self.pending.clear();
    }

    pub fn can_confirm(&self) -> bool {
        self.mode == SelectorMode::Custom && !self.pending.is_empty()
    }

    /// Hands out the pending set and resets the selector.
    ///
    /// An empty set is rejected and the selector is left as it was.
    pub fn confirm(&mut self) -> Result<ProfileSet> {
        if self.mode != SelectorMode::Custom {
            return Err(AppError::NotCustomizing);
        }
        if self.pending.is_empty() {
            return Err(AppError::EmptySelection);
        }
        self.mode = SelectorMode::Quick;
        Ok(std::mem::take(&mut self.pending))
    }
}
