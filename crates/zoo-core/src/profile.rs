//! Accessibility profiles and the ordered set of active profiles.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A named accessibility need selected by the visitor.
///
/// The set is closed. Serialized and displayed by variant name
/// (`"Mobility"`, `"Visual"`, ...); parsing is case-insensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum AccessibilityProfile {
    None,
    Mobility,
    Visual,
    Auditory,
    Sensory,
    Cognitive,
}

impl AccessibilityProfile {
    /// Every profile in declaration order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Profiles offered in the custom multi-select (everything but `None`).
    pub fn selectable() -> Vec<Self> {
        Self::iter().filter(|p| *p != Self::None).collect()
    }

    /// Display label, identical to the serialized name.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// One-line summary shown in the profile picker.
    pub fn description(self) -> &'static str {
        match self {
            Self::None => "Standard zoo experience.",
            Self::Mobility => "Step-free routes, elevators, and rest spots.",
            Self::Visual => "Audio descriptions, high-contrast, and tactile help.",
            Self::Auditory => "Visual alerts, sign language videos, and transcripts.",
            Self::Sensory => "Quiet zones, crowd warnings, and sensory bags.",
            Self::Cognitive => "Simple signs, clear pictures, and helper buttons.",
        }
    }
}

/// Ordered set of active profiles.
///
/// Insertion order is display order and duplicates are dropped, including
/// when a persisted list is deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<AccessibilityProfile>", into = "Vec<AccessibilityProfile>")]
pub struct ProfileSet {
    profiles: Vec<AccessibilityProfile>,
}

impl ProfileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from any sequence, keeping the first occurrence of each profile.
    pub fn from_profiles<I>(profiles: I) -> Self
    where
        I: IntoIterator<Item = AccessibilityProfile>,
    {
        let mut set = Self::new();
        for profile in profiles {
            set.insert(profile);
        }
        set
    }

    /// Appends `profile` unless already present. Returns whether it was added.
    pub fn insert(&mut self, profile: AccessibilityProfile) -> bool {
        if self.contains(profile) {
            return false;
        }
        self.profiles.push(profile);
        true
    }

    /// Removes `profile`, preserving the order of the rest.
    pub fn remove(&mut self, profile: AccessibilityProfile) -> bool {
        let before = self.profiles.len();
        self.profiles.retain(|p| *p != profile);
        self.profiles.len() != before
    }

    /// Adds the profile if absent, removes it if present.
    pub fn toggle(&mut self, profile: AccessibilityProfile) {
        if !self.remove(profile) {
            self.profiles.push(profile);
        }
    }

    pub fn contains(&self, profile: AccessibilityProfile) -> bool {
        self.profiles.contains(&profile)
    }

    pub fn clear(&mut self) {
        self.profiles.clear();
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = AccessibilityProfile> + '_ {
        self.profiles.iter().copied()
    }

    pub fn as_slice(&self) -> &[AccessibilityProfile] {
        &self.profiles
    }

    fn joined(&self, separator: &str) -> String {
        self.profiles
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Comma-joined summary used in the assistant prompt and welcome message.
    pub fn summary(&self) -> String {
        self.joined(", ")
    }

    /// Label for the guide header ("Mobility + Sensory").
    pub fn header_label(&self) -> String {
        self.joined(" + ")
    }

    /// Label for the assistant header.
    pub fn assistant_label(&self) -> String {
        if self.profiles.len() > 2 {
            "Multiple Profiles".to_string()
        } else {
            self.joined(" & ")
        }
    }
}

impl From<Vec<AccessibilityProfile>> for ProfileSet {
    fn from(profiles: Vec<AccessibilityProfile>) -> Self {
        Self::from_profiles(profiles)
    }
}

impl From<ProfileSet> for Vec<AccessibilityProfile> {
    fn from(set: ProfileSet) -> Self {
        set.profiles
    }
}

impl FromIterator<AccessibilityProfile> for ProfileSet {
    fn from_iter<T: IntoIterator<Item = AccessibilityProfile>>(iter: T) -> Self {
        Self::from_profiles(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            AccessibilityProfile::from_str("mobility").unwrap(),
            AccessibilityProfile::Mobility
        );
        assert_eq!(
            AccessibilityProfile::from_str("SENSORY").unwrap(),
            AccessibilityProfile::Sensory
        );
        assert!(AccessibilityProfile::from_str("hearing").is_err());
    }

    #[test]
    fn test_selectable_excludes_none() {
        let selectable = AccessibilityProfile::selectable();
        assert_eq!(selectable.len(), 5);
        assert!(!selectable.contains(&AccessibilityProfile::None));
        assert_eq!(AccessibilityProfile::all().len(), 6);
    }

    #[test]
    fn test_insert_rejects_duplicates_and_keeps_order() {
        let mut set = ProfileSet::new();
        assert!(set.insert(AccessibilityProfile::Sensory));
        assert!(set.insert(AccessibilityProfile::Mobility));
        assert!(!set.insert(AccessibilityProfile::Sensory));
        assert_eq!(
            set.as_slice(),
            &[AccessibilityProfile::Sensory, AccessibilityProfile::Mobility]
        );
    }

    #[test]
    fn test_toggle() {
        let mut set = ProfileSet::new();
        set.toggle(AccessibilityProfile::Visual);
        set.toggle(AccessibilityProfile::Auditory);
        set.toggle(AccessibilityProfile::Visual);
        assert_eq!(set.as_slice(), &[AccessibilityProfile::Auditory]);
    }

    #[test]
    fn test_deserialize_drops_duplicates() {
        let set: ProfileSet =
            serde_json::from_str(r#"["Visual","Cognitive","Visual"]"#).unwrap();
        assert_eq!(
            set.as_slice(),
            &[AccessibilityProfile::Visual, AccessibilityProfile::Cognitive]
        );
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"["Visual","Cognitive"]"#
        );
    }

    #[test]
    fn test_labels() {
        let two = ProfileSet::from_profiles([
            AccessibilityProfile::Mobility,
            AccessibilityProfile::Sensory,
        ]);
        assert_eq!(two.summary(), "Mobility, Sensory");
        assert_eq!(two.header_label(), "Mobility + Sensory");
        assert_eq!(two.assistant_label(), "Mobility & Sensory");

        let three = ProfileSet::from_profiles([
            AccessibilityProfile::Mobility,
            AccessibilityProfile::Sensory,
            AccessibilityProfile::Visual,
        ]);
        assert_eq!(three.assistant_label(), "Multiple Profiles");
    }
}
