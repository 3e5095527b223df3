//! Profile-aware guidance text for a POI.

use crate::poi::model::Poi;
use crate::profile::{AccessibilityProfile, ProfileSet};

/// Text used when a POI has neither a matching note nor a `None` note.
pub const DEFAULT_GUIDANCE: &str = "Standard accessibility applies.";

/// Merges the POI's notes for every active profile into one block.
///
/// Fragments are labeled `"<Profile>: <note>"`, follow the order of
/// `profiles`, and are separated by blank lines. Always returns non-empty text.
pub fn resolve_notes(poi: &Poi, profiles: &ProfileSet) -> String {
    let fragments: Vec<String> = profiles
        .iter()
        .filter_map(|profile| {
            poi.note(profile)
                .map(|note| format!("{}: {}", profile.label(), note))
        })
        .collect();

    if !fragments.is_empty() {
        return fragments.join("\n\n");
    }

    poi.note(AccessibilityProfile::None)
        .unwrap_or(DEFAULT_GUIDANCE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poi::model::{MapPoint, PoiCategory};
    use crate::poi::Catalog;
    use std::collections::BTreeMap;

    fn poi_with_notes(notes: &[(AccessibilityProfile, &str)]) -> Poi {
        Poi {
            id: "test".to_string(),
            name: "Test".to_string(),
            emoji: "🦓".to_string(),
            category: PoiCategory::Animal,
            position: MapPoint::new(10.0, 10.0),
            description: "A test habitat.".to_string(),
            notes: notes
                .iter()
                .map(|(p, n)| (*p, n.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    /// Every subset of the profile enumeration, members in declaration order.
    fn profile_subsets() -> Vec<ProfileSet> {
        let profiles = AccessibilityProfile::all();
        (0u32..(1 << profiles.len()))
            .map(|mask| {
                profiles
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, p)| *p)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_fragments_follow_active_order() {
        let poi = poi_with_notes(&[
            (AccessibilityProfile::Mobility, "Ramps."),
            (AccessibilityProfile::Sensory, "Quiet."),
        ]);
        let profiles = ProfileSet::from_profiles([
            AccessibilityProfile::Sensory,
            AccessibilityProfile::Mobility,
        ]);
        assert_eq!(
            resolve_notes(&poi, &profiles),
            "Sensory: Quiet.\n\nMobility: Ramps."
        );
    }

    #[test]
    fn test_profiles_without_notes_are_skipped() {
        let poi = poi_with_notes(&[(AccessibilityProfile::Visual, "Braille.")]);
        let profiles = ProfileSet::from_profiles([
            AccessibilityProfile::Auditory,
            AccessibilityProfile::Visual,
        ]);
        assert_eq!(resolve_notes(&poi, &profiles), "Visual: Braille.");
    }

    #[test]
    fn test_falls_back_to_none_note() {
        let poi = poi_with_notes(&[(AccessibilityProfile::None, "Level paths.")]);
        let profiles = ProfileSet::from_profiles([AccessibilityProfile::Cognitive]);
        assert_eq!(resolve_notes(&poi, &profiles), "Level paths.");
        assert_eq!(resolve_notes(&poi, &ProfileSet::new()), "Level paths.");
    }

    #[test]
    fn test_falls_back_to_default_text() {
        let poi = poi_with_notes(&[]);
        let profiles = ProfileSet::from_profiles([AccessibilityProfile::Mobility]);
        assert_eq!(resolve_notes(&poi, &profiles), DEFAULT_GUIDANCE);
        assert_eq!(resolve_notes(&poi, &ProfileSet::new()), DEFAULT_GUIDANCE);
    }

    #[test]
    fn test_none_profile_selected_uses_its_note_label() {
        let poi = poi_with_notes(&[(AccessibilityProfile::None, "Level paths.")]);
        let profiles = ProfileSet::from_profiles([AccessibilityProfile::None]);
        assert_eq!(resolve_notes(&poi, &profiles), "None: Level paths.");
    }

    #[test]
    fn test_every_builtin_poi_resolves_for_every_subset() {
        let catalog = Catalog::builtin().unwrap();
        for poi in catalog.pois() {
            for profiles in profile_subsets() {
                let text = resolve_notes(poi, &profiles);
                assert!(!text.trim().is_empty(), "{} / {:?}", poi.id, profiles);
                if profiles.is_empty() {
                    let expected = poi
                        .note(AccessibilityProfile::None)
                        .unwrap_or(DEFAULT_GUIDANCE);
                    assert_eq!(text, expected);
                }
            }
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let catalog = Catalog::builtin().unwrap();
        let poi = catalog.get("giraffes").unwrap();
        let profiles = ProfileSet::from_profiles([
            AccessibilityProfile::Visual,
            AccessibilityProfile::Sensory,
        ]);
        assert_eq!(resolve_notes(poi, &profiles), resolve_notes(poi, &profiles));
        assert!(resolve_notes(poi, &profiles).starts_with("Visual: A tactile replica"));
    }
}
