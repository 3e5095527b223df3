//! Category filtering over the catalog.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::poi::catalog::Catalog;
use crate::poi::model::{Poi, PoiCategory};

/// Filter buckets offered by the guide.
///
/// `Amenity` is a superset bucket: it also admits dining spots and exits.
/// This widening applies to filtering only, never to category labels.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PoiFilter {
    #[default]
    All,
    Animal,
    Amenity,
}

impl PoiFilter {
    pub fn matches(self, category: PoiCategory) -> bool {
        match self {
            Self::All => true,
            Self::Animal => category == PoiCategory::Animal,
            Self::Amenity => matches!(
                category,
                PoiCategory::Amenity | PoiCategory::Dining | PoiCategory::Exit
            ),
        }
    }

    /// Button caption in the guide's filter bar.
    pub fn caption(self) -> &'static str {
        match self {
            Self::All => "All Areas",
            Self::Animal => "Animals 🐾",
            Self::Amenity => "Amenities 🚻",
        }
    }
}

/// POIs admitted by `filter`, in catalog order.
pub fn filter(catalog: &Catalog, filter: PoiFilter) -> Vec<&Poi> {
    catalog
        .pois()
        .iter()
        .filter(|poi| filter.matches(poi.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn ids(pois: &[&Poi]) -> Vec<String> {
        pois.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let catalog = Catalog::builtin().unwrap();
        let all = filter(&catalog, PoiFilter::All);
        let expected: Vec<String> = catalog.pois().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids(&all), expected);
    }

    #[test]
    fn test_animal_bucket() {
        let catalog = Catalog::builtin().unwrap();
        let animals = filter(&catalog, PoiFilter::Animal);
        assert_eq!(
            ids(&animals),
            vec![
                "elephants",
                "primates",
                "giraffes",
                "lions",
                "reptile",
                "petting_zoo"
            ]
        );
        assert!(animals.iter().all(|p| p.category == PoiCategory::Animal));
    }

    #[test]
    fn test_amenity_bucket_includes_dining_and_exit() {
        let catalog = Catalog::builtin().unwrap();
        let amenities = filter(&catalog, PoiFilter::Amenity);
        assert_eq!(ids(&amenities), vec!["entrance", "quiet_zone_1", "food_court"]);
    }

    #[test]
    fn test_buckets_partition_catalog() {
        let catalog = Catalog::builtin().unwrap();
        let animals = filter(&catalog, PoiFilter::Animal).len();
        let amenities = filter(&catalog, PoiFilter::Amenity).len();
        assert_eq!(animals + amenities, catalog.len());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(PoiFilter::from_str("Amenity").unwrap(), PoiFilter::Amenity);
        assert_eq!(PoiFilter::All.to_string(), "all");
        assert!(PoiFilter::from_str("dining").is_err());
    }
}
