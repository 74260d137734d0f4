use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CategoryParseError, MetricParseError};

/// A WGS84 position in decimal degrees.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Mineral category of a site or a query.
///
/// Callers speak in short mnemonics ("iron", "aluminum", "copper"); those map
/// one to one onto the variants through [`FromStr`] and [`Category::code`].
#[repr(u8)]
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(rename = "iron")]
    IronOre = 1,
    #[serde(rename = "aluminum")]
    BauxiteAluminum = 2,
    Copper = 3,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::IronOre, Category::BauxiteAluminum, Category::Copper];

    pub fn code(self) -> &'static str {
        match self {
            Category::IronOre => "iron",
            Category::BauxiteAluminum => "aluminum",
            Category::Copper => "copper",
        }
    }

    /// Capitalised mineral name used inside classification labels.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::IronOre => "Iron",
            Category::BauxiteAluminum => "Aluminum",
            Category::Copper => "Copper",
        }
    }

    /// Catalog label of the deposit type.
    pub fn label(self) -> &'static str {
        match self {
            Category::IronOre => "Iron Ore",
            Category::BauxiteAluminum => "Bauxite/Aluminum",
            Category::Copper => "Copper",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| key.eq_ignore_ascii_case(c.code()) || key.eq_ignore_ascii_case(c.label()))
            .ok_or_else(|| CategoryParseError(key.to_string()))
    }
}

/// One known legal mining location.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Site {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub category: Category,
}

impl Site {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        country: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            country: country.into(),
            category,
        }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// A site inside the search radius, with its distance from the query point.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SiteMatch {
    pub site: Site,
    pub distance_km: f64,
}

/// Output only: an absent category leaves `nearest_distance_km` infinite,
/// which JSON renders as `null`.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct SearchResult {
    pub matches: Vec<SiteMatch>,
    pub nearest_site: Option<Site>,
    pub nearest_distance_km: f64,
}

impl SearchResult {
    pub fn empty() -> Self {
        Self {
            matches: Vec::new(),
            nearest_site: None,
            nearest_distance_km: f64::INFINITY,
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationKind {
    Mining,
    HighPotential,
    ModeratePotential,
    LowPotential,
}

impl ClassificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ClassificationKind::Mining => "mining",
            ClassificationKind::HighPotential => "high_potential",
            ClassificationKind::ModeratePotential => "moderate_potential",
            ClassificationKind::LowPotential => "low_potential",
        }
    }
}

impl fmt::Display for ClassificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct ClassificationResult {
    pub label: String,
    pub category: ClassificationKind,
    pub matches: Vec<SiteMatch>,
    pub nearest_site: Option<Site>,
    pub nearest_distance_km: f64,
}

/// Distance formula used for both ranking and the radius cutoff.
#[repr(u8)]
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Vincenty inverse on the WGS84 ellipsoid.
    #[default]
    Geodesic = 1,
    /// Haversine on a sphere of mean Earth radius.
    GreatCircle = 2,
}

impl FromStr for Metric {
    type Err = MetricParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "geodesic" => Ok(Metric::Geodesic),
            "great_circle" | "great-circle" | "haversine" => Ok(Metric::GreatCircle),
            other => Err(MetricParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_mnemonics_round_trip() {
        for c in Category::ALL {
            assert_eq!(c.code().parse::<Category>().unwrap(), c);
            assert_eq!(c.label().parse::<Category>().unwrap(), c);
        }
        assert_eq!(" Copper ".parse::<Category>().unwrap(), Category::Copper);
        assert!("gold".parse::<Category>().is_err());
    }

    #[test]
    fn metric_names() {
        assert_eq!("haversine".parse::<Metric>().unwrap(), Metric::GreatCircle);
        assert_eq!(" Geodesic".parse::<Metric>().unwrap(), Metric::Geodesic);
        let err = "manhattan".parse::<Metric>().unwrap_err();
        assert_eq!(err, MetricParseError("manhattan".into()));
        assert_eq!(err.to_string(), "unknown metric: manhattan");
    }

    #[test]
    fn absent_nearest_serializes_as_null() {
        let value = serde_json::to_value(SearchResult::empty()).unwrap();
        assert!(value["nearest_distance_km"].is_null());
        assert!(value["nearest_site"].is_null());
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&Category::BauxiteAluminum).unwrap(), "\"aluminum\"");
        assert_eq!(
            serde_json::to_string(&ClassificationKind::ModeratePotential).unwrap(),
            "\"moderate_potential\""
        );
        assert_eq!(serde_json::to_string(&Metric::GreatCircle).unwrap(), "\"great_circle\"");
    }

    #[test]
    fn point_validity() {
        assert!(GeoPoint::new(67.8556, 20.2253).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::NAN).is_valid());
    }
}
