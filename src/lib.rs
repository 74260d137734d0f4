//! Classification of a location against known legal mining sites.
//!
//! A [`SiteRegistry`] holds the immutable site catalog. [`query::search`] finds
//! the sites of a mineral category within [`SEARCH_RADIUS_KM`] of a point, and
//! the policy turns that result plus an externally measured coverage
//! percentage into a [`ClassificationResult`].

pub mod classifier;
pub mod data;
pub mod error;
pub mod metrics;
pub mod params;
pub mod policy;
pub mod query;
pub mod registry;
pub mod storage;
pub mod types;

pub use classifier::{Classifier, Query};
pub use error::{CategoryParseError, MetricParseError, RegistryError};
pub use params::Params;
pub use query::SEARCH_RADIUS_KM;
pub use registry::SiteRegistry;
pub use types::{
    Category, ClassificationKind, ClassificationResult, GeoPoint, Metric, SearchResult, Site, SiteMatch,
};
