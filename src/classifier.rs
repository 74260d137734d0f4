use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::params::Params;
use crate::policy;
use crate::query;
use crate::registry::SiteRegistry;
use crate::types::{Category, ClassificationResult, GeoPoint, Metric, SearchResult};

/// One classification request.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Query {
    pub point: GeoPoint,
    pub category: Category,
    pub coverage_percent: f64,
}

/// Entry point tying the registry, the spatial search and the policy together.
///
/// Holds only a shared borrow of the registry, so one registry can serve any
/// number of classifiers and threads.
#[derive(Clone, Copy, Debug)]
pub struct Classifier<'r> {
    registry: &'r SiteRegistry,
    metric: Metric,
    params: Params,
}

impl<'r> Classifier<'r> {
    pub fn new(registry: &'r SiteRegistry) -> Self {
        Self::with_params(registry, Metric::default(), Params::default())
    }

    pub fn with_params(registry: &'r SiteRegistry, metric: Metric, params: Params) -> Self {
        Self {
            registry,
            metric,
            params,
        }
    }

    pub fn search(&self, point: GeoPoint, category: Category) -> SearchResult {
        query::search(self.registry, point, category, self.metric)
    }

    pub fn classify(
        &self,
        point: GeoPoint,
        category: Category,
        coverage_percent: f64,
    ) -> ClassificationResult {
        let search = self.search(point, category);
        let result = policy::classify_search(search, coverage_percent, category, &self.params);
        debug!(
            lat = point.lat,
            lon = point.lon,
            %category,
            coverage_percent,
            kind = %result.category,
            "classified"
        );
        result
    }

    /// Classifies every query in parallel; output order follows input order.
    pub fn classify_batch(&self, queries: &[Query]) -> Vec<ClassificationResult> {
        queries
            .par_iter()
            .map(|q| self.classify(q.point, q.category, q.coverage_percent))
            .collect()
    }
}
