use space::Neighbor;
use tracing::debug;

use crate::registry::SiteRegistry;
use crate::types::{Category, GeoPoint, Metric, SearchResult, SiteMatch};

/// Radius around the query point inside which a registered site counts as a match.
pub const SEARCH_RADIUS_KM: f64 = 10.0;

/// Finds the sites of `category` within [`SEARCH_RADIUS_KM`] of `point`, and
/// the nearest site of that category at any distance.
///
/// Matches are sorted by ascending distance, ties broken by site name. The
/// nearest site uses the same ordering, so when there are matches it is the
/// first of them.
pub fn search(
    registry: &SiteRegistry,
    point: GeoPoint,
    category: Category,
    metric: Metric,
) -> SearchResult {
    if !point.lat.is_finite() || !point.lon.is_finite() {
        debug!(?point, %category, "non-finite query point, nothing to search");
        return SearchResult::empty();
    }

    let sites = registry.all_sites();
    let scanned: Vec<Neighbor<u64>> = sites
        .iter()
        .enumerate()
        .filter(|(_, s)| s.category == category)
        .map(|(index, s)| Neighbor {
            index,
            distance: metric.distance_unit(&point, &s.point()),
        })
        .collect();

    // Units are bit patterns of non-negative distances, so they order like kilometres.
    let radius = SEARCH_RADIUS_KM.to_bits();
    let key = |n: &Neighbor<u64>| (n.distance, sites[n.index].name.as_str());

    let mut within: Vec<&Neighbor<u64>> = scanned.iter().filter(|n| n.distance <= radius).collect();
    within.sort_by(|a, b| key(*a).cmp(&key(*b)));

    let matches: Vec<SiteMatch> = within
        .into_iter()
        .map(|n| SiteMatch {
            site: sites[n.index].clone(),
            distance_km: f64::from_bits(n.distance),
        })
        .collect();

    let result = match scanned.iter().min_by(|a, b| key(*a).cmp(&key(*b))) {
        Some(nearest) => SearchResult {
            matches,
            nearest_site: Some(sites[nearest.index].clone()),
            nearest_distance_km: f64::from_bits(nearest.distance),
        },
        None => SearchResult::empty(),
    };

    debug!(
        lat = point.lat,
        lon = point.lon,
        %category,
        candidates = scanned.len(),
        matches = result.matches.len(),
        nearest_km = result.nearest_distance_km,
        "spatial search"
    );
    result
}
