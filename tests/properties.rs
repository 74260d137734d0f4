use anyhow::Result;
use mineclass::{Category, Classifier, GeoPoint, Metric, Query, SiteRegistry, SEARCH_RADIUS_KM};

fn probes() -> Vec<GeoPoint> {
    let mut points = Vec::new();
    let mut lat = -80.0;
    while lat <= 80.0 {
        let mut lon = -175.0;
        while lon <= 175.0 {
            points.push(GeoPoint::new(lat, lon));
            lon += 35.0;
        }
        lat += 20.0;
    }
    // a few that land inside mining districts
    points.extend([
        GeoPoint::new(22.15, 85.35),
        GeoPoint::new(-22.35, -68.9),
        GeoPoint::new(-19.9, -43.7),
        GeoPoint::new(10.9, -14.0),
        GeoPoint::new(-32.7, 116.1),
    ]);
    points
}

#[test]
fn nearest_is_minimal() -> Result<()> {
    let registry = SiteRegistry::builtin()?;
    for metric in [Metric::Geodesic, Metric::GreatCircle] {
        let classifier = Classifier::with_params(&registry, metric, Default::default());
        for p in probes() {
            for category in Category::ALL {
                let result = classifier.search(p, category);
                for site in registry.sites_of_category(category) {
                    let d = metric.distance_km(p, site.point());
                    assert!(result.nearest_distance_km <= d, "{p:?} {category}: {}", site.name);
                }
            }
        }
    }
    Ok(())
}

#[test]
fn matches_are_within_radius_and_sorted() -> Result<()> {
    let registry = SiteRegistry::builtin()?;
    let classifier = Classifier::new(&registry);
    let mut saw_multiple = false;
    for p in probes() {
        for category in Category::ALL {
            let result = classifier.search(p, category);
            assert!(result.matches.iter().all(|m| m.distance_km <= SEARCH_RADIUS_KM));
            assert!(result.matches.iter().all(|m| m.site.category == category));
            assert!(result
                .matches
                .windows(2)
                .all(|w| w[0].distance_km <= w[1].distance_km));
            if let Some(first) = result.matches.first() {
                assert_eq!(result.nearest_site.as_ref(), Some(&first.site));
                assert_eq!(result.nearest_distance_km, first.distance_km);
            }
            saw_multiple |= result.matches.len() > 1;
        }
    }
    assert!(saw_multiple);
    Ok(())
}

#[test]
fn every_site_within_radius_is_matched() -> Result<()> {
    let registry = SiteRegistry::builtin()?;
    let classifier = Classifier::new(&registry);
    for p in probes() {
        for category in Category::ALL {
            let result = classifier.search(p, category);
            let expected = registry
                .sites_of_category(category)
                .filter(|s| Metric::Geodesic.distance_km(p, s.point()) <= SEARCH_RADIUS_KM)
                .count();
            assert_eq!(result.matches.len(), expected);
        }
    }
    Ok(())
}

#[test]
fn batch_matches_sequential() -> Result<()> {
    let registry = SiteRegistry::builtin()?;
    let classifier = Classifier::new(&registry);
    let queries: Vec<Query> = probes()
        .into_iter()
        .zip(Category::ALL.into_iter().cycle())
        .enumerate()
        .map(|(i, (point, category))| Query {
            point,
            category,
            coverage_percent: (i % 15) as f64,
        })
        .collect();
    let batch = classifier.classify_batch(&queries);
    assert_eq!(batch.len(), queries.len());
    for (q, r) in queries.iter().zip(&batch) {
        assert_eq!(&classifier.classify(q.point, q.category, q.coverage_percent), r);
    }
    Ok(())
}
