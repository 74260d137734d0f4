use tracing::warn;

use crate::params::Params;
use crate::types::{Category, ClassificationKind, ClassificationResult, SearchResult};

pub const LEGAL_MINING_LABEL: &str = "Legal Mining Area";

/// Coverage limited to `[0, 100]`. NaN reads as no coverage.
pub fn clamp_coverage(coverage_percent: f64) -> f64 {
    if coverage_percent.is_nan() {
        warn!("coverage is NaN, treating as 0%");
        return 0.0;
    }
    let clamped = coverage_percent.clamp(0.0, 100.0);
    if clamped != coverage_percent {
        warn!(coverage_percent, clamped, "coverage outside [0, 100], clamped");
    }
    clamped
}

/// Kind and label for a search outcome.
///
/// Any match inside the radius wins outright; otherwise the coverage decides.
pub fn decide(
    has_matches: bool,
    coverage_percent: f64,
    category: Category,
    params: &Params,
) -> (ClassificationKind, String) {
    if has_matches {
        return (ClassificationKind::Mining, LEGAL_MINING_LABEL.to_string());
    }
    let coverage = clamp_coverage(coverage_percent);
    let mineral = category.display_name();
    if coverage > params.high_potential_above {
        (
            ClassificationKind::HighPotential,
            format!("Natural - High Potential {mineral} Deposits"),
        )
    } else if coverage > params.moderate_potential_above {
        (
            ClassificationKind::ModeratePotential,
            format!("Natural - Moderate Potential {mineral} Deposits"),
        )
    } else {
        (
            ClassificationKind::LowPotential,
            format!("Natural - Low {mineral} Signature"),
        )
    }
}

pub fn classify_search(
    search: SearchResult,
    coverage_percent: f64,
    category: Category,
    params: &Params,
) -> ClassificationResult {
    let (kind, label) = decide(!search.matches.is_empty(), coverage_percent, category, params);
    ClassificationResult {
        label,
        category: kind,
        matches: search.matches,
        nearest_site: search.nearest_site,
        nearest_distance_km: search.nearest_distance_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(coverage: f64) -> ClassificationKind {
        decide(false, coverage, Category::IronOre, &Params::default()).0
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(kind(10.0), ClassificationKind::ModeratePotential);
        assert_eq!(kind(10.0001), ClassificationKind::HighPotential);
        assert_eq!(kind(3.0), ClassificationKind::LowPotential);
        assert_eq!(kind(3.0001), ClassificationKind::ModeratePotential);
        assert_eq!(kind(0.0), ClassificationKind::LowPotential);
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(clamp_coverage(-4.0), 0.0);
        assert_eq!(clamp_coverage(100.3), 100.0);
        assert_eq!(clamp_coverage(f64::NAN), 0.0);
        assert_eq!(kind(250.0), ClassificationKind::HighPotential);
        assert_eq!(kind(-1.0), ClassificationKind::LowPotential);
    }

    #[test]
    fn matches_override_coverage() {
        for coverage in [0.0, 5.0, 50.0, 100.0] {
            let (k, label) = decide(true, coverage, Category::Copper, &Params::default());
            assert_eq!(k, ClassificationKind::Mining);
            assert_eq!(label, LEGAL_MINING_LABEL);
        }
    }

    #[test]
    fn labels_name_the_mineral() {
        let p = Params::default();
        assert_eq!(
            decide(false, 15.0, Category::IronOre, &p).1,
            "Natural - High Potential Iron Deposits"
        );
        assert_eq!(
            decide(false, 5.0, Category::BauxiteAluminum, &p).1,
            "Natural - Moderate Potential Aluminum Deposits"
        );
        assert_eq!(decide(false, 2.0, Category::Copper, &p).1, "Natural - Low Copper Signature");
    }

    #[test]
    fn custom_thresholds() {
        let p = Params {
            high_potential_above: 50.0,
            moderate_potential_above: 20.0,
        };
        assert_eq!(decide(false, 30.0, Category::IronOre, &p).0, ClassificationKind::ModeratePotential);
        assert_eq!(decide(false, 15.0, Category::IronOre, &p).0, ClassificationKind::LowPotential);
    }
}
