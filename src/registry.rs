use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::info;

use crate::data::LEGAL_MINING_SITES;
use crate::error::RegistryError;
use crate::types::{Category, Site};

/// Immutable catalog of legal mining sites.
///
/// Built once, validated on construction, then only read. Sites keep their
/// definition order.
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    sites: Vec<Site>,
}

impl SiteRegistry {
    pub fn new(sites: Vec<Site>) -> Result<Self, RegistryError> {
        let mut names = HashSet::with_capacity(sites.len());
        for site in &sites {
            if !site.point().is_valid() {
                return Err(RegistryError::InvalidCoordinates {
                    name: site.name.clone(),
                    latitude: site.latitude,
                    longitude: site.longitude,
                });
            }
            if !names.insert(site.name.as_str()) {
                return Err(RegistryError::DuplicateSite { name: site.name.clone() });
            }
        }
        info!(sites = sites.len(), "site registry loaded");
        Ok(Self { sites })
    }

    /// Registry over the embedded legal mining table.
    pub fn builtin() -> Result<Self, RegistryError> {
        let sites = LEGAL_MINING_SITES
            .iter()
            .map(|&(name, lat, lon, country, category)| Site::new(name, lat, lon, country, category))
            .collect();
        Self::new(sites)
    }

    pub fn all_sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn sites_of_category(&self, category: Category) -> impl Iterator<Item = &Site> + '_ {
        self.sites.iter().filter(move |s| s.category == category)
    }

    pub fn sites_in_country<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a Site> + 'a {
        self.sites.iter().filter(move |s| s.country == country)
    }

    /// Sites matching both optional filters; `None` means no constraint.
    pub fn filter(&self, category: Option<Category>, country: Option<&str>) -> Vec<&Site> {
        self.sites
            .iter()
            .filter(|s| category.map_or(true, |c| s.category == c))
            .filter(|s| country.map_or(true, |c| s.country == c))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Site> {
        self.sites.iter().find(|s| s.name == name)
    }

    pub fn countries(&self) -> Vec<&str> {
        self.sites
            .iter()
            .map(|s| s.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn count_by_category(&self) -> BTreeMap<Category, usize> {
        let mut counts: BTreeMap<Category, usize> = Category::ALL.iter().map(|&c| (c, 0)).collect();
        for site in &self.sites {
            *counts.entry(site.category).or_default() += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
