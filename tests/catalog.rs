use anyhow::Result;
use mineclass::{storage, Category, ClassificationKind, Classifier, GeoPoint, Site, SiteRegistry};
use std::fs;

#[test]
fn builtin_catalog_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("sites.mcs");
    let registry = SiteRegistry::builtin()?;
    storage::write_catalog(&path, registry.all_sites())?;

    let loaded = storage::load_registry(&path)?;
    assert_eq!(loaded.all_sites(), registry.all_sites());
    let result = Classifier::new(&loaded).classify(GeoPoint::new(40.52, -112.15), Category::Copper, 1.0);
    assert_eq!(result.category, ClassificationKind::Mining);
    Ok(())
}

#[test]
fn duplicate_in_catalog_fails_load() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("dup.mcs");
    let sites = vec![
        Site::new("Pit", 1.0, 1.0, "X", Category::Copper),
        Site::new("Pit", 2.0, 2.0, "Y", Category::IronOre),
    ];
    storage::write_catalog(&path, &sites)?;
    assert_eq!(storage::read_catalog(&path)?.len(), 2);
    let err = storage::load_registry(&path).unwrap_err();
    assert!(err.to_string().contains("duplicate site name: Pit"));
    Ok(())
}

#[test]
fn rejects_foreign_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("junk.mcs");
    fs::write(&path, b"not a catalog at all")?;
    let err = storage::read_catalog(&path).unwrap_err();
    assert!(err.to_string().contains("magic"));
    Ok(())
}

#[test]
fn truncated_catalog() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("short.mcs");
    let sites = vec![
        Site::new("One", 1.0, 1.0, "X", Category::Copper),
        Site::new("Two", 2.0, 2.0, "X", Category::Copper),
    ];
    storage::write_catalog(&path, &sites)?;
    let bytes = fs::read(&path)?;
    fs::write(&path, &bytes[..bytes.len() - 10])?;
    let err = storage::read_catalog(&path).unwrap_err();
    assert!(err.to_string().contains("truncated"));
    Ok(())
}

#[test]
fn missing_file() {
    assert!(storage::read_catalog("/nonexistent/sites.mcs").is_err());
}

#[test]
fn huge_header_count_is_an_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("huge.mcs");
    let mut bytes = storage::MAGIC.to_vec();
    bytes.push(storage::VERSION);
    bytes.extend_from_slice(&u32::MAX.to_le_bytes());
    fs::write(&path, &bytes)?;
    let err = storage::read_catalog(&path).unwrap_err();
    assert!(err.to_string().contains("truncated catalog"));
    Ok(())
}
