use job_profile::config::AppConfig;
use job_profile::error::AppError;
use job_profile::workflows::catalog::{CandidateCatalog, CatalogImporter, CatalogKind};
use std::path::PathBuf;
use tracing::info;

/// Resolve the candidate catalog: CLI flag, then `PROFILE_CATALOG_CSV`, then
/// the built-in tables.
pub(crate) fn load_catalog(
    override_path: Option<PathBuf>,
    config: &AppConfig,
) -> Result<CandidateCatalog, AppError> {
    match override_path.or_else(|| config.catalog.csv_path.clone()) {
        Some(path) => {
            info!(path = %path.display(), "loading candidate catalog");
            Ok(CatalogImporter::from_path(path)?)
        }
        None => Ok(CandidateCatalog::standard()),
    }
}

pub(crate) fn parse_catalog_kind(raw: &str) -> Result<CatalogKind, String> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "job_title" | "job_titles" | "title" | "titles" => Ok(CatalogKind::JobTitle),
        "skill" | "skills" => Ok(CatalogKind::Skill),
        "work_type" | "work_types" => Ok(CatalogKind::WorkType),
        "location" | "locations" => Ok(CatalogKind::Location),
        _ => Err(format!(
            "unknown catalog kind '{raw}' (expected job_title, skill, work_type, or location)"
        )),
    }
}
