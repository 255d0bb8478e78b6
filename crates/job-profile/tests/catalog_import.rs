use job_profile::workflows::catalog::{CandidateCatalog, CatalogImporter, CatalogKind};
use job_profile::workflows::profile::SearchFilter;

#[test]
fn importer_loads_fixture_pools() {
    let data = include_bytes!("../fixtures/candidate_catalog.csv");
    let catalog = CatalogImporter::from_reader(&data[..]).expect("fixture imports");

    assert_eq!(catalog.job_titles().len(), 7);
    assert!(catalog.skills().iter().any(|skill| skill == "Machine Learning"));
    assert_eq!(catalog.work_types(), ["Full-time", "Contract", "Remote"]);
    assert_eq!(
        catalog.popular_locations(),
        ["Casablanca", "Rabat", "Marrakech"],
        "duplicate rows collapse"
    );
}

#[test]
fn importer_reads_from_path() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/candidate_catalog.csv");
    let catalog = CatalogImporter::from_path(path).expect("fixture path imports");
    let hits = catalog.search(CatalogKind::JobTitle, &SearchFilter::new("ENG"));
    assert_eq!(
        hits,
        [
            "Backend Engineer",
            "Frontend Engineer",
            "DevOps Engineer",
            "QA Engineer",
            "Data Engineer",
            "Engineering Manager",
        ]
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let err = CatalogImporter::from_path("does/not/exist.csv").expect_err("missing file fails");
    assert!(err.to_string().starts_with("failed to read candidate catalog"));
}

#[test]
fn header_only_export_keeps_standard_pools() {
    let catalog = CatalogImporter::from_reader("kind,value\n".as_bytes()).expect("imports");
    assert_eq!(catalog, CandidateCatalog::standard());
}
