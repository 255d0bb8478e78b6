use super::normalizer::normalize_value;
use super::CatalogKind;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug)]
pub(crate) struct CatalogRecord {
    pub(crate) kind: CatalogKind,
    pub(crate) value: String,
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    kind: CatalogKind,
    #[serde(default)]
    value: String,
}

/// Read `kind,value` rows, dropping rows whose value normalizes to nothing.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<CatalogRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<CatalogRow>() {
        let row = record?;
        let value = normalize_value(&row.value);
        if value.is_empty() {
            continue;
        }
        records.push(CatalogRecord {
            kind: row.kind,
            value,
        });
    }

    Ok(records)
}
