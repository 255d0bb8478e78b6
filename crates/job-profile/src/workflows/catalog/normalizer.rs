/// Strip invisible characters and collapse runs of whitespace. Case is kept
/// because catalog values are displayed as-is.
pub(crate) fn normalize_value(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
