//! Cleaning of name fields decoded from fixed-width records.

/// Keeps only printable ASCII from a raw field, then trims surrounding
/// whitespace.
pub fn printable_strip(raw: &[u8]) -> String {
    let printable: String = raw
        .iter()
        .copied()
        .filter(|b| b.is_ascii_graphic() || b.is_ascii_whitespace())
        .map(char::from)
        .collect();
    printable.trim().to_string()
}

/// Cleans a logical name field for use in the hierarchy: printable ASCII
/// only, then `:` becomes `_`, then `/` becomes `:`.
///
/// The substitutions keep cleaned names usable as path components while
/// freeing `:` up for display composition. Order matters, a `:` produced by
/// the `/` step must survive.
pub fn clean_name(raw: &[u8]) -> String {
    printable_strip(raw).replace(':', "_").replace('/', ":")
}
