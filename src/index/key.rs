//! Derivation of the keys of the index-level response.

/// Key of the overall station level.
pub const STATION_INDEX_KEY: &str = "stIndexLevel";

/// Field holding the category label inside every level object.
pub const INDEX_LEVEL_NAME: &str = "indexLevelName";

/// Key under which the index response carries the level of `pollutant_code`.
///
/// Dots are removed and the code is lower-cased before it is appended to the
/// `IndexLevel` suffix.
///
/// # Examples
///
/// ```
/// use gios::index_level_key;
///
/// assert_eq!(index_level_key("PM2.5"), "pm25IndexLevel");
/// assert_eq!(index_level_key("C6H6"), "c6h6IndexLevel");
/// ```
pub fn index_level_key(pollutant_code: &str) -> String {
    let stem: String = pollutant_code
        .chars()
        .filter(|c| *c != '.')
        .flat_map(char::to_lowercase)
        .collect();
    format!("{}IndexLevel", stem)
}
