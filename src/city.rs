use crate::error::{EmbassyError, Result};

const SEPARATOR: &str = " in ";

/// Extracts the city from a heading such as `"Embassy in Berlin"`.
///
/// The separator must occur exactly once.
pub fn derive_city(text: &str) -> Result<String> {
    let parts: Vec<&str> = text.split(SEPARATOR).collect();

    match parts.as_slice() {
        [_, city] => Ok(city.trim().to_owned()),
        _ => Err(EmbassyError::InvalidFormat(text.to_owned())),
    }
}
