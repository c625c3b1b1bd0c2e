use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Parse a config value from RON text.
///
/// Level data arrives as text from the embedding application; how it got
/// there (file, archive, network) is not this crate's concern.
pub fn from_ron_str<T: DeserializeOwned>(text: &str) -> Result<T, RegistryError> {
    Ok(ron::de::from_str::<T>(text)?)
}
