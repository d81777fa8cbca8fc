//! Walker settings files
//!
//! Settings are a JSON object with any of `separator`,
//! `null_value_replacement` and `origin`; missing keys keep their defaults.
//!
//! ```json
//! { "separator": " | ", "null_value_replacement": "?" }
//! ```

use std::{io::BufReader, path::Path};

use crate::input::{open, InputError};
use crate::WalkerConfig;

/// Parse walker settings from a JSON string
pub fn parse_config(json: &str) -> Result<WalkerConfig, InputError> {
    let config = serde_json::from_str(json)?;
    Ok(config)
}

/// Load walker settings from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<WalkerConfig, InputError> {
    let path = path.as_ref();
    let config: WalkerConfig = serde_json::from_reader(BufReader::new(open(path)?))?;
    tracing::debug!(path = %path.display(), ?config, "loaded walker settings");
    Ok(config)
}
