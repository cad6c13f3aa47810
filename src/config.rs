use std::path::Path;

use crate::error::{Error, Result};
use crate::types::AuthConfig;

pub const DEFAULT_CONFIG_PATH: &str = "../dev/curl.json";

/// Load the auth endpoint config
pub async fn load_auth_config(path: &Path) -> Result<AuthConfig> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

    let config: AuthConfig = serde_json::from_str(&text).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Loaded auth config from {}", path.display());
    Ok(config)
}
