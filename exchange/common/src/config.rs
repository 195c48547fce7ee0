use std::{fmt::Debug, path::Path};

use eyre::{eyre, Context, ContextCompat, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Load a JSON config file and flatten the `service_name` section into the root.
pub fn load_config<Config: DeserializeOwned + Debug>(
    config_path: impl AsRef<Path>,
    service_name: impl AsRef<str>,
) -> Result<Config> {
    let config_path = config_path.as_ref();
    debug!("Loading config from {}", config_path.display());
    let config = std::fs::read_to_string(config_path)
        .with_context(|| format!("failed to read config {}", config_path.display()))?;
    let config: Value = serde_json::from_str(&config)
        .with_context(|| format!("failed to parse config {}", config_path.display()))?;
    parse_config(config, service_name)
}

/// Keys of the service section override the root ones; `name` is set to the service name.
pub fn parse_config<Config: DeserializeOwned + Debug>(
    mut config: Value,
    service_name: impl AsRef<str>,
) -> Result<Config> {
    let service_name = service_name.as_ref();
    let root = config
        .as_object_mut()
        .with_context(|| "config root must be an object")?;
    let service_config = root.remove(service_name).unwrap_or(Value::Object(Default::default()));
    let service_config = service_config
        .as_object()
        .ok_or_else(|| eyre!("Service {} config must be an object", service_name))?;
    for (k, v) in service_config {
        root.insert(k.clone(), v.clone());
    }
    root.insert("name".to_string(), Value::String(service_name.to_string()));
    let config: Config = serde_json::from_value(config)?;
    debug!("App config {:?}", config);
    Ok(config)
}
