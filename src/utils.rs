use crate::error::Result;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Serialize `value` as pretty-printed JSON and write it to `path`.
pub(crate) fn write_json<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize,
{
    let json = serde_json::to_string_pretty(value).context("failed to serialize to JSON")?;
    std::fs::write(path, json).with_context(|| format!("unable to write to {}", path.display()))
}

/// Deserialize a JSON file into type `T`.
pub(crate) fn read_json<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read file at {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse JSON file at {}", path.display()))
}
