use serde_json::Value;
use std::fs;
use std::path::Path;

/// Persist the decoded payload pretty-printed with 2-space indentation,
/// replacing any artifact written earlier in the same pass.
pub fn save_artifact(path: &Path, payload: &Value) -> anyhow::Result<()> {
    let pretty = serde_json::to_string_pretty(payload)?;
    fs::write(path, pretty)?;
    Ok(())
}
