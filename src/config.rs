//! Process configuration, read from the environment once at startup.
//!
//! The binaries fail fast on a missing variable instead of letting the
//! first invocation die on an opaque auth or table error.

use anyhow::{Context, Result, bail};

const TABLE_NAME_VAR: &str = "TABLE_NAME";
const HF_API_KEY_VAR: &str = "HF_API_KEY";

/// Everything `create_task` needs from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding the task records.
    pub table_name: String,
    /// Bearer credential for the HuggingFace inference router.
    pub hf_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            table_name: table_name()?,
            hf_api_key: require(HF_API_KEY_VAR)?,
        })
    }
}

/// Just the table name — all `get_tasks` needs.
pub fn table_name() -> Result<String> {
    require(TABLE_NAME_VAR)
}

fn require(name: &str) -> Result<String> {
    let value = std::env::var(name).with_context(|| format!("{name} is not set"))?;
    if value.is_empty() {
        bail!("{name} is set but empty");
    }
    Ok(value)
}
