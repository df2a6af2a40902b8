use std::path::Path;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

use crate::domain::template::ExpansionLevel;

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ExpanderSettings {
    pub level: ExpansionLevel,
}

impl ExpanderSettings {
    pub fn from_yaml_str(yml: &str) -> Result<Self> {
        serde_yaml::from_str(yml).context("Invalid expander settings")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yml = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read settings file {}", path.display()))?;
        Self::from_yaml_str(&yml)
    }
}
