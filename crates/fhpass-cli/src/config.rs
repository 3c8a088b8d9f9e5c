use serde::{Deserialize, Serialize};

/// Configuration structure loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Upper-case the MAC before hashing, as the router does
    #[serde(default = "default_uppercase_input")]
    pub uppercase_input: bool,

    /// Output format of the `derive` command
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_uppercase_input() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        let config = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            uppercase_input: default_uppercase_input(),
            output: OutputFormat::default(),
        }
    }
}
