use serde::Deserialize;
use sqlpeek::{MarkupClasses, MinifyConfig};
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,

    #[serde(default)]
    pub minify: MinifyConfig,

    #[serde(default)]
    pub markup: MarkupClasses,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            minify: MinifyConfig::default(),
            markup: MarkupClasses::default(),
        }
    }
}

impl ConfigFile {
    /// Load `path`, or defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;
        let file = Self::parse(&raw)
            .map_err(|e| anyhow::anyhow!("invalid config file {}: {e:#}", path.display()))?;
        Ok(file)
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = toml::from_str(raw)?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.version.trim() != "1" {
            anyhow::bail!("unsupported config version: {}", self.version);
        }
        self.minify.validate()?;
        Ok(())
    }
}
