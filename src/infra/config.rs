use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{AppContext, InitArgs};

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config
{
    /// Default corpus settings
    pub corpus: CorpusConfig,

    /// Remote generative service settings
    pub remote: RemoteConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig
{
    /// Directory holding prior submissions
    pub dir: String,

    /// File extensions treated as corpus entries
    pub extensions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig
{
    /// Credential for the generative endpoint; absent means rule-based only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model identifier
    pub model: String,

    /// Endpoint base URL
    pub endpoint: String,

    /// Hard timeout on the remote call, in seconds
    pub timeout_secs: u64,
}

impl Default for Config
{
    fn default() -> Self
    {
        Self { corpus: CorpusConfig::default(), remote: RemoteConfig::default() }
    }
}

impl Default for CorpusConfig
{
    fn default() -> Self
    {
        Self {
            dir: "corpus".to_string(),
            extensions: vec!["txt".to_string(), "md".to_string()],
        }
    }
}

impl Default for RemoteConfig
{
    fn default() -> Self
    {
        Self {
            api_key: None,
            model: "gemini-2.0-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            timeout_secs: 30,
        }
    }
}

pub fn load_config() -> Result<Config>
{
    let mut builder = config::Config::builder();

    // Load from config files in priority order
    let config_paths = ["draftcheck.toml", ".draftcheck.toml"];

    for path in &config_paths
    {
        if Path::new(path).exists()
        {
            builder = builder.add_source(config::File::with_name(path));
            break;
        }
    }

    // Add environment variables with DRAFTCHECK_ prefix
    builder = builder.add_source(config::Environment::with_prefix("DRAFTCHECK").separator("_"));

    let cfg = builder
        .build()
        .context("Failed to load configuration")?;
    let mut parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    // The one ambient credential read, centralized so every call site only
    // ever sees the threaded config value
    if parsed
        .remote
        .api_key
        .is_none()
        && let Ok(key) = std::env::var("GEMINI_API_KEY")
        && !key.is_empty()
    {
        parsed
            .remote
            .api_key = Some(key);
    }

    Ok(parsed)
}

pub fn init(
    args: InitArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config_path = args
        .path
        .join("draftcheck.toml");

    if config_path.exists() && !args.force
    {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet
    {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_defaults_are_rule_based_only()
    {
        let cfg = Config::default();

        assert!(
            cfg.remote
                .api_key
                .is_none()
        );
        assert_eq!(cfg.remote.model, "gemini-2.0-flash");
        assert_eq!(cfg.remote.timeout_secs, 30);
        assert_eq!(cfg.corpus.dir, "corpus");
    }

    #[test]
    fn test_partial_file_fills_in_defaults()
    {
        let parsed: Config = toml::from_str("[remote]\nmodel = \"gemini-1.5-pro\"\n")
            .expect("partial config parses");

        assert_eq!(parsed.remote.model, "gemini-1.5-pro");
        assert_eq!(parsed.remote.timeout_secs, 30);
        assert_eq!(parsed.corpus.extensions, vec!["txt", "md"]);
    }

    #[test]
    fn test_default_config_round_trips_through_toml()
    {
        let rendered = toml::to_string_pretty(&Config::default()).expect("serialize");
        let parsed: Config = toml::from_str(&rendered).expect("reparse");

        assert_eq!(parsed.remote.model, Config::default().remote.model);
        assert_eq!(parsed.corpus.dir, Config::default().corpus.dir);
    }
}
