use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::cli::CliConfig;
use super::constants::{
    APP_DOT_FOLDER, CONFIG_FILE_NAME, DEFAULT_NAMESPACE, RESERVED_NAMESPACE_PREFIX,
};

// =============================================================================
// File Config Structs (JSON deserialization)
// =============================================================================

/// AWS configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AwsFileConfig {
    pub region: Option<String>,
    pub ecs_endpoint: Option<String>,
    pub cloudwatch_endpoint: Option<String>,
}

/// Metrics configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MetricsFileConfig {
    pub namespace: Option<String>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub aws: Option<AwsFileConfig>,
    pub metrics: Option<MetricsFileConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }

    /// Merge another FileConfig into this one (other takes precedence)
    fn merge(&mut self, other: FileConfig) {
        if let Some(aws) = other.aws {
            let current = self.aws.get_or_insert_with(AwsFileConfig::default);
            if aws.region.is_some() {
                tracing::trace!(region = ?aws.region, "Merging aws.region");
                current.region = aws.region;
            }
            if aws.ecs_endpoint.is_some() {
                tracing::trace!(ecs_endpoint = ?aws.ecs_endpoint, "Merging aws.ecs_endpoint");
                current.ecs_endpoint = aws.ecs_endpoint;
            }
            if aws.cloudwatch_endpoint.is_some() {
                tracing::trace!(
                    cloudwatch_endpoint = ?aws.cloudwatch_endpoint,
                    "Merging aws.cloudwatch_endpoint"
                );
                current.cloudwatch_endpoint = aws.cloudwatch_endpoint;
            }
        }

        if let Some(metrics) = other.metrics {
            let current = self.metrics.get_or_insert_with(MetricsFileConfig::default);
            if metrics.namespace.is_some() {
                tracing::trace!(namespace = ?metrics.namespace, "Merging metrics.namespace");
                current.namespace = metrics.namespace;
            }
        }
    }
}

// =============================================================================
// Runtime Config Structs (final merged configuration)
// =============================================================================

/// AWS configuration (final/runtime)
///
/// A region of `None` defers to the SDK's default provider chain.
#[derive(Debug, Clone)]
pub struct AwsConfig {
    pub region: Option<String>,
    pub ecs_endpoint: Option<String>,
    pub cloudwatch_endpoint: Option<String>,
}

/// Metrics configuration (final/runtime)
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    pub namespace: String,
}

/// Final merged application configuration, immutable for the whole run
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub aws: AwsConfig,
    pub metrics: MetricsConfig,
    pub dry_run: bool,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Profile directory config (~/.fleetwatch/fleetwatch.json)
    /// 3. Local directory config OR CLI-specified config path
    /// 4. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading application configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let mut file_config = FileConfig::default();
        let mut found_configs: Vec<String> = Vec::new();

        // 1. Load from profile dir (~/.fleetwatch/fleetwatch.json) - skip if not exists
        if let Some(profile_path) = get_profile_config_path()
            && profile_path.exists()
        {
            let profile_config = FileConfig::load_from_file(&profile_path)?;
            profile_config.warn_unknown_fields();
            file_config.merge(profile_config);
            found_configs.push(profile_path.display().to_string());
        }

        // 2. Load from CLI-specified path OR local directory
        let overlay_path = if let Some(ref path) = cli.config {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Some(path.clone())
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        if let Some(path) = overlay_path {
            let overlay_config = FileConfig::load_from_file(&path)?;
            overlay_config.warn_unknown_fields();
            file_config.merge(overlay_config);
            found_configs.push(path.display().to_string());
        }

        tracing::debug!(configs = ?found_configs, "Config files loaded");

        // 3. Layer configs: defaults -> file config -> CLI/env overrides
        let file_aws = file_config.aws.unwrap_or_default();
        let file_metrics = file_config.metrics.unwrap_or_default();

        let aws = AwsConfig {
            region: cli.region.clone().or(file_aws.region),
            ecs_endpoint: cli.ecs_endpoint.clone().or(file_aws.ecs_endpoint),
            cloudwatch_endpoint: cli
                .cloudwatch_endpoint
                .clone()
                .or(file_aws.cloudwatch_endpoint),
        };

        let namespace = cli
            .namespace
            .clone()
            .or(file_metrics.namespace)
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        let config = Self {
            aws,
            metrics: MetricsConfig { namespace },
            dry_run: cli.dry_run,
        };

        config.validate()?;

        tracing::debug!(
            region = ?config.aws.region,
            ecs_endpoint = ?config.aws.ecs_endpoint,
            cloudwatch_endpoint = ?config.aws.cloudwatch_endpoint,
            namespace = %config.metrics.namespace,
            dry_run = config.dry_run,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Validate the configuration for consistency and correctness
    fn validate(&self) -> Result<()> {
        if self.metrics.namespace.is_empty() {
            anyhow::bail!("Configuration error: metrics.namespace must not be empty");
        }

        // CloudWatch rejects custom metrics in AWS-reserved namespaces
        if self
            .metrics
            .namespace
            .starts_with(RESERVED_NAMESPACE_PREFIX)
        {
            anyhow::bail!(
                "Configuration error: metrics.namespace must not use the reserved '{}' prefix",
                RESERVED_NAMESPACE_PREFIX
            );
        }

        if self.metrics.namespace.len() > 255 {
            anyhow::bail!("Configuration error: metrics.namespace exceeds 255 characters");
        }

        Ok(())
    }
}

/// Path of the profile-level config file, if a home directory exists
fn get_profile_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_DOT_FOLDER).join(CONFIG_FILE_NAME))
}
