//! Core application

use anyhow::Result;

use crate::core::cli::{self, CliConfig, Commands};
use crate::core::config::AppConfig;
use crate::core::constants::{APP_NAME_LOWER, ENV_LOG};
use crate::data::directory::{EcsDirectory, ServiceDirectory};
use crate::data::metrics::{CloudWatchSink, LogSink, MetricSink};
use crate::domain::run_collection;

pub struct CoreApp;

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();

        let (cli_config, command) = cli::parse();
        Self::init_logging(cli_config.debug);

        tracing::debug!("Application starting");
        tracing::trace!(command = ?command, "Parsed command");

        match command {
            Some(Commands::Check) => Self::check(&cli_config).await,
            Some(Commands::Collect) | None => Self::collect(&cli_config).await,
        }
    }

    /// Execute one collection run and print its terminal summary
    async fn collect(cli: &CliConfig) -> Result<()> {
        let config = AppConfig::load(cli)?;

        let directory =
            EcsDirectory::new(config.aws.region.clone(), config.aws.ecs_endpoint.clone()).await;

        let sink: Box<dyn MetricSink> = if config.dry_run {
            Box::new(LogSink::new())
        } else {
            Box::new(
                CloudWatchSink::new(
                    config.aws.region.clone(),
                    config.aws.cloudwatch_endpoint.clone(),
                )
                .await,
            )
        };

        tracing::info!(
            namespace = %config.metrics.namespace,
            sink = sink.name(),
            "Collection run starting"
        );

        let summary = run_collection(&directory, sink.as_ref(), &config.metrics.namespace).await?;

        tracing::info!(
            clusters = summary.clusters,
            services = summary.services,
            records = summary.records,
            batches = summary.batches,
            "Collection run complete"
        );
        println!("{summary}");

        Ok(())
    }

    /// Validate configuration and confirm the directory backend is reachable
    async fn check(cli: &CliConfig) -> Result<()> {
        let config = AppConfig::load(cli)?;

        let directory =
            EcsDirectory::new(config.aws.region.clone(), config.aws.ecs_endpoint.clone()).await;
        directory.health_check().await?;

        println!(
            "Configuration OK; ECS reachable (namespace: {})",
            config.metrics.namespace
        );
        Ok(())
    }

    fn init_logging(debug: bool) {
        let default_filter = if debug {
            format!("debug,{}=debug", APP_NAME_LOWER)
        } else {
            format!("info,{}=info", APP_NAME_LOWER)
        };

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }
}
