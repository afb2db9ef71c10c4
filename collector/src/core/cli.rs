use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::constants::{
    ENV_CLOUDWATCH_ENDPOINT, ENV_CONFIG, ENV_DEBUG, ENV_DRY_RUN, ENV_ECS_ENDPOINT, ENV_NAMESPACE,
    ENV_REGION,
};

#[derive(Parser)]
#[command(name = "fleetwatch")]
#[command(version, about = "ECS service counter collector", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// AWS region for the ECS and CloudWatch backends
    #[arg(long, short = 'r', global = true, env = ENV_REGION)]
    pub region: Option<String>,

    /// CloudWatch namespace for published metrics
    #[arg(long, short = 'n', global = true, env = ENV_NAMESPACE)]
    pub namespace: Option<String>,

    /// ECS endpoint override (for ECS-compatible local stacks)
    #[arg(long, global = true, env = ENV_ECS_ENDPOINT)]
    pub ecs_endpoint: Option<String>,

    /// CloudWatch endpoint override
    #[arg(long, global = true, env = ENV_CLOUDWATCH_ENDPOINT)]
    pub cloudwatch_endpoint: Option<String>,

    /// Log shaped metrics instead of publishing them
    #[arg(long, global = true, env = ENV_DRY_RUN)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = ENV_DEBUG)]
    pub debug: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Run one collection pass (default command)
    Collect,
    /// Validate configuration and backend connectivity
    Check,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub region: Option<String>,
    pub namespace: Option<String>,
    pub ecs_endpoint: Option<String>,
    pub cloudwatch_endpoint: Option<String>,
    pub dry_run: bool,
    pub debug: bool,
    pub config: Option<PathBuf>,
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let cli = Cli::parse();
    let config = CliConfig {
        region: cli.region,
        namespace: cli.namespace,
        ecs_endpoint: cli.ecs_endpoint,
        cloudwatch_endpoint: cli.cloudwatch_endpoint,
        dry_run: cli.dry_run,
        debug: cli.debug,
        config: cli.config,
    };
    (config, cli.command)
}
