// =============================================================================
// Application Identity
// =============================================================================

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "fleetwatch";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".fleetwatch";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "fleetwatch.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "FLEETWATCH_CONFIG";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "FLEETWATCH_LOG";

/// Environment variable for debug mode
pub const ENV_DEBUG: &str = "FLEETWATCH_DEBUG";

/// Environment variable for AWS region
pub const ENV_REGION: &str = "FLEETWATCH_REGION";

/// Environment variable for ECS endpoint override
pub const ENV_ECS_ENDPOINT: &str = "FLEETWATCH_ECS_ENDPOINT";

/// Environment variable for CloudWatch endpoint override
pub const ENV_CLOUDWATCH_ENDPOINT: &str = "FLEETWATCH_CLOUDWATCH_ENDPOINT";

/// Environment variable for metrics namespace
pub const ENV_NAMESPACE: &str = "FLEETWATCH_NAMESPACE";

/// Environment variable for dry-run mode (log metrics instead of publishing)
pub const ENV_DRY_RUN: &str = "FLEETWATCH_DRY_RUN";

// =============================================================================
// Metrics
// =============================================================================

/// Default CloudWatch namespace for published metrics
pub const DEFAULT_NAMESPACE: &str = "ECS/ServiceCounts";

/// Namespace prefix reserved by CloudWatch for AWS-owned metrics
pub const RESERVED_NAMESPACE_PREFIX: &str = "AWS/";

/// Dimension name for the owning cluster
pub const DIMENSION_CLUSTER: &str = "ClusterName";

/// Dimension name for the service
pub const DIMENSION_SERVICE: &str = "ServiceName";

/// Unit tag carried by every shaped record
pub const UNIT_COUNT: &str = "Count";

// =============================================================================
// Backend Batch Limits
// =============================================================================

/// Max identifiers per ECS Describe* call (hard API limit, not tunable)
pub const DESCRIBE_BATCH_MAX: usize = 10;

/// Max records per CloudWatch PutMetricData call (hard API limit, not tunable)
pub const PUT_METRIC_BATCH_MAX: usize = 20;
