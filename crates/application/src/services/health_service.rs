//! Health aggregation service
//!
//! Probes the backends behind the pipeline with a bounded timeout and
//! reports per-service status.

use std::{collections::HashMap, fmt, sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::ports::VideoCatalogPort;

/// Default timeout for health checks in seconds
const DEFAULT_HEALTH_CHECK_TIMEOUT_SECS: u64 = 5;

/// Name under which the video server appears in reports
pub const VIDEO_SERVER: &str = "video_server";

/// Configuration for health check behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Timeout for each health check in seconds (default: 5)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

const fn default_timeout() -> u64 {
    DEFAULT_HEALTH_CHECK_TIMEOUT_SECS
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
        }
    }
}

impl HealthConfig {
    /// Timeout as a duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Status of an individual service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Whether the service is healthy
    pub healthy: bool,
    /// Response time in milliseconds (if the check completed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    /// Error message if unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceHealth {
    /// Create a healthy status
    #[must_use]
    pub const fn healthy() -> Self {
        Self {
            healthy: true,
            response_time_ms: None,
            error: None,
        }
    }

    /// Create an unhealthy status
    #[must_use]
    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            healthy: false,
            response_time_ms: None,
            error: Some(error.into()),
        }
    }

    /// Create an unhealthy status due to timeout
    #[must_use]
    pub fn timeout() -> Self {
        Self::unhealthy("Health check timed out")
    }

    /// Set response time
    #[must_use]
    pub const fn with_response_time(mut self, ms: u64) -> Self {
        self.response_time_ms = Some(ms);
        self
    }
}

/// Health report over every probed service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// True if all services are healthy
    pub healthy: bool,
    /// Individual service statuses
    pub services: HashMap<String, ServiceHealth>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthReport {
    /// Create a new health report
    #[must_use]
    pub fn new(services: HashMap<String, ServiceHealth>) -> Self {
        let healthy = services.values().all(|s| s.healthy);

        Self {
            healthy,
            services,
            checked_at: chrono::Utc::now(),
        }
    }

    /// Get status of a specific service
    #[must_use]
    pub fn service_status(&self, name: &str) -> Option<&ServiceHealth> {
        self.services.get(name)
    }
}

/// Service for aggregating backend health checks
pub struct HealthService {
    config: HealthConfig,
    catalog: Arc<dyn VideoCatalogPort>,
}

impl fmt::Debug for HealthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HealthService")
            .field("config", &self.config)
            .field("catalog", &"<VideoCatalogPort>")
            .finish()
    }
}

impl HealthService {
    /// Create a new health service
    #[must_use]
    pub fn new(catalog: Arc<dyn VideoCatalogPort>) -> Self {
        Self {
            config: HealthConfig::default(),
            catalog,
        }
    }

    /// Set the health check configuration
    #[must_use]
    pub const fn with_config(mut self, config: HealthConfig) -> Self {
        self.config = config;
        self
    }

    /// Check health of every backend
    #[instrument(skip(self))]
    pub async fn check_all(&self) -> HealthReport {
        let mut services = HashMap::new();
        services.insert(VIDEO_SERVER.to_string(), self.check_video_server().await);
        HealthReport::new(services)
    }

    /// Check the video server, which hosts classification, search and catalog
    #[instrument(skip(self))]
    pub async fn check_video_server(&self) -> ServiceHealth {
        let start = std::time::Instant::now();

        let Ok(healthy) = timeout(self.config.timeout(), self.catalog.is_available()).await
        else {
            warn!("Video server health check timed out");
            return ServiceHealth::timeout();
        };

        // Bounded by the health check timeout
        #[allow(clippy::cast_possible_truncation)]
        let response_time = start.elapsed().as_millis() as u64;
        if healthy {
            debug!(response_time_ms = response_time, "Video server healthy");
            ServiceHealth::healthy().with_response_time(response_time)
        } else {
            warn!(response_time_ms = response_time, "Video server unhealthy");
            ServiceHealth::unhealthy("Video server did not answer its status probe")
                .with_response_time(response_time)
        }
    }
}
