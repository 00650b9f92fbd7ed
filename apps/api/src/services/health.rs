//! Health check service for verifying the database dependency

use serde::Serialize;
use sqlx::PgPool;
use std::time::{Duration, Instant};

/// Upper bound on how long a readiness probe waits for the database
const DATABASE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Status of an individual service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Service is healthy and responding
    Healthy,
    /// Service is unhealthy or unreachable
    Unhealthy,
}

/// Result of a single service health check
#[derive(Debug, Clone, Serialize)]
pub struct ServiceHealth {
    /// Name of the service
    pub name: &'static str,
    /// Current status
    pub status: ServiceStatus,
    /// Response time in milliseconds (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    /// Error message if unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceHealth {
    /// Create a healthy service result
    pub fn healthy(name: &'static str, response_time: Duration) -> Self {
        Self {
            name,
            status: ServiceStatus::Healthy,
            response_time_ms: Some(response_time.as_millis() as u64),
            error: None,
        }
    }

    /// Create an unhealthy service result with response time
    pub fn unhealthy(name: &'static str, error: impl Into<String>, response_time: Duration) -> Self {
        Self {
            name,
            status: ServiceStatus::Unhealthy,
            response_time_ms: Some(response_time.as_millis() as u64),
            error: Some(error.into()),
        }
    }
}

/// Aggregated health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResponse {
    /// Overall status (healthy only if all services are healthy)
    pub status: ServiceStatus,
    /// Individual service health results
    pub services: Vec<ServiceHealth>,
    /// API version
    pub version: &'static str,
}

impl HealthCheckResponse {
    /// Create a new health check response from individual service results
    pub fn new(services: Vec<ServiceHealth>) -> Self {
        let status = if services.iter().all(|s| s.status == ServiceStatus::Healthy) {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Unhealthy
        };

        Self {
            status,
            services,
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Check if overall health is good
    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}

/// Health check service, pinging the shared connection pool
#[derive(Clone)]
pub struct HealthService {
    pool: PgPool,
}

impl HealthService {
    /// Create a new health service
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check PostgreSQL connectivity with a trivial query
    pub async fn check_database(&self) -> ServiceHealth {
        let start = Instant::now();

        let ping = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(&self.pool);
        match tokio::time::timeout(DATABASE_CHECK_TIMEOUT, ping).await {
            Ok(Ok(_)) => ServiceHealth::healthy("database", start.elapsed()),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Database health check failed");
                ServiceHealth::unhealthy("database", format!("Query failed: {}", e), start.elapsed())
            }
            Err(_) => {
                tracing::warn!("Database health check timed out");
                ServiceHealth::unhealthy("database", "Query timed out", start.elapsed())
            }
        }
    }

    /// Run every dependency check
    pub async fn check_all(&self) -> HealthCheckResponse {
        HealthCheckResponse::new(vec![self.check_database().await])
    }
}
