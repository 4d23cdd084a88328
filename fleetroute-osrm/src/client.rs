//! HTTP-based `DistanceOracle` using OSRM's Route API.
//!
//! This module provides [`HttpDistanceOracle`], an implementation of the
//! [`DistanceOracle`] trait that fetches point-to-point driving distances
//! from an OSRM routing service via HTTP.
//!
//! # Architecture
//!
//! The [`DistanceOracle`] trait is synchronous to keep the core library
//! embeddable in synchronous contexts. This oracle bridges the async HTTP
//! calls to the sync interface by blocking on a Tokio runtime internally.
//! Batch evaluation fans requests out with bounded concurrency while
//! preserving result positions, so the solver's deterministic tie-breaking
//! is unaffected.
//!
//! # Failure absorption
//!
//! A failed query (timeout, connection failure, non-success HTTP status,
//! undecodable body, OSRM error code or missing distance) resolves to
//! [`UNREACHABLE_METERS`] immediately, with no retry. Failures are counted
//! and exposed through [`HttpDistanceOracle::stats`] so operators can tell
//! an oracle outage apart from genuinely unroutable pairs.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use futures_util::{StreamExt, stream};
use geo::Coord;
use reqwest::Client;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use fleetroute_core::{DistanceOracle, Meters, UNREACHABLE_METERS};

use super::osrm::RouteResponse;

/// Error type for [`HttpDistanceOracle`] construction failures.
#[derive(Debug)]
pub enum OracleBuildError {
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
}

impl std::fmt::Display for OracleBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
        }
    }
}

impl std::error::Error for OracleBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
        }
    }
}

/// Default user agent for OSRM requests.
pub const DEFAULT_USER_AGENT: &str = "fleetroute-routing/0.1";

/// Default request timeout in seconds.
///
/// Deliberately short: a solve issues many queries and a hung oracle must
/// not stall the whole invocation.
const DEFAULT_TIMEOUT_SECS: u64 = 2;

/// Default bound on concurrently in-flight queries.
const DEFAULT_MAX_IN_FLIGHT: usize = 8;

/// Configuration for [`HttpDistanceOracle`].
#[derive(Debug, Clone)]
pub struct HttpDistanceOracleConfig {
    /// Base URL for the OSRM service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Upper bound on concurrently in-flight queries during batch
    /// evaluation. Sized to respect the oracle's own concurrency limits.
    pub max_in_flight: usize,
}

impl Default for HttpDistanceOracleConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }
}

impl HttpDistanceOracleConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the bound on concurrently in-flight queries.
    #[must_use]
    pub const fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight;
        self
    }
}

/// Cumulative query counters for one oracle instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OracleStats {
    /// Total queries issued.
    pub queries: u64,
    /// Queries that resolved to the unreachable sentinel.
    pub failures: u64,
}

/// Reasons a single query resolved to the sentinel.
#[derive(Debug)]
enum FetchFailure {
    Timeout,
    Http(u16),
    Network(String),
    Parse(String),
    Service { code: String, message: String },
    MissingDistance,
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "request timed out"),
            Self::Http(status) => write!(f, "HTTP status {status}"),
            Self::Network(message) => write!(f, "network error: {message}"),
            Self::Parse(message) => write!(f, "undecodable response: {message}"),
            Self::Service { code, message } => write!(f, "OSRM error {code}: {message}"),
            Self::MissingDistance => write!(f, "response carried no usable distance"),
        }
    }
}

/// HTTP-based distance oracle using the OSRM Route API.
///
/// The oracle implements the synchronous [`DistanceOracle`] trait by
/// internally blocking on asynchronous HTTP requests. It owns a Tokio
/// runtime that is reused across calls, avoiding the overhead of creating
/// a new runtime per query.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the oracle uses its own
/// stored runtime. When called from within an existing multi-threaded Tokio
/// runtime (detected via [`Handle::try_current()`] and
/// [`RuntimeFlavor::MultiThread`]), it uses that runtime's handle with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics. From
/// within a `current_thread` runtime it falls back to its own runtime.
pub struct HttpDistanceOracle {
    client: Client,
    config: HttpDistanceOracleConfig,
    runtime: Runtime,
    queries: AtomicU64,
    failures: AtomicU64,
}

impl std::fmt::Debug for HttpDistanceOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDistanceOracle")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .field("stats", &self.stats())
            .finish()
    }
}

impl HttpDistanceOracle {
    /// Create a new oracle with default configuration.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for the OSRM service (e.g., `"http://localhost:5000"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, OracleBuildError> {
        Self::with_config(HttpDistanceOracleConfig::new(base_url))
    }

    /// Create a new oracle with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpDistanceOracleConfig) -> Result<Self, OracleBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(OracleBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(OracleBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
            queries: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        })
    }

    /// Cumulative query counters since construction.
    #[must_use]
    pub fn stats(&self) -> OracleStats {
        OracleStats {
            queries: self.queries.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }

    /// Build the OSRM Route API URL for one point pair.
    ///
    /// The URL format is: `{base_url}/route/v1/driving/{lonA},{latA};{lonB},{latB}`
    /// with route geometry suppressed, as only the distance is consumed.
    fn build_route_url(&self, from: Coord<f64>, to: Coord<f64>) -> String {
        format!(
            "{}/route/v1/driving/{},{};{},{}?overview=false",
            self.config.base_url.trim_end_matches('/'),
            from.x,
            from.y,
            to.x,
            to.y
        )
    }

    /// Price one pair, absorbing any failure into the sentinel.
    async fn fetch_distance(&self, from: Coord<f64>, to: Coord<f64>) -> Meters {
        self.queries.fetch_add(1, Ordering::Relaxed);
        let url = self.build_route_url(from, to);
        match self.try_fetch(&url).await {
            Ok(meters) => meters,
            Err(failure) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                log::warn!("distance query {url} failed ({failure}); substituting sentinel");
                UNREACHABLE_METERS
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<Meters, FetchFailure> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Self::convert_reqwest_error)?
            .error_for_status()
            .map_err(Self::convert_reqwest_error)?;

        let route_response: RouteResponse = response
            .json()
            .await
            .map_err(|err| FetchFailure::Parse(err.to_string()))?;

        if !route_response.is_ok() {
            return Err(FetchFailure::Service {
                code: route_response.code,
                message: route_response.message.unwrap_or_default(),
            });
        }

        route_response
            .distance_meters()
            .ok_or(FetchFailure::MissingDistance)
    }

    /// Convert a reqwest error to a `FetchFailure`.
    fn convert_reqwest_error(error: reqwest::Error) -> FetchFailure {
        if error.is_timeout() {
            return FetchFailure::Timeout;
        }

        if let Some(status) = error.status() {
            return FetchFailure::Http(status.as_u16());
        }

        FetchFailure::Network(error.to_string())
    }

    /// Drive a future to completion on whichever runtime applies.
    fn block_on<F: Future>(&self, future: F) -> F::Output {
        // block_in_place requires a multi-threaded runtime; for
        // current_thread runtimes we fall back to our own stored runtime.
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

impl DistanceOracle for HttpDistanceOracle {
    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> Meters {
        self.block_on(self.fetch_distance(from, to))
    }

    /// Price a batch with bounded concurrency.
    ///
    /// `buffered` preserves the positional correspondence between input
    /// pairs and results, which the solver's tie-breaking depends on. All
    /// results are collected before returning; selection never happens on a
    /// partially-arrived stream.
    fn distances(&self, pairs: &[(Coord<f64>, Coord<f64>)]) -> Vec<Meters> {
        if pairs.is_empty() {
            return Vec::new();
        }
        let concurrency = self.config.max_in_flight.max(1);
        let batch = stream::iter(pairs.iter().map(|&(from, to)| self.fetch_distance(from, to)))
            .buffered(concurrency)
            .collect::<Vec<Meters>>();
        self.block_on(batch)
    }
}
