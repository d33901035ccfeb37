use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use kube::client::ClientBuilder;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use tower::limit::RateLimitLayer;
use tracing::{debug, warn};

use super::ConnectorError;

const DEFAULT_QPS: f32 = 5.0;
const DEFAULT_BURST: u32 = 10;

/// Everything needed to reach the API server.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOptions {
    /// Path to a kubeconfig file. `None` falls back to kube's inference.
    pub kubeconfig: Option<PathBuf>,
    /// API server URL, overrides the server from the kubeconfig.
    pub master: Option<String>,
    pub qps: f32,
    pub burst: u32,
}

/// Client-side request budget: `burst` requests per `period`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestRateLimit {
    pub burst: u64,
    pub period: Duration,
}

impl RequestRateLimit {
    /// Negative qps disables limiting, zero picks the defaults.
    pub fn from_flags(qps: f32, burst: u32) -> Result<Option<Self>, ConnectorError> {
        if qps.is_nan() {
            return Err(ConnectorError::InvalidRateLimit("qps is not a number".to_string()));
        }
        if qps < 0.0 {
            return Ok(None);
        }
        let (qps, burst) = if qps == 0.0 {
            (DEFAULT_QPS, DEFAULT_BURST)
        } else {
            (qps, burst)
        };
        if burst == 0 {
            return Err(ConnectorError::InvalidRateLimit(format!(
                "burst must be greater than 0 when qps is {qps}"
            )));
        }
        Ok(Some(Self {
            burst: u64::from(burst),
            period: Duration::from_secs_f64(f64::from(burst) / f64::from(qps)),
        }))
    }
}

/// Resolves the client configuration without touching the network.
pub async fn load_config(opts: &ConnectionOptions) -> Result<Config, ConnectorError> {
    let mut config = match &opts.kubeconfig {
        Some(path) => {
            let kubeconfig = Kubeconfig::read_from(path)?;
            Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?
        }
        None => match (Config::infer().await, &opts.master) {
            (Ok(config), _) => config,
            (Err(e), Some(master)) => {
                warn!("Failed to infer config, using {master} without credentials: {e}");
                Config::new(parse_master(master)?)
            }
            (Err(e), None) => return Err(e.into()),
        },
    };

    if let Some(master) = &opts.master {
        config.cluster_url = parse_master(master)?;
    }
    Ok(config)
}

pub fn build_client(
    config: Config,
    rate_limit: Option<RequestRateLimit>,
) -> Result<Client, ConnectorError> {
    let builder = ClientBuilder::try_from(config)?;
    let client = match rate_limit {
        Some(limit) => builder
            .with_layer(&RateLimitLayer::new(limit.burst, limit.period))
            .build(),
        None => builder.build(),
    };
    Ok(client)
}

pub async fn connect(opts: &ConnectionOptions) -> Result<Client, ConnectorError> {
    let rate_limit = RequestRateLimit::from_flags(opts.qps, opts.burst)?;
    let config = load_config(opts).await?;
    debug!(
        "Connecting to {} (rate limit: {:?})",
        config.cluster_url, rate_limit
    );
    build_client(config, rate_limit)
}

fn parse_master<T>(master: &str) -> Result<T, ConnectorError>
where
    T: FromStr,
    T::Err: Display,
{
    master
        .parse()
        .map_err(|e: T::Err| ConnectorError::InvalidMaster {
            master: master.to_owned(),
            reason: e.to_string(),
        })
}
