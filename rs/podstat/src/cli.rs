use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shared::connector::ConnectionOptions;

use crate::constant::{
    DEFAULT_KUBE_API_BURST, DEFAULT_KUBE_API_QPS, DEFAULT_RESOURCE_NAME,
    DEFAULT_SAMPLE_INTERVAL_SECS,
};

#[derive(Parser, Debug)]
#[command(name = "podstat", version, about = "Observe pod placement on a Kubernetes cluster")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the accelerator requests of every pod running on a node
    #[command(name = "get-running-gpus")]
    GetRunningGpus(GpuArgs),
    /// Periodically log how long pods waited to be scheduled
    #[command(name = "schedule-test")]
    ScheduleTest(ScheduleArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    #[arg(
        long,
        value_hint = clap::ValueHint::FilePath,
        help = "Path to control plane kubeconfig file"
    )]
    pub kubeconfig: Option<PathBuf>,

    #[arg(
        long,
        help = "The address of the Kubernetes API server. Overrides any value in kubeconfig"
    )]
    pub master: Option<String>,

    #[arg(
        long,
        default_value_t = DEFAULT_KUBE_API_QPS,
        allow_negative_numbers = true,
        help = "QPS to use while talking with the API server, negative disables rate limiting"
    )]
    pub kube_api_qps: f32,

    #[arg(
        long,
        default_value_t = DEFAULT_KUBE_API_BURST,
        help = "Burst to use while talking with the API server"
    )]
    pub kube_api_burst: u32,
}

impl From<ConnectionArgs> for ConnectionOptions {
    fn from(args: ConnectionArgs) -> Self {
        Self {
            kubeconfig: args.kubeconfig,
            master: args.master,
            qps: args.kube_api_qps,
            burst: args.kube_api_burst,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct GpuArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Namespaces to report on, all namespaces when omitted"
    )]
    pub namespaces: Vec<String>,

    #[arg(
        long,
        env = "PODSTAT_RESOURCE_NAME",
        default_value = DEFAULT_RESOURCE_NAME,
        help = "Extended resource to count"
    )]
    pub resource_name: String,
}

#[derive(Args, Debug, Clone)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[arg(
        long,
        default_value = "",
        help = "Namespace to sample, all namespaces when empty"
    )]
    pub namespace: String,

    #[arg(
        long,
        default_value_t = DEFAULT_SAMPLE_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds between two samples"
    )]
    pub interval: u64,
}
