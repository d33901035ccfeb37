pub const DEFAULT_RESOURCE_NAME: &str = "nvidia.com/gpu";
pub const DEFAULT_SAMPLE_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_KUBE_API_QPS: f32 = 20.0;
pub const DEFAULT_KUBE_API_BURST: u32 = 30;
pub const REPORT_HEADER: &str = "name,namespace,podIP,nodeName,phase,gpuCount";
