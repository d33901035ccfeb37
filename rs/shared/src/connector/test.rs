use std::io::Write;
use std::time::Duration;

use rstest::rstest;
use tempfile::NamedTempFile;

use super::{load_config, ConnectionOptions, ConnectorError, RequestRateLimit};

const KUBECONFIG: &str = r#"
apiVersion: v1
kind: Config
clusters:
- name: test
  cluster:
    server: https://10.0.0.1:6443
contexts:
- name: test
  context:
    cluster: test
    namespace: gpu
    user: test
current-context: test
users:
- name: test
  user:
    token: not-a-real-token
"#;

fn write_kubeconfig() -> Result<NamedTempFile, std::io::Error> {
    let mut file = NamedTempFile::new()?;
    file.write_all(KUBECONFIG.as_bytes())?;
    Ok(file)
}

#[rstest]
#[case(20.0, 30, 30, Duration::from_millis(1500))]
#[case(10.0, 1, 1, Duration::from_millis(100))]
#[case(0.0, 0, 10, Duration::from_secs(2))]
fn test_rate_limit_from_flags(
    #[case] qps: f32,
    #[case] burst: u32,
    #[case] expected_burst: u64,
    #[case] expected_period: Duration,
) {
    let limit = RequestRateLimit::from_flags(qps, burst)
        .unwrap()
        .expect("rate limit should be enabled");
    assert_eq!(limit.burst, expected_burst);
    assert_eq!(limit.period, expected_period);
}

#[test]
fn test_negative_qps_disables_rate_limit() {
    assert_eq!(RequestRateLimit::from_flags(-1.0, 0).unwrap(), None);
}

#[rstest]
#[case(5.0, 0)]
#[case(f32::NAN, 10)]
fn test_invalid_rate_limit(#[case] qps: f32, #[case] burst: u32) {
    let result = RequestRateLimit::from_flags(qps, burst);
    assert!(matches!(result, Err(ConnectorError::InvalidRateLimit(_))));
}

#[tokio::test]
async fn test_load_config_from_kubeconfig() -> Result<(), Box<dyn std::error::Error>> {
    let file = write_kubeconfig()?;
    let opts = ConnectionOptions {
        kubeconfig: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    let config = load_config(&opts).await?;
    assert_eq!(config.cluster_url.host(), Some("10.0.0.1"));
    assert_eq!(config.cluster_url.port_u16(), Some(6443));
    assert_eq!(config.default_namespace, "gpu");
    Ok(())
}

#[tokio::test]
async fn test_master_overrides_kubeconfig_server() -> Result<(), Box<dyn std::error::Error>> {
    let file = write_kubeconfig()?;
    let opts = ConnectionOptions {
        kubeconfig: Some(file.path().to_path_buf()),
        master: Some("https://apiserver.example:8443".to_string()),
        ..Default::default()
    };

    let config = load_config(&opts).await?;
    assert_eq!(config.cluster_url.host(), Some("apiserver.example"));
    assert_eq!(config.cluster_url.port_u16(), Some(8443));
    Ok(())
}

#[tokio::test]
async fn test_invalid_master_is_rejected() -> Result<(), std::io::Error> {
    let file = write_kubeconfig()?;
    let opts = ConnectionOptions {
        kubeconfig: Some(file.path().to_path_buf()),
        master: Some("https://bad host".to_string()),
        ..Default::default()
    };

    let result = load_config(&opts).await;
    assert!(matches!(result, Err(ConnectorError::InvalidMaster { .. })));
    Ok(())
}

#[tokio::test]
async fn test_missing_kubeconfig_file() {
    let opts = ConnectionOptions {
        kubeconfig: Some("/nonexistent/kubeconfig".into()),
        ..Default::default()
    };

    let result = load_config(&opts).await;
    assert!(matches!(result, Err(ConnectorError::Kubeconfig(_))));
}
