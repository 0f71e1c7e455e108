use std::collections::HashMap;

use thrive_api::config::{Config, LogFormat};

fn config_from(vars: &[(&str, &str)]) -> eyre::Result<Config> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(!config.lambda);
}

#[test]
fn overrides() {
    let config = config_from(&[
        ("THRIVE_BIND_ADDR", "127.0.0.1:9000"),
        ("THRIVE_LOG_FORMAT", "pretty"),
        ("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001"),
    ])
    .unwrap();
    assert_eq!(config.bind_addr.port(), 9000);
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert!(config.lambda);
}

#[test]
fn invalid_values_are_errors() {
    assert!(config_from(&[("THRIVE_BIND_ADDR", "not-an-addr")]).is_err());
    assert!(config_from(&[("THRIVE_LOG_FORMAT", "xml")]).is_err());
}
