use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_vars_uses_defaults_when_unset() {
    let cfg = ServerConfig::from_vars(lookup_from(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.leptos_config, "Cargo.toml");
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(lookup_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("LEPTOS_CONFIG_PATH", "/etc/portal/Cargo.toml"),
    ]))
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.leptos_config, "/etc/portal/Cargo.toml");
}

#[test]
fn from_vars_rejects_invalid_port() {
    let err = ServerConfig::from_vars(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn from_vars_rejects_out_of_range_port() {
    assert!(matches!(
        ServerConfig::from_vars(lookup_from(&[("PORT", "70000")])),
        Err(ConfigError::InvalidPort(_))
    ));
}

#[test]
fn from_vars_rejects_invalid_host() {
    assert_eq!(
        ServerConfig::from_vars(lookup_from(&[("HOST", "localhost")])),
        Err(ConfigError::InvalidHost("localhost".to_owned()))
    );
}
