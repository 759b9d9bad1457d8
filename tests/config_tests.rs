use std::collections::HashMap;

use sql_advise_client::config::{Config, RulesConfig, ServerConfig};

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, "10001");
    assert!(config.server.version.is_empty());
    assert!(config.server.connect_timeout().is_none());
    assert!(config.session.user.is_empty());
    assert!(config.rules.enabled.is_empty());
}

#[test]
fn test_default_rules_config() {
    let config = RulesConfig::default();
    assert!(config.enabled.is_empty());
}

#[test]
fn test_parse_full_config() {
    let config = Config::from_toml(
        r#"
        [server]
        host = "advisor.internal"
        port = "9090"
        version = "2019"
        connect_timeout_ms = 1500

        [session]
        user = "sa"
        password = "pw"
        host = "10.0.0.12"
        port = "1433"
        current_database = "orders"
        current_schema = "dbo"

        [rules]
        enabled = ["rule_no_select_star", "rule_need_index"]
        "#
    )
    .unwrap();

    assert_eq!(config.server.host, "advisor.internal");
    assert_eq!(config.server.port, "9090");
    assert_eq!(config.server.version, "2019");
    assert_eq!(config.server.connect_timeout().unwrap().as_millis(), 1500);
    assert_eq!(config.session.current_database, "orders");
    assert_eq!(config.session.current_schema, "dbo");
    assert_eq!(config.rules.enabled.len(), 2);
}

#[test]
fn test_partial_server_section_keeps_defaults() {
    let config = Config::from_toml("[server]\nversion = \"2017\"\n").unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, "10001");
    assert_eq!(config.server.version, "2017");
}

#[test]
fn test_invalid_config_is_error() {
    assert!(Config::from_toml("[server\nhost = ").is_err());
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[session]\nuser = \"reviewer\"\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.session.user, "reviewer");
}

#[test]
fn test_from_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::from_file(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_env_overrides() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("SQL_ADVISE_HOST", "10.9.9.9"),
        ("SQL_ADVISE_VERSION", "2022"),
        ("SQL_ADVISE_PASSWORD", "from-env")
    ]);
    let mut config = Config::default();

    config.apply_env(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.server.host, "10.9.9.9");
    assert_eq!(config.server.port, ServerConfig::default().port);
    assert_eq!(config.server.version, "2022");
    assert_eq!(config.session.password, "from-env");
}
