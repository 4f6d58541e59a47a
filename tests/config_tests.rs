// Config loading and validation tests

use statuspage::config::AppConfig;

const VALID_CONFIG: &str = r#"
[server]
port = 8000
host = "0.0.0.0"

[status]
socket_path = "/tmp/watcher.sock"
response_content_type = "json"
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.status.socket_path, "/tmp/watcher.sock");
    assert_eq!(config.status.response_content_type.as_deref(), Some("json"));
}

#[test]
fn test_config_status_section_defaults() {
    let minimal = r#"
[server]
port = 8000
host = "127.0.0.1"
"#;
    let config = AppConfig::load_from_str(minimal).expect("valid");
    assert_eq!(config.status.socket_path, "/tmp/watcher.sock");
    assert!(config.status.response_content_type.is_none());
}

#[test]
fn test_config_content_type_defaults_when_omitted() {
    let no_format = VALID_CONFIG.replace("response_content_type = \"json\"\n", "");
    let config = AppConfig::load_from_str(&no_format).expect("valid");
    assert!(config.status.response_content_type.is_none());
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8000", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_socket_path() {
    let bad = VALID_CONFIG.replace("socket_path = \"/tmp/watcher.sock\"", "socket_path = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("status.socket_path"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.status.socket_path, "/tmp/watcher.sock");
}
