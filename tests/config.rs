use cartui::config::Config;
use std::path::PathBuf;

#[test]
fn empty_file_means_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.tick_rate_ms, 50);
    assert!(config.mouse);
    assert!(config.log_file.is_none());
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let config: Config = toml::from_str("mouse = false").unwrap();
    assert!(!config.mouse);
    assert_eq!(config.tick_rate_ms, 50);
}

#[test]
fn full_file_parses() {
    let config: Config = toml::from_str(
        r#"
tick_rate_ms = 100
mouse = false
log_file = "/tmp/cartui-test.log"
"#,
    )
    .unwrap();
    assert_eq!(config.tick_rate_ms, 100);
    assert!(!config.mouse);
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/cartui-test.log")));
}
