use shopfront::catalog::Item;
use shopfront::config::{Config, InvalidParameterPolicy, CONFIG_ENV, DEFAULT_LISTEN_ADDR, LISTEN_ENV};
use std::path::PathBuf;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.listen_addr, DEFAULT_LISTEN_ADDR);
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:8088");
    assert_eq!(cfg.server.read_timeout_secs, 30);
    assert!(!cfg.server.reason_phrase);
    assert_eq!(cfg.request_log.path, Some(PathBuf::from("server.log")));
    assert_eq!(cfg.catalog.seed.len(), 5);
    assert_eq!(cfg.invalid_parameter, InvalidParameterPolicy::BadRequest);
    assert!(cfg.pages.home.contains("Welcome to the Home Page"));
    assert!(cfg.pages.about.contains("About Page"));
}

#[test]
fn test_config_from_yaml_partial() {
    let cfg = Config::from_yaml(
        r#"
server:
  listen_addr: "127.0.0.1:9000"
invalid_parameter: close
"#,
    )
    .unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.server.read_timeout_secs, 30);
    assert_eq!(cfg.invalid_parameter, InvalidParameterPolicy::Close);
    assert_eq!(cfg.catalog.seed.len(), 5);
}

#[test]
fn test_config_from_yaml_full() {
    let cfg = Config::from_yaml(
        r#"
server:
  listen_addr: "0.0.0.0:3000"
  read_timeout_secs: 0
  reason_phrase: true
request_log:
  path: null
pages:
  home: "<p>hi</p>"
  about: "<p>me</p>"
catalog:
  seed:
    - name: Lamp
      price: 25
invalid_parameter: bad_request
"#,
    )
    .unwrap();

    assert!(cfg.server.reason_phrase);
    assert_eq!(cfg.server.read_timeout_secs, 0);
    assert_eq!(cfg.request_log.path, None);
    assert_eq!(cfg.pages.home, "<p>hi</p>");
    assert_eq!(cfg.pages.about, "<p>me</p>");
    assert_eq!(cfg.catalog.seed, vec![Item::new("Lamp", 25)]);
}

#[test]
fn test_config_rejects_negative_seed_price() {
    let result = Config::from_yaml(
        r#"
catalog:
  seed:
    - name: Broken
      price: -1
"#,
    );

    assert!(result.is_err());
}

#[test]
fn test_config_missing_file() {
    assert!(Config::from_file("/definitely/not/here.yaml").is_err());
}

// Environment variables are process-wide, so every env-dependent case
// lives in this one test.
#[test]
fn test_config_load_from_env() {
    let file = std::env::temp_dir().join(format!("shopfront-config-{}.yaml", std::process::id()));
    std::fs::write(&file, "server:\n  listen_addr: \"127.0.0.1:7000\"\n").unwrap();

    unsafe {
        std::env::remove_var(CONFIG_ENV);
        std::env::remove_var(LISTEN_ENV);
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, DEFAULT_LISTEN_ADDR);

    unsafe {
        std::env::set_var(CONFIG_ENV, &file);
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:7000");

    unsafe {
        std::env::set_var(LISTEN_ENV, "0.0.0.0:5000");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:5000");

    unsafe {
        std::env::remove_var(CONFIG_ENV);
        std::env::remove_var(LISTEN_ENV);
    }
    let _ = std::fs::remove_file(&file);
}
