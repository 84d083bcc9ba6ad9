use docroot::config::Config;
use std::collections::HashMap;
use std::path::Path;

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let cfg = Config::from_lookup(None, env(&[])).unwrap();

    assert_eq!(cfg.listen_addr, "localhost:8080");
    assert_eq!(cfg.document_root, Path::new("www"));
}

#[test]
fn test_config_env_overrides() {
    let cfg = Config::from_lookup(
        None,
        env(&[("LISTEN", "0.0.0.0:3000"), ("DOCUMENT_ROOT", "/srv/site")]),
    )
    .unwrap();

    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.document_root, Path::new("/srv/site"));
}

#[test]
fn test_config_yaml_partial() {
    let cfg = Config::from_yaml_str("document_root: public\n").unwrap();

    assert_eq!(cfg.listen_addr, "localhost:8080");
    assert_eq!(cfg.document_root, Path::new("public"));
}

#[test]
fn test_config_yaml_invalid() {
    assert!(Config::from_yaml_str("listen_addr: [1, 2").is_err());
}

#[test]
fn test_config_file_then_env() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("docroot.yaml");
    std::fs::write(&file, "listen_addr: 127.0.0.1:9000\ndocument_root: site\n").unwrap();

    let cfg = Config::from_lookup(Some(file.as_path()), env(&[("LISTEN", "127.0.0.1:9001")])).unwrap();

    assert_eq!(cfg.listen_addr, "127.0.0.1:9001");
    assert_eq!(cfg.document_root, Path::new("site"));
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.yaml");

    assert!(Config::from_lookup(Some(missing.as_path()), env(&[])).is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
    assert_eq!(cfg1.document_root, cfg2.document_root);
}
