use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |var| vars.get(var).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST, port: DEFAULT_PORT, site_root: None });
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_reads_all_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        (HOST_VAR, "127.0.0.1"),
        (PORT_VAR, " 8080 "),
        (SITE_ROOT_VAR, "/srv/newsdesk/site"),
    ]))
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/newsdesk/site")));
}

#[test]
fn from_lookup_treats_blank_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "   "), (SITE_ROOT_VAR, "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "eighty")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn from_lookup_rejects_bad_host() {
    let err = ServerConfig::from_lookup(lookup(&[(HOST_VAR, "not-an-ip")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidSetting { var: HOST_VAR, .. }));
}

#[test]
fn from_env_reads_process_environment() {
    // Only the variable this test owns is touched.
    unsafe { std::env::set_var(SITE_ROOT_VAR, "/tmp/newsdesk-config-test") };
    let cfg = ServerConfig::from_env().unwrap();
    unsafe { std::env::remove_var(SITE_ROOT_VAR) };
    assert_eq!(cfg.site_root, Some(PathBuf::from("/tmp/newsdesk-config-test")));
}
