use super::*;

fn site() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

#[test]
fn missing_port_uses_site_addr() {
    let config = Config::from_port_var(None).unwrap();
    assert_eq!(config.port, None);
    assert_eq!(config.bind_addr(site()), site());
}

#[test]
fn blank_port_is_treated_as_missing() {
    let config = Config::from_port_var(Some("  ")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn port_override_binds_all_interfaces() {
    let config = Config::from_port_var(Some("8080")).unwrap();
    assert_eq!(config.port, Some(8080));
    assert_eq!(config.bind_addr(site()), "0.0.0.0:8080".parse().unwrap());
}

#[test]
fn invalid_port_is_an_error() {
    let err = Config::from_port_var(Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().starts_with("invalid PORT \"eighty\""));
}

#[test]
fn out_of_range_port_is_an_error() {
    assert!(Config::from_port_var(Some("70000")).is_err());
}
