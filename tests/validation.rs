//! Address and hostname syntax, and -a argument ordering.

use hostsedit::error::HostsError;
use hostsedit::validate;
use std::net::Ipv4Addr;

#[test]
fn valid_addresses_pass() {
    for a in ["0.0.0.0", "127.0.0.1", "10.20.30.40", "255.255.255.255", "93.184.216.34"] {
        validate::validate_address(a).unwrap();
    }
}

#[test]
fn invalid_addresses_fail() {
    for a in ["256.0.0.1", "1.2.3", "1.2.3.4.5", "a.b.c.d", "01.2.3.4", "1.2.3.-4", "", " 1.2.3.4"] {
        let err = validate::validate_address(a).unwrap_err();
        assert!(matches!(err, HostsError::InvalidArgument(_)), "{a:?} should be rejected");
    }
}

#[test]
fn valid_hostnames_pass() {
    for h in ["localhost", "a", "api.test", "my-host.example.com", "x1.y2.z3", "1.2.3.4"] {
        validate::validate_hostname(h).unwrap();
    }
}

#[test]
fn invalid_hostnames_fail() {
    for h in ["", ".", "bad..domain", "-lead.test", "trail-.test", "a.-b", "under_score.test", "sp ace", "dot."] {
        assert!(validate::validate_hostname(h).is_err(), "{h:?} should be rejected");
    }
}

#[test]
fn hyphen_message_mentions_hyphen() {
    let err = validate::validate_hostname("-x.test").unwrap_err();
    assert!(err.to_string().contains("hyphen"));
}

#[test]
fn single_value_uses_default_address() {
    let values = vec!["api.test".to_string()];
    let (addr, host) = validate::resolve_add_args(&values, Ipv4Addr::new(10, 0, 0, 9)).unwrap();
    assert_eq!(addr, Ipv4Addr::new(10, 0, 0, 9));
    assert_eq!(host, "api.test");
}

#[test]
fn two_values_accept_either_order() {
    let default = Ipv4Addr::LOCALHOST;
    let a = vec!["93.184.216.34".to_string(), "example.com".to_string()];
    let b = vec!["example.com".to_string(), "93.184.216.34".to_string()];
    let expected = (Ipv4Addr::new(93, 184, 216, 34), "example.com");
    assert_eq!(validate::resolve_add_args(&a, default).unwrap(), expected);
    assert_eq!(validate::resolve_add_args(&b, default).unwrap(), expected);
}

#[test]
fn two_values_without_address_fail() {
    let values = vec!["one.test".to_string(), "two.test".to_string()];
    let err = validate::resolve_add_args(&values, Ipv4Addr::LOCALHOST).unwrap_err();
    assert!(err.to_string().contains("IP address"));
}
