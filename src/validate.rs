//! Hostname and address syntax checks.

use std::net::Ipv4Addr;

use crate::error::HostsError;

/// Validate hostname format: dot-separated labels of ASCII letters, digits
/// and hyphens, none empty, none starting or ending with a hyphen.
pub fn validate_hostname(hostname: &str) -> Result<(), HostsError> {
    let invalid = |why: &str| {
        Err(HostsError::InvalidArgument(format!(
            "Given hostname {hostname:?} does not seem to be valid: {why}"
        )))
    };
    if hostname.is_empty() {
        return invalid("empty hostname");
    }
    for label in hostname.split('.') {
        if label.is_empty() {
            return invalid("empty label");
        }
        if let Some(c) = label.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
            return invalid(&format!("illegal char {c:?}"));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return invalid("label cannot start/end with hyphen");
        }
    }
    Ok(())
}

/// Validate a dotted-quad IPv4 address. Octets must be 0-255 without
/// leading zeros.
pub fn validate_address(address: &str) -> Result<Ipv4Addr, HostsError> {
    // std rejects leading zeros and out-of-range octets already
    address.parse::<Ipv4Addr>().map_err(|_| {
        HostsError::InvalidArgument(format!("Given IP address {address:?} does not seem to be valid"))
    })
}

/// Split the one or two values given to `-a` into (address, hostname).
///
/// With a single value it is the hostname. With two, whichever value parses
/// as an address is the address; `<address> <hostname>` wins when both do.
pub fn resolve_add_args<'a>(values: &'a [String], default: Ipv4Addr) -> Result<(Ipv4Addr, &'a str), HostsError> {
    match values {
        [hostname] => {
            validate_hostname(hostname)?;
            Ok((default, hostname.as_str()))
        }
        [first, second] => {
            let (address, hostname) = if validate_address(first).is_ok() || validate_address(second).is_err() {
                (first, second)
            } else {
                (second, first)
            };
            let address = validate_address(address)?;
            validate_hostname(hostname)?;
            Ok((address, hostname.as_str()))
        }
        _ => Err(HostsError::InvalidArgument(
            "-a takes a hostname and an optional address".to_string(),
        )),
    }
}
