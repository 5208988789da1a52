//! # IP Origin Heuristics
//!
//! Substring heuristics that place an operation's originating address in
//! the UK or the UK/EEA region. These are not geolocation: a private or
//! loopback address counts as UK (internal infrastructure is assumed to be
//! UK-hosted), and a hostname-style address counts by its country suffix.
//! Callers treat an empty address as "no evidence" and skip the check.

/// Prefixes of private and loopback addresses treated as UK-hosted.
pub const UK_LOCAL_PREFIXES: &[&str] = &["192.168.", "10.", "172.", "::1", "127.0.0.1"];

/// Marker identifying a UK hostname.
pub const UK_MARKER: &str = ".uk";

/// Markers identifying EEA hostnames.
pub const EEA_MARKERS: &[&str] = &[".de", ".fr", ".nl", ".it", ".es", ".eu"];

/// Whether `ip` looks like a UK origin.
pub fn is_uk_ip_address(ip: &str) -> bool {
    UK_LOCAL_PREFIXES.iter().any(|prefix| ip.starts_with(prefix)) || ip.contains(UK_MARKER)
}

/// Whether `ip` looks like a UK or EEA origin.
pub fn is_uk_or_eea_ip_address(ip: &str) -> bool {
    is_uk_ip_address(ip) || EEA_MARKERS.iter().any(|marker| ip.contains(marker))
}
