//! Configuration constants.
//!
//! This module defines the constants used as defaults throughout the service,
//! including DNS timeouts, concurrency limits and report text limits.

/// Default address the HTTP server binds to
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8001;

// DNS lookups
/// DNS query timeout in seconds
/// Most DNS queries complete in <1s, 3s provides good buffer while failing fast
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Attempts the resolver makes per query before giving up
pub const DNS_ATTEMPTS: usize = 2;
/// Slack added to `timeout * attempts` for the outer bound on one lookup
pub const LOOKUP_TIMEOUT_MARGIN_MS: u64 = 500;
/// Maximum number of DKIM selector lookups in flight for a single check
pub const DKIM_CONCURRENCY: usize = 8;

/// Whole-request timeout in seconds, applied by the HTTP layer
/// Must exceed the worst-case check duration for the default DNS settings
/// (6.5s lookups, 8 concurrent DKIM lookups: about 41s with headroom)
pub const REQUEST_TIMEOUT_SECS: u64 = 45;

// Report text limits
/// Characters of an SPF or DMARC record shown in a check result
pub const POLICY_RECORD_EXCERPT_CHARS: usize = 50;
/// Characters of a DKIM record shown in a check result
pub const DKIM_RECORD_EXCERPT_CHARS: usize = 100;
/// Maximum error message length in characters embedded in a check result
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;

/// Maximum length of a domain name (RFC 1035)
pub const MAX_DOMAIN_LENGTH: usize = 253;

// Validation
pub const URL_SCHEME_PATTERN: &str = r"(?i)^https?://";

// Upper bounds accepted by `Config::validate`
pub const MAX_DNS_TIMEOUT_SECS: u64 = 60;
pub const MAX_DNS_ATTEMPTS: usize = 5;
pub const MAX_DKIM_CONCURRENCY: usize = 64;
