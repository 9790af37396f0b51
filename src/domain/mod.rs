//! Domain normalization and validation.
//!
//! User input arrives in many shapes (`https://Example.com/`, `example.com`,
//! ` example.com `). `DomainName::parse` strips the scheme and trailing
//! slashes, lowercases, and validates the result against the hostname
//! grammar before any DNS lookup is made.
//!
//! Grammar: `label(.label)+`, each label 1-63 alphanumeric/hyphen characters
//! not starting or ending with a hyphen, final label alphabetic with at least
//! two characters.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::{MAX_DOMAIN_LENGTH, URL_SCHEME_PATTERN};
use crate::error_handling::ValidationError;

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_SCHEME_PATTERN).expect("scheme pattern is valid"));

static HOSTNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}$")
        .expect("hostname pattern is valid")
});

/// A normalized, validated domain name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DomainName(String);

impl DomainName {
    /// Normalizes and validates raw user input.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyDomain` if nothing is left after trimming
    /// - `ValidationError::DomainTooLong` if the name exceeds 253 characters
    /// - `ValidationError::InvalidDomain` if the name fails the hostname grammar
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyDomain);
        }

        let without_scheme = SCHEME_RE.replace(trimmed, "");
        let normalized = without_scheme.trim_end_matches('/').to_ascii_lowercase();

        if normalized.len() > MAX_DOMAIN_LENGTH {
            return Err(ValidationError::DomainTooLong(normalized.len()));
        }
        if !HOSTNAME_RE.is_match(&normalized) {
            return Err(ValidationError::InvalidDomain);
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the DKIM key record for `selector` under this domain.
    pub fn dkim_record_name(&self, selector: &str) -> String {
        format!("{selector}._domainkey.{}", self.0)
    }

    /// Name of the DMARC policy record for this domain.
    pub fn dmarc_record_name(&self) -> String {
        format!("_dmarc.{}", self.0)
    }
}

impl FromStr for DomainName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
