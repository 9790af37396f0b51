//! DNS record extraction utilities.
//!
//! This module provides functions to pick SPF, DMARC and DKIM records out of
//! TXT record collections.

/// Removes one pair of surrounding double quotes and outer whitespace.
///
/// Some resolvers and zone tools render TXT data quoted (`"v=spf1 -all"`).
pub fn strip_quotes(record: &str) -> &str {
    let trimmed = record.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    trimmed.strip_suffix('"').unwrap_or(trimmed)
}

/// Extracts SPF record from TXT records.
///
/// SPF records start with "v=spf1".
///
/// # Returns
///
/// The first SPF record found, or `None` if no SPF record exists.
pub fn extract_spf_record(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .map(|txt| strip_quotes(txt))
        .find(|txt| txt.starts_with("v=spf1"))
        .map(str::to_string)
}

/// Extracts DMARC record from TXT records.
///
/// DMARC records live at `_dmarc.<domain>` and start with "v=DMARC1".
///
/// # Returns
///
/// The first DMARC record found, or `None` if no DMARC record exists.
pub fn extract_dmarc_record(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .map(|txt| strip_quotes(txt))
        .find(|txt| txt.starts_with("v=DMARC1"))
        .map(str::to_string)
}

/// Extracts a DKIM key record from TXT records at a selector name.
///
/// Any record carrying a public key tag (`p=`) counts; the key itself is not
/// parsed or verified.
pub fn extract_dkim_record(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .map(|txt| strip_quotes(txt))
        .find(|txt| txt.contains("p="))
        .map(str::to_string)
}
