//! In-memory `DnsLookup` implementation.
//!
//! Answers come from tables filled in with the builder methods. Names without
//! an entry fail with `DnsError::NxDomain`, which is what a real resolver
//! reports for a name that does not exist. An optional per-name delay makes
//! lookup ordering and timeouts observable.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use super::DnsLookup;
use crate::error_handling::DnsError;

#[derive(Clone, Default)]
struct Tables {
    mx: HashMap<String, Vec<(u16, String)>>,
    txt: HashMap<String, Vec<String>>,
    ip: HashMap<String, Vec<IpAddr>>,
    failures: HashMap<String, DnsError>,
    delays: HashMap<String, Duration>,
}

/// Resolver that answers from fixed tables.
#[derive(Clone, Default)]
pub struct StaticResolver {
    tables: Arc<Tables>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables_mut(&mut self) -> &mut Tables {
        Arc::make_mut(&mut self.tables)
    }

    pub fn with_mx(mut self, domain: &str, preference: u16, exchange: &str) -> Self {
        self.tables_mut()
            .mx
            .entry(domain.to_string())
            .or_default()
            .push((preference, exchange.to_string()));
        self
    }

    pub fn with_txt(mut self, name: &str, record: &str) -> Self {
        self.tables_mut()
            .txt
            .entry(name.to_string())
            .or_default()
            .push(record.to_string());
        self
    }

    pub fn with_ip(mut self, host: &str, ip: IpAddr) -> Self {
        self.tables_mut()
            .ip
            .entry(host.to_string())
            .or_default()
            .push(ip);
        self
    }

    /// Makes every query for `name` fail with `error`.
    pub fn with_failure(mut self, name: &str, error: DnsError) -> Self {
        self.tables_mut().failures.insert(name.to_string(), error);
        self
    }

    /// Delays every answer for `name` by `delay`.
    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.tables_mut().delays.insert(name.to_string(), delay);
        self
    }

    async fn answer<T: Clone>(
        &self,
        name: &str,
        table: &HashMap<String, Vec<T>>,
    ) -> Result<Vec<T>, DnsError> {
        if let Some(delay) = self.tables.delays.get(name) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(error) = self.tables.failures.get(name) {
            return Err(error.clone());
        }
        match table.get(name) {
            Some(records) if !records.is_empty() => Ok(records.clone()),
            Some(_) => Err(DnsError::NoRecords(name.to_string())),
            None if self.knows(name) => Err(DnsError::NoRecords(name.to_string())),
            None => Err(DnsError::NxDomain(name.to_string())),
        }
    }

    /// Whether `name` has any record of any type.
    fn knows(&self, name: &str) -> bool {
        self.tables.mx.contains_key(name)
            || self.tables.txt.contains_key(name)
            || self.tables.ip.contains_key(name)
    }
}

impl DnsLookup for StaticResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<(u16, String)>, DnsError> {
        let mut records = self.answer(domain, &self.tables.mx).await?;
        records.sort_by_key(|(priority, _)| *priority);
        Ok(records)
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        self.answer(name, &self.tables.txt).await
    }

    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, DnsError> {
        self.answer(host, &self.tables.ip).await
    }
}
