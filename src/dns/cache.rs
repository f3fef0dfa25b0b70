use super::record_type::RecordType;
use super::response::DnsAnswer;
use crate::error::LookupError;
use log::debug;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Records seen for one host, keyed by type code. Last answer of a type wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRecordSet {
    records: HashMap<u16, DnsAnswer>,
}

impl HostRecordSet {
    pub fn from_answers(answers: impl IntoIterator<Item = DnsAnswer>) -> Self {
        let mut set = Self::default();
        for answer in answers {
            set.records.insert(answer.record_type, answer);
        }
        set
    }

    pub fn contains(&self, record_type: RecordType) -> bool {
        self.records.contains_key(&record_type.code())
    }

    pub fn get(&self, record_type: RecordType) -> Option<&DnsAnswer> {
        self.records.get(&record_type.code())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Per-pass memo of DoH results, keyed by the host string as queried.
///
/// Never evicts and ignores TTLs; drop it together with the validator that
/// owns it.
#[derive(Debug, Default)]
pub struct RecordCache {
    hosts: HashMap<String, HostRecordSet>,
}

impl RecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, host: &str) -> Option<&HostRecordSet> {
        self.hosts.get(host)
    }

    pub fn contains_host(&self, host: &str) -> bool {
        self.hosts.contains_key(host)
    }

    /// Returns the record set for `host`, running `fetch` only on a miss.
    ///
    /// A failing `fetch` leaves the cache untouched so a later call can try
    /// again.
    pub fn get_or_try_insert_with<F>(
        &mut self,
        host: &str,
        fetch: F,
    ) -> Result<&HostRecordSet, LookupError>
    where
        F: FnOnce() -> Result<Vec<DnsAnswer>, LookupError>,
    {
        match self.hosts.entry(host.to_string()) {
            Entry::Occupied(entry) => {
                debug!("Record cache hit for {host}");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let answers = fetch()?;
                Ok(entry.insert(HostRecordSet::from_answers(answers)))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
