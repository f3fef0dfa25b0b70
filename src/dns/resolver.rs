use super::cache::{HostRecordSet, RecordCache};
use super::record_type::RecordType;
use super::transport::DohTransport;
use crate::error::LookupError;
use log::{debug, warn};
use std::sync::Arc;

/// Answers "does `host` have a record of type T" through a DoH provider.
///
/// Each resolver owns its own [`RecordCache`], so one resolver is one
/// validation pass: a host is fetched at most once (successful fetches only)
/// no matter how many record types are asked about afterwards.
pub struct DohResolver {
    transport: Arc<dyn DohTransport>,
    cache: RecordCache,
}

impl DohResolver {
    pub fn new(transport: Arc<dyn DohTransport>) -> Self {
        Self {
            transport,
            cache: RecordCache::new(),
        }
    }

    /// Returns whether `host` has a record with the given type code.
    ///
    /// Total over its inputs: unknown type codes, blank hosts and every
    /// lookup failure all answer `false`. The first two never touch the
    /// network.
    pub fn exists(&mut self, host: &str, type_code: u16) -> bool {
        let Some(record_type) = RecordType::from_code(type_code) else {
            debug!("Ignoring lookup for unsupported record type {type_code}");
            return false;
        };

        if host.trim().is_empty() {
            return false;
        }

        match self.lookup(host) {
            Ok(records) => records.contains(record_type),
            Err(e) => {
                warn!("DoH lookup for {host} ({record_type}) failed: {e}");
                false
            }
        }
    }

    pub fn check_mx(&mut self, host: &str) -> bool {
        self.exists(host, RecordType::MX.code())
    }

    pub fn check_host(&mut self, host: &str) -> bool {
        self.exists(host, RecordType::A.code())
    }

    /// Fetches (or recalls) every record the resolver returns for `host`.
    pub fn lookup(&mut self, host: &str) -> Result<&HostRecordSet, LookupError> {
        let transport = &self.transport;
        self.cache.get_or_try_insert_with(host, || {
            let answers = transport.query(host)?.into_answers()?;
            debug!("DoH returned {} answers for {host}", answers.len());
            Ok(answers)
        })
    }

    pub fn cache(&self) -> &RecordCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::response::DohResponse;
    use crate::dns::transport::MockDohTransport;
    use serde_json::json;

    fn response(value: serde_json::Value) -> DohResponse {
        serde_json::from_value(value).unwrap()
    }

    fn gmail_like() -> DohResponse {
        response(json!({
            "Status": 0,
            "Answer": [
                { "name": "gmail.com.", "type": 1, "TTL": 300, "data": "142.250.196.101" },
                { "name": "gmail.com.", "type": 15, "TTL": 3600, "data": "5 gmail-smtp-in.l.google.com." },
                { "name": "gmail.com.", "type": 16, "TTL": 300, "data": "\"v=spf1 redirect=_spf.google.com\"" }
            ]
        }))
    }

    fn nxdomain() -> DohResponse {
        response(json!({
            "Status": 3,
            "Question": [{ "name": "x1hirotae.com.", "type": 255 }],
            "Authority": []
        }))
    }

    fn resolver_with(mock: MockDohTransport) -> DohResolver {
        DohResolver::new(Arc::new(mock))
    }

    #[test]
    fn test_mx_present() {
        let mut mock = MockDohTransport::new();
        mock.expect_query()
            .withf(|host| host == "gmail.com")
            .times(1)
            .returning(|_| Ok(gmail_like()));

        let mut resolver = resolver_with(mock);
        assert!(resolver.check_mx("gmail.com"));
    }

    #[test]
    fn test_nonexistent_domain_has_no_records() {
        let mut mock = MockDohTransport::new();
        // NXDOMAIN is not cached, so each type asks again
        mock.expect_query()
            .times(RecordType::ALL.len())
            .returning(|_| Ok(nxdomain()));

        let mut resolver = resolver_with(mock);
        for record_type in RecordType::ALL {
            assert!(!resolver.exists("x1hirotae.com", record_type.code()));
        }
        assert!(resolver.cache().is_empty());
    }

    #[test]
    fn test_one_network_call_per_host() {
        let mut mock = MockDohTransport::new();
        mock.expect_query()
            .times(1)
            .returning(|_| Ok(gmail_like()));

        let mut resolver = resolver_with(mock);
        assert!(resolver.check_mx("gmail.com"));
        assert!(resolver.check_host("gmail.com"));
        assert!(resolver.exists("gmail.com", RecordType::TXT.code()));
        assert!(!resolver.exists("gmail.com", RecordType::SOA.code()));
        assert!(!resolver.exists("gmail.com", RecordType::NS.code()));
        assert_eq!(resolver.cache().len(), 1);
    }

    #[test]
    fn test_distinct_hosts_are_fetched_separately() {
        let mut mock = MockDohTransport::new();
        mock.expect_query()
            .withf(|host| host == "gmail.com")
            .times(1)
            .returning(|_| Ok(gmail_like()));
        mock.expect_query()
            .withf(|host| host == "a-only.example")
            .times(1)
            .returning(|_| {
                Ok(response(json!({
                    "Status": 0,
                    "Answer": [{ "name": "a-only.example.", "type": 1, "data": "192.0.2.7" }]
                })))
            });

        let mut resolver = resolver_with(mock);
        assert!(resolver.check_mx("gmail.com"));
        assert!(!resolver.check_mx("a-only.example"));
        assert!(resolver.check_host("a-only.example"));
        assert_eq!(resolver.cache().len(), 2);
    }

    #[test]
    fn test_unrecognized_type_skips_network() {
        let mut mock = MockDohTransport::new();
        mock.expect_query().never();

        let mut resolver = resolver_with(mock);
        assert!(!resolver.exists("gmail.com", 99));
        assert!(!resolver.exists("gmail.com", 28));
        assert!(!resolver.exists("gmail.com", 255));
    }

    #[test]
    fn test_blank_host_skips_network() {
        let mut mock = MockDohTransport::new();
        mock.expect_query().never();

        let mut resolver = resolver_with(mock);
        for record_type in RecordType::ALL {
            assert!(!resolver.exists("", record_type.code()));
            assert!(!resolver.exists("   ", record_type.code()));
            assert!(!resolver.exists("\t\n", record_type.code()));
        }
    }

    #[test]
    fn test_http_failure_is_not_cached_and_can_recover() {
        let mut mock = MockDohTransport::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_query()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(LookupError::HttpStatus(500)));
        mock.expect_query()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(gmail_like()));

        let mut resolver = resolver_with(mock);
        assert!(!resolver.check_mx("gmail.com"));
        assert!(!resolver.cache().contains_host("gmail.com"));

        assert!(resolver.check_mx("gmail.com"));
        assert!(resolver.cache().contains_host("gmail.com"));
    }

    #[test]
    fn test_transport_and_decode_errors_answer_false() {
        let mut mock = MockDohTransport::new();
        mock.expect_query()
            .withf(|host| host == "timeout.example")
            .returning(|_| Err(LookupError::Transport("operation timed out".to_string())));
        mock.expect_query()
            .withf(|host| host == "garbage.example")
            .returning(|_| Err(LookupError::Decode("expected value".to_string())));

        let mut resolver = resolver_with(mock);
        assert!(!resolver.check_host("timeout.example"));
        assert!(!resolver.check_host("garbage.example"));
        assert!(resolver.cache().is_empty());
    }

    #[test]
    fn test_missing_answer_section_answers_false() {
        let mut mock = MockDohTransport::new();
        mock.expect_query()
            .times(2)
            .returning(|_| Ok(response(json!({ "Status": 0, "Answer": { "type": 15 } }))));

        let mut resolver = resolver_with(mock);
        assert!(!resolver.check_mx("odd.example"));
        assert!(!resolver.check_mx("odd.example"));
        assert!(resolver.cache().is_empty());
    }

    #[test]
    fn test_empty_answer_is_cached() {
        let mut mock = MockDohTransport::new();
        mock.expect_query()
            .times(1)
            .returning(|_| Ok(response(json!({ "Status": 0, "Answer": [] }))));

        let mut resolver = resolver_with(mock);
        assert!(!resolver.check_mx("quiet.example"));
        assert!(!resolver.check_host("quiet.example"));
        assert!(resolver.cache().contains_host("quiet.example"));
    }

    #[test]
    fn test_host_is_queried_untrimmed() {
        let mut mock = MockDohTransport::new();
        mock.expect_query()
            .withf(|host| host == " gmail.com")
            .times(1)
            .returning(|_| Ok(gmail_like()));

        let mut resolver = resolver_with(mock);
        assert!(resolver.check_mx(" gmail.com"));
    }

    #[test]
    fn test_lookup_exposes_failure_cause() {
        let mut mock = MockDohTransport::new();
        mock.expect_query().returning(|_| Ok(nxdomain()));

        let mut resolver = resolver_with(mock);
        let err = resolver.lookup("x1hirotae.com").unwrap_err();
        assert!(matches!(err, LookupError::DnsStatus(3)));
    }
}
