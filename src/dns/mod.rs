//! DNS-over-HTTPS record checks.
//!
//! - [`DohResolver`]: boolean "record of type T exists" answers with a
//!   per-pass [`RecordCache`]
//! - [`DohTransport`]: the HTTP seam, [`ReqwestTransport`] in production
//! - [`DohResponse`]/[`DnsAnswer`]: the JSON wire format

pub mod cache;
pub mod record_type;
pub mod resolver;
pub mod response;
pub mod transport;

pub use cache::{HostRecordSet, RecordCache};
pub use record_type::{ANY_TYPE, RecordType};
pub use resolver::DohResolver;
pub use response::{DnsAnswer, DohResponse};
pub use transport::{DohTransport, ReqwestTransport};

#[cfg(test)]
pub use transport::MockDohTransport;
