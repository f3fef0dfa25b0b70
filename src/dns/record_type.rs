use serde::{Deserialize, Serialize};
use std::fmt;

/// QTYPE requesting every record the resolver holds for a name.
pub const ANY_TYPE: u16 = 255;

/// DNS record types the validator knows how to ask about.
///
/// The discriminants are the IANA type codes, which is also what the
/// `type` field of a DoH JSON answer carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum RecordType {
    A = 1,
    NS = 3,
    SOA = 6,
    MX = 15,
    TXT = 16,
}

impl RecordType {
    pub const ALL: [RecordType; 5] = [
        RecordType::A,
        RecordType::NS,
        RecordType::SOA,
        RecordType::MX,
        RecordType::TXT,
    ];

    pub fn code(self) -> u16 {
        self as u16
    }

    /// Maps a raw type code back to a recognized record type.
    ///
    /// Anything outside the five supported codes yields `None`.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::SOA => "SOA",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
        };
        f.write_str(name)
    }
}

impl From<RecordType> for u16 {
    fn from(record_type: RecordType) -> Self {
        record_type.code()
    }
}
