use crate::error::LookupError;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the `Answer` section of a JSON DoH response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsAnswer {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
    #[serde(rename = "TTL", default)]
    pub ttl: Option<u32>,
    #[serde(default)]
    pub data: String,
}

/// JSON DoH response body as served by `dns.google/resolve`.
///
/// ```json
/// {
///   "Status": 0, "TC": false, "RD": true, "RA": true, "AD": false, "CD": false,
///   "Question": [{ "name": "example.com.", "type": 255 }],
///   "Answer": [{ "name": "example.com.", "type": 15, "TTL": 1199, "data": "10 mx.example.com." }],
///   "Additional": [],
///   "Comment": "Response from 192.0.2.1."
/// }
/// ```
///
/// Only `Status` and `Answer` drive behaviour. `Answer` is kept as a raw
/// value so that a present-but-wrong-shape section can be told apart from a
/// body that is not JSON at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DohResponse {
    #[serde(rename = "Status", default)]
    pub status: Option<i64>,
    #[serde(rename = "TC", default)]
    pub truncated: bool,
    #[serde(rename = "RD", default)]
    pub recursion_desired: bool,
    #[serde(rename = "RA", default)]
    pub recursion_available: bool,
    #[serde(rename = "AD", default)]
    pub authenticated_data: bool,
    #[serde(rename = "CD", default)]
    pub checking_disabled: bool,
    #[serde(rename = "Question", default)]
    pub question: Value,
    #[serde(rename = "Answer", default)]
    pub answer: Option<Value>,
    #[serde(rename = "Additional", default)]
    pub additional: Value,
    #[serde(rename = "Comment", default)]
    pub comment: Option<String>,
}

impl DohResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, LookupError> {
        if body.is_empty() {
            return Err(LookupError::Decode("empty response body".to_string()));
        }
        serde_json::from_slice(body).map_err(|e| LookupError::Decode(e.to_string()))
    }

    /// Checks the DNS status and hands back the answer records.
    ///
    /// Entries without an integer `type` are dropped.
    pub fn into_answers(self) -> Result<Vec<DnsAnswer>, LookupError> {
        match self.status {
            // An absent status is not an error code; the answer decides
            None | Some(0) => {}
            Some(code) => return Err(LookupError::DnsStatus(code)),
        }

        let Some(Value::Array(items)) = self.answer else {
            return Err(LookupError::MissingAnswer);
        };

        let answers = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<DnsAnswer>(item) {
                Ok(answer) => Some(answer),
                Err(e) => {
                    debug!("Skipping malformed DoH answer entry: {e}");
                    None
                }
            })
            .collect();

        Ok(answers)
    }
}
