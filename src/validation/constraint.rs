use serde::Deserialize;

pub const DEFAULT_MESSAGE: &str = "This value is not a valid email address.";

/// Options for the DoH domain check.
///
/// When both flags are set the MX check is the one that runs; the A-record
/// check is the fallback for constraints that turn MX off.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmailByDoh {
    pub message: String,
    pub check_mx: bool,
    pub check_host: bool,
}

impl Default for EmailByDoh {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            check_mx: true,
            check_host: true,
        }
    }
}

impl EmailByDoh {
    pub fn mx_only() -> Self {
        Self {
            check_host: false,
            ..Self::default()
        }
    }

    pub fn host_only() -> Self {
        Self {
            check_mx: false,
            ..Self::default()
        }
    }
}
