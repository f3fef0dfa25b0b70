use serde::Serialize;
use std::collections::BTreeMap;

pub const VALUE_PARAMETER: &str = "{{ value }}";

/// Longest value (in characters) shown verbatim in a diagnostic.
const MAX_DISPLAY_CHARS: usize = 50;

/// A single failed check: the message template plus its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub message_template: String,
    pub parameters: BTreeMap<String, String>,
}

impl Violation {
    pub fn new(message_template: &str, invalid_value: &str) -> Self {
        let mut parameters = BTreeMap::new();
        parameters.insert(VALUE_PARAMETER.to_string(), format_value(invalid_value));
        Self {
            message_template: message_template.to_string(),
            parameters,
        }
    }

    /// The display form of the offending value, as interpolated.
    pub fn invalid_value(&self) -> &str {
        self.parameters
            .get(VALUE_PARAMETER)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Renders the template with every parameter substituted.
    pub fn message(&self) -> String {
        self.parameters
            .iter()
            .fold(self.message_template.clone(), |message, (key, value)| {
                message.replace(key, value)
            })
    }
}

/// Quotes a value for display and shortens very long ones.
pub fn format_value(value: &str) -> String {
    if value.chars().count() > MAX_DISPLAY_CHARS {
        let head: String = value.chars().take(MAX_DISPLAY_CHARS).collect();
        format!("\"{head}...\"")
    } else {
        format!("\"{value}\"")
    }
}
