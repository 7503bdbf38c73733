use serde::{Deserialize, Serialize};

/// A numeric field that may arrive as a JSON number or as text (form bodies
/// only ever carry text). Parsing is deferred to validation so a bad value
/// becomes a field error instead of a body rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    /// `None` when the value is blank, `Some(Err(()))` when it isn't a number
    pub fn to_f64(&self) -> Option<Result<f64, ()>> {
        match self {
            NumberOrString::Number(n) => Some(Ok(*n)),
            NumberOrString::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else {
                    Some(s.parse::<f64>().ok().filter(|n| n.is_finite()).ok_or(()))
                }
            }
        }
    }
}

impl From<f64> for NumberOrString {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NumberOrString {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
