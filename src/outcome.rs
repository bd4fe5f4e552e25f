// src/outcome.rs
use serde::Serialize;

use crate::errors::Result;

/// Text shown before the first call completes.
pub const INITIAL_STATUS: &str = "Initialising...";

/// Result of one `connectedCBCNames` call. Every call produces exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    Success(Vec<String>),
    Failure(String),
}

impl Outcome {
    /// Collapses every error kind into a `Failure` carrying its message.
    pub fn from_result(result: Result<Vec<String>>) -> Self {
        match result {
            Ok(names) => Outcome::Success(names),
            Err(e) => Outcome::Failure(e.to_string()),
        }
    }

    pub fn status_text(&self) -> String {
        status_text(self)
    }
}

/// Status line for an outcome. Each name is followed by `", "`, including the last.
pub fn status_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success(names) => {
            let mut message = String::from("Result is ");
            for name in names {
                message.push_str(name);
                message.push_str(", ");
            }
            message
        }
        Outcome::Failure(why) => format!("Failed due to {}", why),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PanelError;

    #[test]
    fn test_success_keeps_trailing_separator() {
        let outcome = Outcome::Success(vec!["A".to_string(), "B".to_string()]);
        assert_eq!(outcome.status_text(), "Result is A, B, ");
    }

    #[test]
    fn test_empty_success() {
        assert_eq!(status_text(&Outcome::Success(vec![])), "Result is ");
    }

    #[test]
    fn test_failure() {
        assert_eq!(
            status_text(&Outcome::Failure("timeout".to_string())),
            "Failed due to timeout"
        );
    }

    #[test]
    fn test_from_result_uses_error_message() {
        let outcome = Outcome::from_result(Err(PanelError::Remote {
            code: -32000,
            message: "no boards".to_string(),
            data: None,
        }));
        assert_eq!(outcome, Outcome::Failure("Remote error -32000: no boards".to_string()));
    }
}
