use std::error::Error as StdError;
use std::fmt;

/// Type-erased failure from a collaborator (HTTP client, image store).
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// An error flattened into its source chain, outermost message first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub source: &'static str,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(source: &'static str, error: &dyn StdError) -> Self {
        let mut messages = vec![error.to_string()];
        let mut current = error.source();
        while let Some(inner) = current {
            let message = inner.to_string();
            if messages.last() != Some(&message) {
                messages.push(message);
            }
            current = inner.source();
        }
        Self { source, messages }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut messages = self.messages.iter();
        if let Some(first) = messages.next() {
            f.write_str(first)?;
        }
        for message in messages {
            write!(f, "\n  caused by: {message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::blocks::{CodecError, decode_blocks};

    #[test]
    fn report_walks_the_source_chain() {
        let err: CodecError = decode_blocks("{").expect_err("broken json");
        let report = ErrorReport::from_error("test", &err);
        assert!(report.messages[0].starts_with("failed to decode blocks"));
        assert!(report.to_string().contains("caused by"));
    }
}
