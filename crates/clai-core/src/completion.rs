use crate::error::BoxError;
use crate::transcript::Turn;
use std::fmt;

/// Token counts reported by the service. Any of them may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub total: Option<u64>,
    pub prompt: Option<u64>,
    pub completion: Option<u64>,
}

impl fmt::Display for TokenUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "prompt:{}, completion:{}, total:{}",
            Count(self.prompt),
            Count(self.completion),
            Count(self.total)
        )
    }
}

struct Count(Option<u64>);

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{n}"),
            None => f.write_str("unknown"),
        }
    }
}

/// A successful reply from the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub reply: String,
    pub usage: TokenUsage,
}

/// The remote model. Implementations send the whole turn sequence and block
/// until a reply or an error comes back; they do not retry.
pub trait Completer {
    fn complete(&self, model: &str, turns: &[Turn]) -> Result<Completion, BoxError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_display() {
        let usage = TokenUsage {
            total: Some(10),
            prompt: Some(6),
            completion: Some(4),
        };
        assert_eq!(usage.to_string(), "prompt:6, completion:4, total:10");
    }

    #[test]
    fn unknown_counts() {
        let usage = TokenUsage {
            total: Some(7),
            ..Default::default()
        };
        assert_eq!(
            usage.to_string(),
            "prompt:unknown, completion:unknown, total:7"
        );
    }
}
