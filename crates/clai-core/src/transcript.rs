use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Turn
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Transcript
// ---------------------------------------------------------------------------

/// Ordered conversation turns. Serialized as a bare JSON array of
/// `{"role", "content"}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh transcript holding only the system instruction.
    pub fn seeded(system_message: &str) -> Self {
        Self {
            turns: vec![Turn::new(Role::System, system_message)],
        }
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.turns.push(Turn::new(role, content));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }
}

impl From<Vec<Turn>> for Transcript {
    fn from(turns: Vec<Turn>) -> Self {
        Self { turns }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_starts_with_system() {
        let t = Transcript::seeded("be brief");
        assert_eq!(t.len(), 1);
        assert_eq!(t.turns()[0], Turn::new(Role::System, "be brief"));
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut t = Transcript::seeded("s1");
        t.push(Role::User, "hello");
        let json = t.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"role": "system", "content": "s1"},
                {"role": "user", "content": "hello"}
            ])
        );
    }

    #[test]
    fn non_ascii_is_written_verbatim() {
        let t = Transcript::from(vec![Turn::new(Role::User, "naïve café — 日本語")]);
        let json = t.to_json().unwrap();
        assert!(json.contains("naïve café — 日本語"));
    }

    #[test]
    fn reads_files_written_by_older_clients() {
        let data = br#"[
  {
    "role": "system",
    "content": "You are a helpful assistant."
  },
  {
    "role": "user",
    "content": "hi"
  }
]"#;
        let t = Transcript::from_json(data).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.turns()[1].role, Role::User);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let data = br#"[{"role": "tool", "content": "x"}]"#;
        assert!(Transcript::from_json(data).is_err());
    }
}
