use std::fmt;

/// Which storage/database capability set the process runs against. Selected
/// once at startup; business logic never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Postgres and real object storage.
    Live,
    /// Process-local state for demos and tests; nothing is persisted.
    Memory,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Live => "Live",
            Backend::Memory => "Memory",
        }
    }
}

impl TryFrom<String> for Backend {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "memory" | "in-memory" => Ok(Self::Memory),
            other => Err(format!(
                "Invalid backend: {}. Expected: live or memory",
                other
            )),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
