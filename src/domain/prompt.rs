use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// The two fixed analysis types an operator can steer with a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    ServiceEvaluation,
    CustomerInsight,
}

impl PromptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKind::ServiceEvaluation => "service_evaluation",
            PromptKind::CustomerInsight => "customer_insight",
        }
    }
}

impl FromStr for PromptKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "service_evaluation" => Ok(PromptKind::ServiceEvaluation),
            "customer_insight" => Ok(PromptKind::CustomerInsight),
            other => Err(format!("Unknown prompt type: {}", other)),
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operator-edited instruction text for one analysis type. At most one active
/// template per kind; every pipeline run re-reads the latest text.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    pub kind: PromptKind,
    pub text: String,
    pub updated_at: DateTime<Utc>,
}

impl PromptTemplate {
    pub fn new(kind: PromptKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            updated_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
