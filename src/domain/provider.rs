use std::fmt;
use std::str::FromStr;

/// External provider a stored credential belongs to. One OpenAI key serves
/// both transcription and completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    OpenAi,
    Gemini,
    Groq,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Gemini => "gemini",
            Provider::Groq => "groq",
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(Provider::OpenAi),
            "gemini" => Ok(Provider::Gemini),
            "groq" => Ok(Provider::Groq),
            other => Err(format!("Unknown provider: {}", other)),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Speech-to-text backend selectable for a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeechProvider {
    OpenAi,
    Groq,
}

impl SpeechProvider {
    /// The credential a run must hold to select this backend. Groq requires
    /// its own key even though transcription is routed through OpenAI.
    pub fn credential_provider(&self) -> Provider {
        match self {
            SpeechProvider::OpenAi => Provider::OpenAi,
            SpeechProvider::Groq => Provider::Groq,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeechProvider::OpenAi => "openai",
            SpeechProvider::Groq => "groq",
        }
    }
}

impl FromStr for SpeechProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(SpeechProvider::OpenAi),
            "groq" => Ok(SpeechProvider::Groq),
            other => Err(format!("Unknown speech provider: {}", other)),
        }
    }
}

impl fmt::Display for SpeechProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Text-generation backend selectable for a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextProvider {
    OpenAi,
    Gemini,
    Groq,
}

impl TextProvider {
    pub fn credential_provider(&self) -> Provider {
        match self {
            TextProvider::OpenAi => Provider::OpenAi,
            TextProvider::Gemini => Provider::Gemini,
            TextProvider::Groq => Provider::Groq,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextProvider::OpenAi => "openai",
            TextProvider::Gemini => "gemini",
            TextProvider::Groq => "groq",
        }
    }
}

impl FromStr for TextProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(TextProvider::OpenAi),
            "gemini" => Ok(TextProvider::Gemini),
            "groq" => Ok(TextProvider::Groq),
            other => Err(format!("Unknown text provider: {}", other)),
        }
    }
}

impl fmt::Display for TextProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
