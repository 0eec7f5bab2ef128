use std::fmt;

#[derive(Debug)]
pub enum PluckError {
    Note(NoteParseError),
    Config(ConfigError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NoteParseError {
    Empty,
    InvalidLetter { ch: char },
    InvalidOctave { text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyTuning,
    InvalidLayout { reason: String },
    Json(String),
}

impl fmt::Display for PluckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluckError::Note(e) => write!(f, "Note error: {e}"),
            PluckError::Config(e) => write!(f, "Config error: {e}"),
        }
    }
}

impl std::error::Error for PluckError {}

impl fmt::Display for NoteParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteParseError::Empty => write!(f, "Empty note name"),
            NoteParseError::InvalidLetter { ch } => write!(f, "Invalid note letter '{ch}'"),
            NoteParseError::InvalidOctave { text } => write!(f, "Invalid octave '{text}'"),
        }
    }
}

impl std::error::Error for NoteParseError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyTuning => write!(f, "Tuning must contain at least one string"),
            ConfigError::InvalidLayout { reason } => write!(f, "Invalid layout: {reason}"),
            ConfigError::Json(msg) => write!(f, "Malformed config JSON: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<NoteParseError> for PluckError {
    fn from(e: NoteParseError) -> Self {
        PluckError::Note(e)
    }
}

impl From<ConfigError> for PluckError {
    fn from(e: ConfigError) -> Self {
        PluckError::Config(e)
    }
}

impl From<serde_json::Error> for PluckError {
    fn from(e: serde_json::Error) -> Self {
        PluckError::Config(ConfigError::Json(e.to_string()))
    }
}
