use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Texture,
    Sound,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Texture => write!(f, "texture"),
            Self::Sound => write!(f, "sound"),
        }
    }
}

/// A texture or sound that could not be loaded. Fatal at startup.
#[derive(Debug)]
pub struct AssetLoadError {
    pub kind: AssetKind,
    pub path: String,
    pub reason: String,
}

impl AssetLoadError {
    pub fn new(kind: AssetKind, path: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self {
            kind,
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to load {} '{}': {}",
            self.kind, self.path, self.reason
        )
    }
}

impl std::error::Error for AssetLoadError {}

/// The pickup coordinate file is missing or does not hold exactly ten
/// `x y` pairs.
#[derive(Debug)]
pub enum ConfigDataError {
    Io { path: PathBuf, source: io::Error },
    InvalidNumber { index: usize, token: String },
    TooFewValues { expected: usize, found: usize },
    TrailingData { token: String },
}

impl fmt::Display for ConfigDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::InvalidNumber { index, token } => {
                write!(f, "value #{index} is not a number: '{token}'")
            }
            Self::TooFewValues { expected, found } => {
                write!(f, "expected {expected} values, found only {found}")
            }
            Self::TrailingData { token } => {
                write!(f, "unexpected data after the last pair: '{token}'")
            }
        }
    }
}

impl std::error::Error for ConfigDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
