use serde::{Deserialize, Serialize};

/// Where a detection was made: the evidence carried by every node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: usize,
    pub column: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl Location {
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// The API family a detection came from. Default parameters are only ever
/// applied for the convention that documents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Convention {
    Jca,
    BouncyCastle,
    GoStdlib,
}

impl Convention {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jca => "Jca",
            Self::BouncyCastle => "BouncyCastle",
            Self::GoStdlib => "GoStdlib",
        }
    }

    pub const ALL: [Convention; 3] = [
        Convention::Jca,
        Convention::BouncyCastle,
        Convention::GoStdlib,
    ];
}

impl std::fmt::Display for Convention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
