use std::fmt;

use serde::{Deserialize, Serialize};

/// Ownership of an institution. Stored as open text; anything other than
/// the two known labels is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Ownership {
    Public,
    #[default]
    Private,
    Other(String),
}

impl Ownership {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Public => "Public",
            Self::Private => "Private",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for Ownership {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "public" => Self::Public,
            "private" => Self::Private,
            _ => Self::Other(s.to_owned()),
        }
    }
}

impl From<String> for Ownership {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Ownership> for String {
    fn from(o: Ownership) -> Self {
        match o {
            Ownership::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
