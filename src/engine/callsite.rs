//! Call-site abstraction supplied by the host front-end.
//!
//! The engine never sees a concrete syntax tree. A front-end lowers each
//! call expression into a `CallSite`: the statically known receiver type, the
//! method name, the argument expressions, the location, and the calls made
//! on the call's result (`follow_ups`).
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{InputError, IoError};
use crate::model::Location;

/// Method name used for constructor invocations.
pub const CONSTRUCTOR: &str = "<init>";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl Literal {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Str(s) => s.trim().parse().ok(),
            Self::Bool(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    Literal(Literal),
    /// A symbol the front-end traced to its defining expression. `definition`
    /// is `None` when the symbol could not be resolved statically.
    Symbol {
        name: String,
        #[serde(default)]
        definition: Option<Box<Expression>>,
    },
    Call(Box<CallSite>),
    /// Anything the front-end could not model (array creation, lambdas...).
    Opaque,
}

impl Expression {
    pub fn int(value: i64) -> Self {
        Self::Literal(Literal::Int(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::Str(value.into()))
    }

    pub fn symbol(name: impl Into<String>, definition: Expression) -> Self {
        Self::Symbol {
            name: name.into(),
            definition: Some(Box::new(definition)),
        }
    }

    pub fn unknown_symbol(name: impl Into<String>) -> Self {
        Self::Symbol {
            name: name.into(),
            definition: None,
        }
    }

    pub fn call(call: CallSite) -> Self {
        Self::Call(Box::new(call))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSite {
    pub receiver_type: String,
    pub method: String,
    #[serde(default)]
    pub arguments: Vec<Expression>,
    #[serde(default)]
    pub location: Location,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub follow_ups: Vec<CallSite>,
}

impl CallSite {
    pub fn new(receiver_type: impl Into<String>, method: impl Into<String>, location: Location) -> Self {
        Self {
            receiver_type: receiver_type.into(),
            method: method.into(),
            arguments: Vec::new(),
            location,
            follow_ups: Vec::new(),
        }
    }

    pub fn constructor(receiver_type: impl Into<String>, location: Location) -> Self {
        Self::new(receiver_type, CONSTRUCTOR, location)
    }

    pub fn with_argument(mut self, argument: Expression) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_follow_up(mut self, call: CallSite) -> Self {
        self.follow_ups.push(call);
        self
    }

    pub fn is_constructor(&self) -> bool {
        self.method == CONSTRUCTOR
    }

    pub fn full_name(&self) -> String {
        format!("{}.{}", self.receiver_type, self.method)
    }
}

/// One source file's worth of call sites, as dumped by a front-end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallSiteFile {
    pub file: String,
    #[serde(default)]
    pub calls: Vec<CallSite>,
}

impl CallSiteFile {
    pub fn load<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let parsed: Self = match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| InputError::parse_error(path, e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| InputError::parse_error(path, e.to_string()))?,
            _ => return Err(InputError::unsupported_format(extension).into()),
        };
        Ok(parsed)
    }
}
