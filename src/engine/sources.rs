use serde::Serialize;

/// Why an argument could not be resolved to a literal or a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedSource {
    /// Symbol with no statically known definition.
    IdentifierNotFound,
    /// Expression the front-end could not model.
    RuntimeValue,
    /// Symbol chain longer than the resolver's depth bound.
    DepthExceeded,
    NotImplemented,
}

impl UnresolvedSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdentifierNotFound => "identifier_not_found",
            Self::RuntimeValue => "runtime_value",
            Self::DepthExceeded => "depth_exceeded",
            Self::NotImplemented => "not_implemented",
        }
    }
}

impl std::fmt::Display for UnresolvedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_as_str() {
        assert_eq!(
            UnresolvedSource::IdentifierNotFound.as_str(),
            "identifier_not_found"
        );
        assert_eq!(UnresolvedSource::DepthExceeded.as_str(), "depth_exceeded");
    }

    #[test]
    fn test_source_display() {
        assert_eq!(format!("{}", UnresolvedSource::RuntimeValue), "runtime_value");
    }
}
