// src/style/declaration.rs
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One inline CSS declaration, e.g. "color" => "red".
///
/// Both halves are kept verbatim. Nothing is validated or escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Declaration {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Writes the `property:value;` fragment used inside a `style` attribute.
impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{};", self.property, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationParseError {
    #[error("expected `property:value`, found '{0}'")]
    MissingColon(String),
    #[error("declaration '{0}' has an empty property name")]
    EmptyProperty(String),
}

/// Parses `property:value` as typed on a command line.
///
/// The split happens at the first `:` so values like `url(http://x)` survive.
/// A single trailing `;` on the value is dropped.
impl FromStr for Declaration {
    type Err = DeclarationParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (property, value) = input
            .split_once(':')
            .ok_or_else(|| DeclarationParseError::MissingColon(input.to_string()))?;

        let property = property.trim();
        if property.is_empty() {
            return Err(DeclarationParseError::EmptyProperty(input.to_string()));
        }

        let value = value.trim();
        let value = value.strip_suffix(';').unwrap_or(value).trim_end();

        Ok(Declaration::new(property, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_fragment() {
        let decl = Declaration::new("background-color", "yellow");
        assert_eq!(decl.to_string(), "background-color:yellow;");
    }

    #[test]
    fn test_display_keeps_empty_value() {
        assert_eq!(Declaration::new("color", "").to_string(), "color:;");
    }

    #[test]
    fn test_parse_trims_and_drops_semicolon() {
        let decl: Declaration = " padding-left : 10px; ".parse().unwrap();
        assert_eq!(decl, Declaration::new("padding-left", "10px"));
    }

    #[test]
    fn test_parse_splits_on_first_colon() {
        let decl: Declaration = "background-image:url(http://example.com/a.png)"
            .parse()
            .unwrap();
        assert_eq!(decl.property, "background-image");
        assert_eq!(decl.value, "url(http://example.com/a.png)");
    }

    #[test]
    fn test_parse_allows_empty_value() {
        let decl: Declaration = "color:".parse().unwrap();
        assert_eq!(decl, Declaration::new("color", ""));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "color red".parse::<Declaration>(),
            Err(DeclarationParseError::MissingColon("color red".to_string()))
        );
        assert_eq!(
            "  :red".parse::<Declaration>(),
            Err(DeclarationParseError::EmptyProperty("  :red".to_string()))
        );
    }

    #[test]
    fn test_parse_error_message_names_input() {
        let err = "nope".parse::<Declaration>().unwrap_err();
        assert!(err.to_string().contains("'nope'"));
    }
}
