//! Signature records for AutoIt functions.
//!
//! These are documentation-only descriptions used for hover text, completion
//! entries and signature help. Nothing here is checked against user code.

use serde::Deserialize;

/// One parameter of a function signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Parameter {
    /// Parameter token as it appears in the label (e.g., "$iNum1")
    pub label: String,
    /// Markdown description
    pub documentation: String,
    /// Whether callers may omit the parameter
    pub optional: bool,
    /// Value used when the parameter is omitted
    pub default: Option<String>,
}

impl Parameter {
    /// A required parameter.
    pub fn new(label: impl Into<String>, documentation: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            documentation: documentation.into(),
            optional: false,
            default: None,
        }
    }

    /// An optional parameter without a documented default.
    pub fn optional(label: impl Into<String>, documentation: impl Into<String>) -> Self {
        Self {
            optional: true,
            ..Self::new(label, documentation)
        }
    }

    /// Record the value used when the parameter is omitted. Implies optional.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.optional = true;
        self.default = Some(value.into());
        self
    }

    /// Optional when flagged so or when a default value is documented.
    pub fn is_optional(&self) -> bool {
        self.optional || self.default.is_some()
    }
}

/// Call signature and documentation of one function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FunctionSignature {
    /// Lookup key (e.g., "_Max")
    pub name: String,
    /// Full call syntax (e.g., "_Max ( $iNum1, $iNum2 )")
    #[serde(default)]
    pub label: String,
    /// One-line summary
    #[serde(default)]
    pub documentation: String,
    /// Return value description
    #[serde(default)]
    pub returns: Option<String>,
    /// Parameters in declaration order
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl FunctionSignature {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        documentation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            documentation: documentation.into(),
            returns: None,
            parameters: Vec::new(),
        }
    }

    pub fn returns(mut self, returns: impl Into<String>) -> Self {
        self.returns = Some(returns.into());
        self
    }

    pub fn param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Number of parameters a caller must pass.
    pub fn required_count(&self) -> usize {
        self.parameters.iter().filter(|p| !p.is_optional()).count()
    }
}
