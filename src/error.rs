// SPDX-License-Identifier: MIT

//! Typed error handling for branching-rs
//!
//! Every fallible step between the embedded lesson document and the printed
//! transcript reports one of these.

use thiserror::Error;

/// Top-level error type for branching-rs
#[derive(Debug, Error)]
pub enum LessonError {
    /// The lesson document is not valid YAML or does not match the schema
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Writing the transcript failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A branch condition could not be parsed
    #[error("Invalid condition in block '{block}': {source}")]
    Condition {
        block: String,
        #[source]
        source: ConditionError,
    },

    /// A condition references a variable its block never binds
    #[error("Block '{block}' uses unbound variable '{name}'")]
    UnboundVariable { block: String, name: String },

    /// No block with the requested title
    #[error("Block '{0}' not found")]
    UnknownBlock(String),
}

/// Condition-language errors
#[derive(Debug, Error, PartialEq)]
pub enum ConditionError {
    /// Unexpected token or character
    #[error("Syntax error at offset {offset} in '{input}': {message}")]
    Syntax {
        input: String,
        offset: usize,
        message: String,
    },

    /// Input ended while more was expected
    #[error("Unexpected end of condition: '{0}'")]
    UnexpectedEnd(String),
}

impl LessonError {
    /// Wrap a condition error with the title of the block it came from
    pub fn condition(block: impl Into<String>, source: ConditionError) -> Self {
        Self::Condition {
            block: block.into(),
            source,
        }
    }

    /// Create an unbound variable error
    pub fn unbound(block: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnboundVariable {
            block: block.into(),
            name: name.into(),
        }
    }
}

impl ConditionError {
    pub(crate) fn syntax(input: &str, offset: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            input: input.to_string(),
            offset,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_message() {
        let err = LessonError::unbound("If-else", "age");
        assert_eq!(err.to_string(), "Block 'If-else' uses unbound variable 'age'");
    }

    #[test]
    fn test_condition_message_includes_block() {
        let err = LessonError::condition(
            "Elif chain",
            ConditionError::UnexpectedEnd("age <".into()),
        );
        assert_eq!(
            err.to_string(),
            "Invalid condition in block 'Elif chain': Unexpected end of condition: 'age <'"
        );
    }
}
