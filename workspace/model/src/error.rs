use thiserror::Error;

/// Errors raised while building a component model from its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("a tab set needs at least one tab")]
    EmptyTabs,
    #[error("tab id '{0}' appears more than once")]
    DuplicateTab(&'static str),
    #[error("a navigation shell needs at least one registered page")]
    NoPages,
    #[error("point '{category}' has {found} values but the dataset declares {expected} series")]
    RaggedDataset {
        category: &'static str,
        expected: usize,
        found: usize,
    },
}

/// A selection request that was ignored because it named nothing selectable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown tab '{0}'")]
    UnknownTab(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' is not a known {kind}")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub input: String,
}

impl ParseIdError {
    pub fn new(kind: &'static str, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}
