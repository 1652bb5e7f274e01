//! Variant table validation errors.

/// Error returned when a variant table is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// An axis default names a value the axis does not declare.
    #[error("axis '{axis}' defaults to '{value}', which is not one of its values")]
    UnknownDefault { axis: String, value: String },
    /// A default was given for an axis that does not exist.
    #[error("default given for unknown axis '{axis}'")]
    DefaultForUnknownAxis { axis: String },
    /// Two axes share a name.
    #[error("axis '{axis}' is declared more than once")]
    DuplicateAxis { axis: String },
    /// A compound variant refers to an axis the table does not declare.
    #[error("compound variant #{index} refers to unknown axis '{axis}'")]
    CompoundUnknownAxis { index: usize, axis: String },
    /// A compound variant refers to a value its axis does not declare.
    #[error("compound variant #{index} refers to unknown value '{value}' of axis '{axis}'")]
    CompoundUnknownValue {
        index: usize,
        axis: String,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_default_display() {
        let err = TableError::UnknownDefault {
            axis: "size".to_string(),
            value: "xl".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("size"));
        assert!(msg.contains("xl"));
    }

    #[test]
    fn test_compound_error_display() {
        let err = TableError::CompoundUnknownValue {
            index: 2,
            axis: "variant".to_string(),
            value: "ghost".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "compound variant #2 refers to unknown value 'ghost' of axis 'variant'"
        );
    }
}
