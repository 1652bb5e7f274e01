//! Resolution errors reported under the strict policy.

/// A request that does not fit the table it was resolved against.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The selected value is not declared on the axis.
    #[error("unknown value '{value}' for axis '{axis}' (expected one of: {})", .expected.join(", "))]
    UnknownValue {
        axis: String,
        value: String,
        expected: Vec<String>,
    },
    /// The selected axis is not declared on the table.
    #[error("unknown axis '{axis}'")]
    UnknownAxis { axis: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_value_lists_expected() {
        let err = ResolveError::UnknownValue {
            axis: "size".to_string(),
            value: "xl".to_string(),
            expected: vec!["sm".to_string(), "default".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown value 'xl' for axis 'size' (expected one of: sm, default)"
        );
    }
}
