//! Ordered collection of axes and compound variants.

use serde::{Deserialize, Serialize};

use super::axis::Axis;
use super::compound::CompoundVariant;
use super::error::TableError;
use super::ordered::{scalar_values, OrderedMap};

/// The axes of one styled element, in resolution order.
///
/// A table is authored once and never mutated afterwards; built-in tables
/// live in process-wide statics and are read concurrently without locking.
///
/// # Example
///
/// ```rust
/// use swatch::{Axis, VariantTable};
///
/// let table = VariantTable::new()
///     .axis(
///         Axis::new("size")
///             .value("sm", "h-3 w-3")
///             .value("default", "h-4 w-4")
///             .default_value("default"),
///     );
///
/// assert!(table.validate().is_ok());
/// assert!(table.get("size").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableDef", into = "TableDef")]
pub struct VariantTable {
    axes: Vec<Axis>,
    compounds: Vec<CompoundVariant>,
}

impl VariantTable {
    /// Creates a table with no axes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an axis, returning the updated table for chaining.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axes.push(axis);
        self
    }

    /// Appends a compound variant, returning the updated table for chaining.
    pub fn compound(mut self, compound: CompoundVariant) -> Self {
        self.compounds.push(compound);
        self
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn compounds(&self) -> &[CompoundVariant] {
        &self.compounds
    }

    /// Looks up an axis by name.
    pub fn get(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|axis| axis.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty() && self.compounds.is_empty()
    }

    /// Validates the table.
    ///
    /// Checks that every default names an existing value, that axis names
    /// are unique, and that compound conditions reference declared axes and
    /// values.
    pub fn validate(&self) -> Result<(), TableError> {
        for (i, axis) in self.axes.iter().enumerate() {
            if self.axes[..i].iter().any(|a| a.name() == axis.name()) {
                return Err(TableError::DuplicateAxis {
                    axis: axis.name().to_string(),
                });
            }
            if let Some(default) = axis.default() {
                if !axis.has_value(default) {
                    return Err(TableError::UnknownDefault {
                        axis: axis.name().to_string(),
                        value: default.to_string(),
                    });
                }
            }
        }

        for (index, compound) in self.compounds.iter().enumerate() {
            for (axis_name, value) in compound.conditions() {
                let axis = self
                    .get(axis_name)
                    .ok_or_else(|| TableError::CompoundUnknownAxis {
                        index,
                        axis: axis_name.to_string(),
                    })?;
                if !axis.has_value(value) {
                    return Err(TableError::CompoundUnknownValue {
                        index,
                        axis: axis_name.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Serialized form of a [`VariantTable`], shaped like a variant factory
/// config: values per axis, defaults per axis, then compounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDef {
    #[serde(default, skip_serializing_if = "OrderedMap::is_empty")]
    pub variants: OrderedMap<OrderedMap<String>>,
    #[serde(
        default,
        deserialize_with = "scalar_values",
        skip_serializing_if = "OrderedMap::is_empty"
    )]
    pub defaults: OrderedMap<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compounds: Vec<CompoundVariant>,
}

impl TryFrom<TableDef> for VariantTable {
    type Error = TableError;

    fn try_from(def: TableDef) -> Result<Self, Self::Error> {
        if let Some(axis) = def.defaults.keys().find(|k| !def.variants.contains_key(k)) {
            return Err(TableError::DefaultForUnknownAxis {
                axis: axis.to_string(),
            });
        }

        let mut table = VariantTable::new();
        for (name, values) in def.variants {
            let default = def.defaults.get(&name).cloned();
            table = table.axis(Axis::from_parts(name, values, default));
        }
        for compound in def.compounds {
            table = table.compound(compound);
        }

        table.validate()?;
        Ok(table)
    }
}

impl From<VariantTable> for TableDef {
    fn from(table: VariantTable) -> Self {
        let mut def = TableDef::default();
        for axis in &table.axes {
            def.variants.insert(axis.name(), axis.values_map().clone());
            if let Some(default) = axis.default() {
                def.defaults.insert(axis.name(), default.to_string());
            }
        }
        def.compounds = table.compounds;
        def
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_axis() -> Axis {
        Axis::new("size")
            .value("sm", "h-3 w-3")
            .value("default", "h-4 w-4")
            .default_value("default")
    }

    #[test]
    fn test_validate_ok() {
        let table = VariantTable::new().axis(size_axis());
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_empty_table_is_valid() {
        assert!(VariantTable::new().validate().is_ok());
        assert!(VariantTable::new().is_empty());
    }

    #[test]
    fn test_validate_unknown_default() {
        let table =
            VariantTable::new().axis(Axis::new("size").value("sm", "h-3").default_value("md"));
        assert_eq!(
            table.validate(),
            Err(TableError::UnknownDefault {
                axis: "size".to_string(),
                value: "md".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_duplicate_axis() {
        let table = VariantTable::new().axis(size_axis()).axis(size_axis());
        assert!(matches!(
            table.validate(),
            Err(TableError::DuplicateAxis { .. })
        ));
    }

    #[test]
    fn test_validate_compound_unknown_axis() {
        let table = VariantTable::new()
            .axis(size_axis())
            .compound(CompoundVariant::new("x").when("tone", "loud"));
        assert!(matches!(
            table.validate(),
            Err(TableError::CompoundUnknownAxis { index: 0, .. })
        ));
    }

    #[test]
    fn test_validate_compound_unknown_value() {
        let table = VariantTable::new()
            .axis(size_axis())
            .compound(CompoundVariant::new("x").when("size", "xl"));
        assert!(matches!(
            table.validate(),
            Err(TableError::CompoundUnknownValue { index: 0, .. })
        ));
    }

    #[test]
    fn test_deserialize_yaml() {
        let yaml = r#"
variants:
  size:
    sm: h-3 w-3
    default: h-4 w-4
defaults:
  size: default
"#;
        let table: VariantTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(table, VariantTable::new().axis(size_axis()));
    }

    #[test]
    fn test_deserialize_rejects_default_for_unknown_axis() {
        let yaml = "variants:\n  size:\n    sm: h-3\ndefaults:\n  tone: loud\n";
        let err = serde_yaml::from_str::<VariantTable>(yaml).unwrap_err();
        assert!(err.to_string().contains("tone"));
    }

    #[test]
    fn test_deserialize_rejects_invalid_default() {
        let json = r#"{"variants": {"size": {"sm": "h-3"}}, "defaults": {"size": "xl"}}"#;
        assert!(serde_json::from_str::<VariantTable>(json).is_err());
    }

    #[test]
    fn test_serialize_json_shape() {
        let table = VariantTable::new().axis(size_axis());
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "variants": { "size": { "sm": "h-3 w-3", "default": "h-4 w-4" } },
                "defaults": { "size": "default" }
            })
        );
    }
}
