//! Parsing of `#[axis(...)]` attributes.

use syn::{Attribute, LitStr, Result};

/// Attributes on the enum itself.
#[derive(Default)]
pub struct ContainerAttrs {
    pub name: Option<String>,
}

/// Attributes on a single variant.
#[derive(Default)]
pub struct VariantAttrs {
    pub rename: Option<String>,
    pub default: bool,
}

pub fn parse_container_attrs(attrs: &[Attribute]) -> Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("axis")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                out.name = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported axis attribute; expected `name = \"...\"`"))
            }
        })?;
    }

    Ok(out)
}

pub fn parse_variant_attrs(attrs: &[Attribute]) -> Result<VariantAttrs> {
    let mut out = VariantAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("axis")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                out.rename = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("default") {
                out.default = true;
                Ok(())
            } else {
                Err(meta.error(
                    "unsupported axis attribute; expected `rename = \"...\"` or `default`",
                ))
            }
        })?;
    }

    Ok(out)
}
