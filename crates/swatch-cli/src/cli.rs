//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "swatch", version, about = "Resolve design-system variant tables")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Stylesheet laid over the built-in recipes.
    #[arg(long, global = true, value_name = "FILE")]
    pub stylesheet: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the class string of a recipe.
    Resolve(ResolveArgs),
    /// List recipes, or the axes of one recipe.
    List {
        recipe: Option<String>,
    },
    /// Validate a stylesheet file.
    Check {
        file: PathBuf,
    },
    /// Merge class strings, later classes winning conflicts.
    Merge {
        #[arg(required = true)]
        classes: Vec<String>,
    },
}

#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    /// Recipe name, e.g. `badge` or `checkbox.indicator`.
    pub recipe: String,

    /// Axis selection.
    #[arg(long = "set", value_name = "AXIS=VALUE", value_parser = parse_selection)]
    pub selections: Vec<(String, String)>,

    /// Classes appended last.
    #[arg(long, value_name = "CLASSES")]
    pub class: Option<String>,

    /// Fail on values and axes the recipe does not declare.
    #[arg(long)]
    pub strict: bool,

    /// Collapse exact duplicates only.
    #[arg(long)]
    pub no_merge: bool,

    /// Print the element props as JSON.
    #[arg(long)]
    pub json: bool,
}

fn parse_selection(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((axis, value)) if !axis.trim().is_empty() => {
            Ok((axis.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected AXIS=VALUE, got '{}'", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::try_parse_from([
            "swatch",
            "resolve",
            "badge",
            "--set",
            "variant=outline",
            "--set",
            "size=sm",
            "--class",
            "px-4",
            "--json",
        ])
        .unwrap();

        let Command::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.recipe, "badge");
        assert_eq!(
            args.selections,
            vec![
                ("variant".to_string(), "outline".to_string()),
                ("size".to_string(), "sm".to_string()),
            ]
        );
        assert_eq!(args.class.as_deref(), Some("px-4"));
        assert!(args.json);
        assert!(!args.strict);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["swatch", "list", "-vv", "--stylesheet", "brand.yaml"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.stylesheet, Some(PathBuf::from("brand.yaml")));
        assert!(matches!(cli.command, Command::List { recipe: None }));
    }

    #[test]
    fn test_rejects_bad_selection() {
        let err = Cli::try_parse_from(["swatch", "resolve", "badge", "--set", "outline"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_merge_requires_classes() {
        assert!(Cli::try_parse_from(["swatch", "merge"]).is_err());
    }

    #[test]
    fn test_parse_selection_keeps_empty_value() {
        assert_eq!(
            parse_selection("size="),
            Ok(("size".to_string(), String::new()))
        );
        assert!(parse_selection("=sm").is_err());
    }
}
