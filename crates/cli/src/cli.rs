//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use font2css_core::{DEFAULT_URL_PREFIX, Options, PropertyOrder};

use crate::{convert::convert_all, inspect::inspect};

#[derive(Parser)]
#[command(name = "font2css")]
#[command(about = "Generate @font-face stylesheets from font file names")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Descriptor order in the generated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// font-family, src, font-style, font-weight
    FamilyFirst,
    /// font-style, font-weight, font-family, src
    DescriptorsFirst,
}

impl From<Order> for PropertyOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::FamilyFirst => PropertyOrder::FamilyFirst,
            Order::DescriptorsFirst => PropertyOrder::DescriptorsFirst,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct RuleArgs {
    /// Prefix of the src URL, relative to the stylesheet
    #[arg(long, default_value = DEFAULT_URL_PREFIX)]
    pub url_prefix: String,
    #[arg(long, value_enum, default_value_t = Order::FamilyFirst)]
    pub order: Order,
}

impl RuleArgs {
    pub fn options(&self) -> Options {
        Options::default().with_url_prefix(self.url_prefix.clone()).with_order(self.order.into())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a .css file for each font file
    Convert {
        /// Font files, directories (skipped), glob patterns, or - for stdin
        #[arg(required = true)]
        inputs: Vec<String>,
        /// Write stylesheets here instead of next to each font
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        #[command(flatten)]
        rule: RuleArgs,
    },
    /// Print the derived properties for file names
    Inspect {
        #[arg(required = true)]
        names: Vec<String>,
        #[command(flatten)]
        rule: RuleArgs,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Convert { inputs, out_dir, rule } => {
                convert_all(&inputs, out_dir.as_deref(), &rule.options())?.ok_or_bail("Convert")?;
            }
            Commands::Inspect { names, rule } => {
                inspect(&names, &rule.options());
            }
        }
        Ok(())
    }
}
