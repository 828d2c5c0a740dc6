//! CLI commands.

mod context;
mod field;
mod inspect;
mod merge;
mod new;
mod set;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// arn - Inspect, edit, and mint Amazon Resource Names.
#[derive(Debug, Parser)]
#[command(name = "arn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show every field of one or more ARNs.
    Inspect(inspect::InspectCommand),

    /// Print a single field by index.
    Field(field::FieldCommand),

    /// Construct an ARN for a service using the current context.
    New(new::NewCommand),

    /// Replace fields of an ARN.
    Set(set::SetCommand),

    /// Overlay the non-empty fields of one ARN onto another.
    Merge(merge::MergeCommand),

    /// Show or change the saved context.
    Context(context::ContextCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext {
            config: Config::load()?,
            format: OutputFormat::from_flag(&self.format),
        };

        match self.command {
            Commands::Inspect(cmd) => cmd.run(ctx),
            Commands::Field(cmd) => cmd.run(ctx),
            Commands::New(cmd) => cmd.run(ctx),
            Commands::Set(cmd) => cmd.run(ctx),
            Commands::Merge(cmd) => cmd.run(ctx),
            Commands::Context(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("arn {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

/// Partition, region, and account overrides.
#[derive(Debug, Clone, Default, Args)]
pub struct CtxArgs {
    /// Partition (e.g. aws, aws-cn, aws-us-gov).
    #[arg(long, env = "ARN_PARTITION")]
    pub partition: Option<String>,

    /// Region (e.g. us-east-1).
    #[arg(long, env = "ARN_REGION")]
    pub region: Option<String>,

    /// Account ID.
    #[arg(long, env = "ARN_ACCOUNT")]
    pub account: Option<String>,
}

impl CtxArgs {
    /// Resolve a context, preferring these flags over the saved context.
    pub fn resolve(&self, config: &Config) -> arnkit_arn::Ctx {
        config.context.resolve(
            self.partition.as_deref(),
            self.region.as_deref(),
            self.account.as_deref(),
        )
    }
}
