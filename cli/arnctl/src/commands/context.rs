//! Context commands (saved defaults for partition/region/account).

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::SavedContext;
use crate::output::{print_single, print_success, OutputFormat};

use super::{CommandContext, CtxArgs};

/// Manage the saved context used by `arn new`.
#[derive(Debug, Args)]
pub struct ContextCommand {
    #[command(subcommand)]
    command: ContextSubcommand,
}

#[derive(Debug, Subcommand)]
enum ContextSubcommand {
    /// Show the saved context and the context `arn new` would use.
    Show(CtxArgs),

    /// Save one or more context fields.
    Set(SaveArgs),

    /// Clear the saved context.
    Clear,
}

/// Fields to save. Only explicit flags are saved, never the environment.
#[derive(Debug, Clone, Default, Args)]
#[group(required = true, multiple = true)]
struct SaveArgs {
    /// Partition to save.
    #[arg(long)]
    partition: Option<String>,

    /// Region to save.
    #[arg(long)]
    region: Option<String>,

    /// Account ID to save.
    #[arg(long)]
    account: Option<String>,
}

#[derive(Debug, Serialize)]
struct ContextView {
    saved: SavedContext,
    resolved: arnkit_arn::Ctx,
}

impl ContextCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ContextSubcommand::Show(args) => show(ctx, args),
            ContextSubcommand::Set(args) => set(ctx, args),
            ContextSubcommand::Clear => clear(ctx),
        }
    }
}

fn show(ctx: CommandContext, args: CtxArgs) -> Result<()> {
    let view = ContextView {
        saved: ctx.config.context.clone(),
        resolved: args.resolve(&ctx.config),
    };

    match ctx.format {
        OutputFormat::Json => print_single(&view),
        OutputFormat::Table => {
            if view.saved.is_empty() {
                println!("No saved context.");
            }
            println!("partition: {}", view.resolved.partition);
            println!("region: {}", or_dash(&view.resolved.region));
            println!("account: {}", or_dash(&view.resolved.account));
        }
    }

    Ok(())
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

fn set(mut ctx: CommandContext, args: SaveArgs) -> Result<()> {
    merge_saved(&mut ctx.config.context, args);
    ctx.config.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&ctx.config.context),
        OutputFormat::Table => print_success("Saved context"),
    }

    Ok(())
}

fn clear(mut ctx: CommandContext) -> Result<()> {
    ctx.config.context = SavedContext::default();
    ctx.config.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({ "ok": true })),
        OutputFormat::Table => print_success("Cleared saved context"),
    }

    Ok(())
}

/// Overwrites the saved fields that were given; others are kept.
fn merge_saved(saved: &mut SavedContext, args: SaveArgs) {
    if let Some(partition) = args.partition {
        saved.partition = Some(partition);
    }
    if let Some(region) = args.region {
        saved.region = Some(region);
    }
    if let Some(account) = args.account {
        saved.account = Some(account);
    }
}
