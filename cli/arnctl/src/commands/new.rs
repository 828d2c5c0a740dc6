//! New command (context-aware construction).

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::output::print_arn;

use super::{CommandContext, CtxArgs};

/// Construct an ARN for a service using the current context.
///
/// Region and account come from the flags, then the saved context. Services
/// that are global or partition-wide drop them automatically.
#[derive(Debug, Args)]
pub struct NewCommand {
    #[command(flatten)]
    location: CtxArgs,

    /// Service name (e.g. s3, iam, ec2).
    service: String,

    /// Resource parts, concatenated without separators.
    resource: Vec<String>,
}

impl NewCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let anchor = self.location.resolve(&ctx.config);
        info!(
            partition = %anchor.partition,
            region = %anchor.region,
            account = %anchor.account,
            service = %self.service,
            "constructing arn"
        );

        let arn = anchor.arn(&self.service, &self.resource)?;
        print_arn(&arn, ctx.format);
        Ok(())
    }
}
