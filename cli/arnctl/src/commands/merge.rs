//! Merge command.

use anyhow::Result;
use arnkit_arn::Arn;
use clap::Args;

use crate::output::print_arn;

use super::CommandContext;

/// Overlay the non-empty fields of one ARN onto another.
///
/// `arn merge arn:aws:s3:::bucket arn:aws-cn::::` moves the bucket ARN to the
/// aws-cn partition.
#[derive(Debug, Args)]
pub struct MergeCommand {
    /// ARN supplying the defaults.
    base: String,

    /// ARN whose non-empty fields win.
    overlay: String,
}

impl MergeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let base = Arn::parse(&self.base)?;
        let overlay = Arn::parse(&self.overlay)?;
        print_arn(&base.with(&overlay)?, ctx.format);
        Ok(())
    }
}
