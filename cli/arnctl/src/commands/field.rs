//! Field command.

use anyhow::Result;
use arnkit_arn::Arn;
use clap::Args;

use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Print a single field by index. Indices above 4 address the `:`-separated
/// tail of the resource.
#[derive(Debug, Args)]
pub struct FieldCommand {
    /// ARN to read.
    arn: String,

    /// Field index (0 partition, 1 service, 2 region, 3 account, 4 resource).
    index: usize,
}

impl FieldCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let arn = Arn::from(self.arn);
        let value = arn.field(self.index)?;

        match ctx.format {
            OutputFormat::Json => print_single(&serde_json::json!({
                "index": self.index,
                "value": value,
            })),
            OutputFormat::Table => println!("{value}"),
        }
        Ok(())
    }
}
