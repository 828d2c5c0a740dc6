//! Inspect command (field and resource breakdown).

use anyhow::Result;
use arnkit_arn::{Arn, ArnError};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// Show every field of one or more ARNs.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// ARNs to inspect.
    #[arg(required = true)]
    arns: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct ArnView {
    #[tabled(rename = "ARN")]
    arn: String,
    #[tabled(rename = "Partition")]
    partition: String,
    #[tabled(rename = "Service")]
    service: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Resource")]
    resource: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "type")]
    resource_type: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl ArnView {
    fn new(arn: &Arn) -> Result<Self, ArnError> {
        Ok(Self {
            arn: arn.to_string(),
            partition: arn.partition()?.to_string(),
            service: arn.service()?.to_string(),
            region: arn.region()?.to_string(),
            account: arn.account()?.to_string(),
            resource: arn.resource()?.to_string(),
            resource_type: arn.resource_type()?.to_string(),
            path: arn.path()?.to_string(),
            name: arn.name()?.to_string(),
        })
    }
}

impl InspectCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let views = self
            .arns
            .iter()
            .map(|s| ArnView::new(&Arn::parse(s)?))
            .collect::<Result<Vec<_>, ArnError>>()?;

        print_output(&views, ctx.format);
        Ok(())
    }
}
