//! Set command (field replacement).

use std::str::FromStr;

use anyhow::Result;
use arnkit_arn::{Arn, ArnError};
use clap::Args;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_arn;

use super::CommandContext;

/// Replace fields of an ARN.
///
/// Named fields are applied in a fixed order: partition, service, region,
/// account, resource, path, name, path-name. Indexed `--field` edits run
/// last, left to right.
#[derive(Debug, Args)]
pub struct SetCommand {
    /// ARN to edit.
    arn: String,

    #[command(flatten)]
    edits: Edits,
}

#[derive(Debug, Default, Args)]
#[group(required = true, multiple = true)]
struct Edits {
    /// New partition.
    #[arg(long)]
    partition: Option<String>,

    /// New service.
    #[arg(long)]
    service: Option<String>,

    /// New region.
    #[arg(long)]
    region: Option<String>,

    /// New account.
    #[arg(long)]
    account: Option<String>,

    /// New resource.
    #[arg(long)]
    resource: Option<String>,

    /// New resource path (cleaned to an absolute path).
    #[arg(long)]
    path: Option<String>,

    /// New resource name.
    #[arg(long)]
    name: Option<String>,

    /// New path and name, split at the last `/`.
    #[arg(long)]
    path_name: Option<String>,

    /// Indexed field such as `5=value`, for the `:`-separated resource tail.
    #[arg(short, long = "field", value_name = "INDEX=VALUE")]
    fields: Vec<Assignment>,
}

/// A single edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Index(usize),
    Path,
    Name,
    PathName,
}

impl Target {
    fn apply(self, arn: &Arn, value: &str) -> Result<Arn, ArnError> {
        match self {
            Target::Index(i) => arn.with_field(i, value),
            Target::Path => arn.with_path(value),
            Target::Name => arn.with_name(value),
            Target::PathName => arn.with_path_name(value),
        }
    }
}

/// A parsed `INDEX=VALUE` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Assignment {
    index: usize,
    value: String,
}

impl FromStr for Assignment {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((index, value)) = s.split_once('=') else {
            return Err(CliError::InvalidAssignment(s.to_string()));
        };
        let index = index
            .parse()
            .map_err(|_| CliError::InvalidIndex(index.to_string()))?;
        Ok(Self {
            index,
            value: value.to_string(),
        })
    }
}

impl Edits {
    /// Returns the edits in application order.
    fn ordered(&self) -> Vec<(Target, &str)> {
        let named = [
            (Target::Index(0), &self.partition),
            (Target::Index(1), &self.service),
            (Target::Index(2), &self.region),
            (Target::Index(3), &self.account),
            (Target::Index(4), &self.resource),
            (Target::Path, &self.path),
            (Target::Name, &self.name),
            (Target::PathName, &self.path_name),
        ];
        named
            .into_iter()
            .filter_map(|(target, value)| value.as_deref().map(|v| (target, v)))
            .chain(
                self.fields
                    .iter()
                    .map(|a| (Target::Index(a.index), a.value.as_str())),
            )
            .collect()
    }

    fn apply(&self, arn: Arn) -> Result<Arn, ArnError> {
        self.ordered()
            .into_iter()
            .try_fold(arn, |arn, (target, value)| {
                debug!(field = ?target, value, "applying edit");
                target.apply(&arn, value)
            })
    }
}

impl SetCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let arn = self.edits.apply(Arn::parse(&self.arn)?)?;
        print_arn(&arn, ctx.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Cli, Commands};
    use clap::Parser;

    fn parse_set(args: &[&str]) -> SetCommand {
        let argv = ["arn", "set"].iter().chain(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Set(cmd) => cmd,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_named_flags() {
        let cmd = parse_set(&["arn:aws:s3:::b", "--region", "us-west-2"]);
        assert_eq!(cmd.edits.region.as_deref(), Some("us-west-2"));
        assert!(cmd.edits.fields.is_empty());
    }

    #[test]
    fn test_parse_requires_an_edit() {
        assert!(Cli::try_parse_from(["arn", "set", "arn:aws:s3:::b"]).is_err());
    }

    #[test]
    fn test_parse_assignment() {
        let a: Assignment = "6=".parse().unwrap();
        assert_eq!(a.index, 6);
        assert_eq!(a.value, "");

        assert!(matches!(
            "6".parse::<Assignment>(),
            Err(CliError::InvalidAssignment(_))
        ));
        assert!(matches!(
            "zone=a".parse::<Assignment>(),
            Err(CliError::InvalidIndex(_))
        ));
    }

    #[test]
    fn test_apply_in_fixed_order() {
        let cmd = parse_set(&[
            "arn:aws:iam::123456789012:role/a/b/deploy",
            "--name",
            "release",
            "--path",
            "svc",
            "--account",
            "210987654321",
        ]);
        let arn = cmd.edits.apply(Arn::parse(&cmd.arn).unwrap()).unwrap();
        assert_eq!(arn, "arn:aws:iam::210987654321:role/svc/release");
    }

    #[test]
    fn test_resource_applies_before_path() {
        let cmd = parse_set(&["arn:aws:s3:::bucket", "--path", "x", "--resource", "a/b/c"]);
        let arn = cmd.edits.apply(Arn::parse(&cmd.arn).unwrap()).unwrap();
        assert_eq!(arn, "arn:aws:s3:::a/x/c");
    }

    #[test]
    fn test_indexed_fields_apply_last() {
        let cmd = parse_set(&["arn:aws:logs:us-east-1:1:x:y", "-f", "5=z", "--resource", "p:q"]);
        let arn = cmd.edits.apply(Arn::parse(&cmd.arn).unwrap()).unwrap();
        assert_eq!(arn, "arn:aws:logs:us-east-1:1:p:z");
    }

    #[test]
    fn test_apply_reports_missing_path() {
        let cmd = parse_set(&["arn:aws:s3:::bucket", "--path", "/x"]);
        let err = cmd.edits.apply(Arn::parse(&cmd.arn).unwrap()).unwrap_err();
        assert!(err.is_no_path());
    }
}
