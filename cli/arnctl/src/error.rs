//! Error handling and display for the CLI.

use arnkit_arn::ArnError;
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid assignment '{0}', expected INDEX=VALUE")]
    InvalidAssignment(String),

    #[error("invalid field index '{0}'")]
    InvalidIndex(String),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = hint(err) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(arn_err) = err.downcast_ref::<ArnError>() {
        return match arn_err {
            ArnError::Invalid { .. } | ArnError::InvalidField { .. } => Some(
                "ARNs look like arn:<partition>:<service>:<region>:<account>:<resource>.",
            ),
            ArnError::NoPath { .. } => {
                Some("This resource has no '/' path. Set `name` or `resource` instead.")
            }
            ArnError::ServiceNotSpecified => Some("Pass a service name such as `s3` or `iam`."),
            ArnError::ResourceRequired { .. } => {
                Some("This service needs a typed resource, e.g. `image/ami-1a2b3c4d`.")
            }
        };
    }

    match err.downcast_ref::<CliError>()? {
        CliError::InvalidAssignment(_) | CliError::InvalidIndex(_) => Some(
            "Use --field 5=value for the resource tail; named fields have their own \
             flags, e.g. --region us-west-2.",
        ),
    }
}
