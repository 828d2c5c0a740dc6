//! # arnkit-arn
//!
//! Amazon Resource Names as immutable values.
//!
//! ## Design Principles
//!
//! - An ARN is its string; there is no parsed form kept alongside it
//! - Every edit returns a new ARN and leaves the receiver untouched
//! - Malformed input is an error, never a silently defaulted field
//! - Service quirks live in one rule table, not in the ARN type
//!
//! ## ARN Format
//!
//! ```text
//! arn:<partition>:<service>:<region>:<account>:<resource>
//! ```
//!
//! The first four fields end at the first four colons after the prefix. The
//! resource is everything after that and may itself contain `:` and `/`.
//! Within the resource:
//! - type is the text before the first `/` or `:`
//! - path runs from the first to the last `/` after the last `:`
//! - name is the text after the last `/` or `:`
//!
//! Examples:
//! - `arn:aws:s3:::my_corporate_bucket`
//! - `arn:aws:iam::123456789012:role/service/deploy` (type `role`, path
//!   `/service/`, name `deploy`)
//!
//! ## Context
//!
//! [`Ctx`] anchors new ARNs to a partition, region, and account and knows
//! which of those fields each service leaves blank:
//!
//! ```
//! use arnkit_arn::Ctx;
//!
//! let ctx = Ctx::new("aws", "us-east-1", "123456789012");
//! let bucket = ctx.arn("s3", ["my_corporate_bucket"]).unwrap();
//! assert_eq!(bucket.as_str(), "arn:aws:s3:::my_corporate_bucket");
//! ```

mod arn;
mod ctx;
mod error;
mod macros;
mod path;
mod scan;

pub use arn::Arn;
pub use ctx::Ctx;
pub use error::ArnError;
pub use path::clean_path;

/// Number of top-level ARN fields after the `arn:` prefix.
pub const FIELDS: usize = 5;
