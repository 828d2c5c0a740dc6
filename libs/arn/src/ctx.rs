//! Context-aware ARN construction.
//!
//! ARNs are inconsistent about which location fields they carry. S3 buckets
//! are global and omit both region and account, IAM omits only the region,
//! and some services decide per resource type. [`Ctx::arn`] applies those
//! rules from a single table so callers never special-case services.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arn::Arn;
use crate::error::ArnError;
use crate::scan;

/// Resource type used when a service's rules do not depend on it.
const ANY_TYPE: &str = "any";

/// Location information for constructing context-aware ARNs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ctx {
    pub partition: String,
    pub region: String,
    pub account: String,
}

impl Ctx {
    /// Creates a context for the given partition, region, and account.
    pub fn new(
        partition: impl Into<String>,
        region: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        Self {
            partition: partition.into(),
            region: region.into(),
            account: account.into(),
        }
    }

    /// Returns a copy of the context for another region. The region is not
    /// checked against the partition.
    #[must_use]
    pub fn in_region(&self, region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..self.clone()
        }
    }

    /// Constructs an ARN for `service`, blanking whichever of region and
    /// account the service leaves out.
    ///
    /// Some services pick their rule by resource type, which is read from
    /// the first resource part up to its first `/` or `:`. Those services
    /// fail with [`ArnError::ResourceRequired`] if that type is empty.
    pub fn arn<I, S>(&self, service: &str, resource: I) -> Result<Arn, ArnError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if service.is_empty() {
            return Err(ArnError::ServiceNotSpecified);
        }
        let resource: Vec<S> = resource.into_iter().collect();

        let mut service = service;
        let mut omit = Omit::NONE;
        if let Some(rule) = ServiceRule::find(service) {
            if let Some(canonical) = rule.rename {
                debug!(from = service, to = canonical, "renaming arn service");
                service = canonical;
            }
            let typ = if rule.sniff_type {
                resource
                    .first()
                    .map(|r| scan::leading_type(r.as_ref()))
                    .unwrap_or("")
            } else {
                ANY_TYPE
            };
            if typ.is_empty() {
                return Err(ArnError::ResourceRequired {
                    service: service.to_string(),
                });
            }
            omit = rule.omit_for(typ);
            if omit != Omit::NONE {
                debug!(
                    service,
                    resource_type = typ,
                    omit_region = omit.region,
                    omit_account = omit.account,
                    "omitting arn context fields"
                );
            }
        }

        let region = if omit.region { "" } else { self.region.as_str() };
        let account = if omit.account { "" } else { self.account.as_str() };
        Ok(Arn::new(&self.partition, service, region, account, resource))
    }
}

// =============================================================================
// Rule table
// =============================================================================

/// Context fields left out of an ARN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Omit {
    region: bool,
    account: bool,
}

impl Omit {
    const NONE: Self = Self {
        region: false,
        account: false,
    };
    const REGION: Self = Self {
        region: true,
        account: false,
    };
    const ACCOUNT: Self = Self {
        region: false,
        account: true,
    };
    const BOTH: Self = Self {
        region: true,
        account: true,
    };
}

/// Resource types a case applies to.
#[derive(Debug, Clone, Copy)]
enum TypeMatch {
    Any,
    OneOf(&'static [&'static str]),
}

impl TypeMatch {
    fn matches(self, typ: &str) -> bool {
        match self {
            TypeMatch::Any => true,
            TypeMatch::OneOf(types) => types.contains(&typ),
        }
    }
}

/// A single `(predicate, action)` pair. Cases are checked in order and the
/// first match wins.
#[derive(Debug, Clone, Copy)]
struct Case {
    types: TypeMatch,
    omit: Omit,
}

/// Omission rules shared by one or more services.
#[derive(Debug)]
struct ServiceRule {
    services: &'static [&'static str],
    rename: Option<&'static str>,
    sniff_type: bool,
    cases: &'static [Case],
}

impl ServiceRule {
    fn find(service: &str) -> Option<&'static ServiceRule> {
        RULES.iter().find(|r| r.services.contains(&service))
    }

    fn omit_for(&self, typ: &str) -> Omit {
        self.cases
            .iter()
            .find(|c| c.types.matches(typ))
            .map_or(Omit::NONE, |c| c.omit)
    }
}

const fn always(omit: Omit) -> Case {
    Case {
        types: TypeMatch::Any,
        omit,
    }
}

const fn when(types: &'static [&'static str], omit: Omit) -> Case {
    Case {
        types: TypeMatch::OneOf(types),
        omit,
    }
}

static RULES: &[ServiceRule] = &[
    ServiceRule {
        services: &["apigateway"],
        rename: None,
        sniff_type: false,
        cases: &[always(Omit::ACCOUNT)],
    },
    ServiceRule {
        services: &["artifact", "s3"],
        rename: None,
        sniff_type: false,
        cases: &[always(Omit::BOTH)],
    },
    ServiceRule {
        services: &["cloudfront", "iam", "sts", "waf", "waf-regional"],
        rename: None,
        sniff_type: false,
        cases: &[always(Omit::REGION)],
    },
    ServiceRule {
        services: &["cloudwatch", "monitoring"],
        rename: Some("cloudwatch"),
        sniff_type: true,
        cases: &[when(&["dashboard"], Omit::REGION)],
    },
    ServiceRule {
        services: &["ec2"],
        rename: None,
        sniff_type: true,
        cases: &[when(&["image", "snapshot"], Omit::ACCOUNT)],
    },
    ServiceRule {
        services: &["elasticbeanstalk"],
        rename: None,
        sniff_type: true,
        cases: &[when(&["solutionstack"], Omit::ACCOUNT)],
    },
    ServiceRule {
        services: &["health"],
        rename: None,
        sniff_type: true,
        cases: &[when(&["event"], Omit::ACCOUNT)],
    },
    ServiceRule {
        services: &["route53"],
        rename: None,
        sniff_type: true,
        cases: &[
            when(&["hostedzone", "change"], Omit::BOTH),
            when(&["domain"], Omit::REGION),
        ],
    },
];

// =============================================================================
// Tests
// =============================================================================
