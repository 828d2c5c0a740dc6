//! The [`Arn`] value type.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::ctx::Ctx;
use crate::error::ArnError;
use crate::macros::field_accessors;
use crate::path::clean_path;
use crate::scan;
use crate::FIELDS;

/// An Amazon Resource Name.
///
/// An `Arn` wraps its text verbatim; fields are located on demand by
/// scanning for delimiters. Wrapping arbitrary text with [`From`] never
/// fails, so callers can test [`Arn::is_valid`] on untrusted input. Every
/// accessor checks the structure it needs and returns [`ArnError`] if the
/// text is malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arn(Cow<'static, str>);

impl Arn {
    /// An ARN without any fields set.
    pub const BASE: Self = Self(Cow::Borrowed("arn:::::"));

    /// Constructs an ARN from its fields. Any field may be blank.
    ///
    /// Resource parts are concatenated as given; callers supply any `/` or
    /// `:` separators themselves.
    #[must_use]
    pub fn new<I, S>(
        partition: &str,
        service: &str,
        region: &str,
        account: &str,
        resource: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut s = String::with_capacity(64);
        s.push_str(scan::PREFIX);
        for f in [partition, service, region, account] {
            s.push_str(f);
            s.push(':');
        }
        for part in resource {
            s.push_str(part.as_ref());
        }
        Self(Cow::Owned(s))
    }

    /// Wraps a static string without copying or validating it.
    #[must_use]
    pub const fn from_static(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }

    /// Parses and validates an ARN.
    pub fn parse(s: &str) -> Result<Self, ArnError> {
        if !scan::is_valid(s) {
            return Err(ArnError::invalid(s));
        }
        Ok(Self(Cow::Owned(s.to_string())))
    }

    /// Converts an optional string, treating `None` as the empty ARN.
    #[must_use]
    pub fn from_optional(s: Option<&str>) -> Self {
        s.map(Self::from).unwrap_or_default()
    }

    /// Converts the ARN into an optional string. The result is always
    /// `Some`, even for the empty ARN.
    #[must_use]
    pub fn to_optional(&self) -> Option<String> {
        Some(self.0.to_string())
    }

    /// Returns the ARN text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ARN and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0.into_owned()
    }

    /// Returns true if the ARN has no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the ARN has the `arn:` prefix and all five fields.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        scan::is_valid(&self.0)
    }

    /// Returns field `index`.
    ///
    /// Indices 0 through 4 are partition, service, region, account, and
    /// resource. Larger indices address the `:`-separated tail of the
    /// resource: index 5 is the resource after its first colon, and so on.
    pub fn field(&self, index: usize) -> Result<&str, ArnError> {
        let r = scan::field(&self.0, index)?;
        Ok(&self.0[r])
    }

    /// Returns a new ARN with field `index` set to `value`. The ARN is
    /// returned as-is if the field already holds `value`.
    pub fn with_field(&self, index: usize, value: &str) -> Result<Self, ArnError> {
        let r = scan::field(&self.0, index)?;
        if &self.0[r.clone()] == value {
            return Ok(self.clone());
        }
        Ok(concat(&[&self.0[..r.start], value, &self.0[r.end..]]))
    }

    /// Returns a new ARN with non-empty fields in `other` replacing those in
    /// `self`.
    pub fn with(&self, other: &Arn) -> Result<Self, ArnError> {
        let mut fields = [""; FIELDS];
        for (i, slot) in fields.iter_mut().enumerate() {
            let theirs = other.field(i)?;
            *slot = if theirs.is_empty() { self.field(i)? } else { theirs };
        }
        let [partition, service, region, account, resource] = fields;
        Ok(Self::new(partition, service, region, account, [resource]))
    }

    /// Returns the resource prefix up to the first `/` or `:`. It is empty if
    /// the resource contains neither character.
    pub fn resource_type(&self) -> Result<&str, ArnError> {
        let r = scan::resource_type(&self.0)?;
        Ok(&self.0[r])
    }

    /// Returns the resource text between and including the first and last
    /// `/`. Anything up to the last `:` is ignored, and the result is empty
    /// if no `/` follows it.
    pub fn path(&self) -> Result<&str, ArnError> {
        Ok(match scan::path(&self.0)? {
            Some(r) => &self.0[r],
            None => "",
        })
    }

    /// Returns the resource suffix after the last `/` or `:`, or the whole
    /// resource if neither is present.
    pub fn name(&self) -> Result<&str, ArnError> {
        let i = scan::name_start(&self.0)?;
        Ok(&self.0[i..])
    }

    /// Returns the path and name together.
    pub fn path_name(&self) -> Result<&str, ArnError> {
        let r = self.require_path()?;
        Ok(&self.0[r.start..])
    }

    /// Returns a new ARN with the path replaced by the cleaned form of
    /// `value`. Type and name are kept.
    pub fn with_path(&self, value: &str) -> Result<Self, ArnError> {
        let r = self.require_path()?;
        Ok(concat(&[
            &self.0[..r.start],
            &clean_path(value),
            "/",
            &self.0[r.end..],
        ]))
    }

    /// Returns a new ARN with the name replaced by `value`.
    pub fn with_name(&self, value: &str) -> Result<Self, ArnError> {
        let i = scan::name_start(&self.0)?;
        Ok(concat(&[&self.0[..i], value]))
    }

    /// Returns a new ARN with path and name replaced by `value`, which is
    /// split at its last `/`.
    pub fn with_path_name(&self, value: &str) -> Result<Self, ArnError> {
        let r = self.require_path()?;
        let (dir, name) = match value.rfind('/') {
            Some(j) => (&value[..=j], &value[j + 1..]),
            None => ("", value),
        };
        Ok(concat(&[&self.0[..r.start], &clean_path(dir), "/", name]))
    }

    /// Extracts the partition, region, and account.
    pub fn ctx(&self) -> Result<Ctx, ArnError> {
        Ok(Ctx::new(self.partition()?, self.region()?, self.account()?))
    }

    fn require_path(&self) -> Result<std::ops::Range<usize>, ArnError> {
        scan::path(&self.0)?.ok_or_else(|| ArnError::no_path(&self.0))
    }
}

field_accessors! {
    0 => partition, with_partition, "partition";
    1 => service, with_service, "service";
    2 => region, with_region, "region";
    3 => account, with_account, "account";
    4 => resource, with_resource, "resource";
}

fn concat(parts: &[&str]) -> Arn {
    Arn(Cow::Owned(parts.concat()))
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Arn {
    type Err = ArnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for Arn {
    fn from(s: &str) -> Self {
        Self(Cow::Owned(s.to_string()))
    }
}

impl From<String> for Arn {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

impl From<Option<String>> for Arn {
    fn from(s: Option<String>) -> Self {
        s.map(Self::from).unwrap_or_default()
    }
}

impl From<Arn> for String {
    fn from(arn: Arn) -> Self {
        arn.into_string()
    }
}

impl AsRef<str> for Arn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Arn {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Arn {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl serde::Serialize for Arn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Arn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(Self::default());
        }
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::base(Arn::BASE, "", "", "", "", "", "", "", "")]
    #[case::plain("arn:a:b:c:*:x".into(), "a", "b", "c", "*", "x", "", "", "x")]
    #[case::trailing_colon("arn::::*:x:".into(), "", "", "", "*", "x:", "x", "", "")]
    #[case::leading_colon("arn::::*::y".into(), "", "", "", "*", ":y", "", "", "y")]
    #[case::colon_type("arn::::*:x:y".into(), "", "", "", "*", "x:y", "x", "", "y")]
    #[case::trailing_slash("arn::::*:x/".into(), "", "", "", "*", "x/", "x", "/", "")]
    #[case::leading_slash("arn::::*:/y".into(), "", "", "", "*", "/y", "", "/", "y")]
    #[case::short_path("arn::::*:x/y".into(), "", "", "", "*", "x/y", "x", "/", "y")]
    #[case::long_path("arn::::*:x/y/z".into(), "", "", "", "*", "x/y/z", "x", "/y/", "z")]
    #[allow(clippy::too_many_arguments)]
    fn test_arn_fields(
        #[case] arn: Arn,
        #[case] partition: &str,
        #[case] service: &str,
        #[case] region: &str,
        #[case] account: &str,
        #[case] resource: &str,
        #[case] typ: &str,
        #[case] path: &str,
        #[case] name: &str,
    ) {
        assert!(arn.is_valid(), "arn={arn}");
        assert_eq!(arn.partition().unwrap(), partition);
        assert_eq!(arn.service().unwrap(), service);
        assert_eq!(arn.region().unwrap(), region);
        assert_eq!(arn.account().unwrap(), account);
        assert_eq!(arn.resource().unwrap(), resource);
        assert_eq!(arn.resource_type().unwrap(), typ, "arn={arn}");
        assert_eq!(arn.path().unwrap(), path, "arn={arn}");
        assert_eq!(arn.name().unwrap(), name, "arn={arn}");

        let r = Arn::new(partition, service, region, account, [resource]);
        assert_eq!(r, arn);

        assert_eq!(r.with_partition(partition).unwrap(), r);
        assert_eq!(r.with_service(service).unwrap(), r);
        assert_eq!(r.with_region(region).unwrap(), r);
        assert_eq!(r.with_account(account).unwrap(), r);
        assert_eq!(r.with_resource(resource).unwrap(), r);
        if !name.is_empty() {
            assert_eq!(r.with_name(name).unwrap(), r);
        }
        if !path.is_empty() {
            assert_eq!(r.with_path(path).unwrap(), r);
            assert_eq!(r.with_path_name(&format!("{path}{name}")).unwrap(), r);
            assert_eq!(r.path_name().unwrap(), format!("{path}{name}"));
        }

        let overlay = Arn::new(partition, "", region, "", [resource]);
        assert_eq!(r.with(&overlay).unwrap(), r);
        let overlay = Arn::new("", service, "", account, [""]);
        assert_eq!(r.with(&overlay).unwrap(), r);

        if !path.is_empty() {
            let rebuilt = Arn::new("", "", "", account, [typ, path, name]);
            assert_eq!(rebuilt, arn);
        }
    }

    #[test]
    fn test_new_concatenates_resource_parts() {
        let arn = Arn::new("a", "b", "c", "*", ["x"]);
        assert_eq!(arn, "arn:a:b:c:*:x");
        assert_eq!(arn.region().unwrap(), "c");
        assert_eq!(arn.name().unwrap(), "x");

        let arn = Arn::new("aws", "iam", "", "123", ["role", "/svc/", "deploy"]);
        assert_eq!(arn, "arn:aws:iam::123:role/svc/deploy");

        let none: [&str; 0] = [];
        assert_eq!(Arn::new("", "", "", "", none), Arn::BASE);
    }

    #[test]
    fn test_resource_subfields() {
        let r = Arn::BASE.with_resource("x:y:z").unwrap();
        assert_eq!(r.resource_type().unwrap(), "x");
        assert_eq!(r.field(4).unwrap(), "x:y:z");
        assert_eq!(r.field(5).unwrap(), "y:z");
        assert_eq!(r.field(6).unwrap(), "z");
        assert!(r.field(7).unwrap_err().is_malformed());

        let r = r.with_field(5, "q").unwrap();
        assert_eq!(r, "arn:::::x:q");
    }

    #[test]
    fn test_with_field_replaces_one_field() {
        let arn = Arn::from("arn:aws:ec2:us-east-1:123456789012:instance/i-1");
        let moved = arn.with_region("eu-west-1").unwrap();
        assert_eq!(moved, "arn:aws:ec2:eu-west-1:123456789012:instance/i-1");
        assert_eq!(arn.region().unwrap(), "us-east-1");

        let blank = arn.with_account("").unwrap();
        assert_eq!(blank, "arn:aws:ec2:us-east-1::instance/i-1");
    }

    #[test]
    fn test_with_overlays_non_empty_fields() {
        let base = Arn::from("arn:aws:s3:::bucket");
        let overlay = Arn::from("arn:aws-cn::::other");
        assert_eq!(base.with(&overlay).unwrap(), "arn:aws-cn:s3:::other");
        assert!(base.with(&Arn::from("nope")).is_err());
    }

    #[test]
    fn test_invalid() {
        assert!(!Arn::from("arn:").is_valid());
        assert!(!Arn::default().is_valid());
        let base = Arn::BASE;
        assert!(!Arn::from(&base.as_str()[3..]).is_valid());
        assert!(!Arn::from(&base.as_str()[..base.as_str().len() - 1]).is_valid());

        assert!(Arn::from("arn:").partition().is_err());
        assert!(Arn::default().resource_type().is_err());
        assert_eq!(
            Arn::default().path().unwrap_err().to_string(),
            "invalid arn: "
        );
        assert_eq!(Arn::from("x").name().unwrap_err().to_string(), "invalid arn: x");
        assert_eq!(
            Arn::from("arn::::").resource().unwrap_err().to_string(),
            "invalid arn or field index 4: arn::::"
        );
        assert!(Arn::from("arn::::").path().unwrap_err().is_malformed());
        assert!(Arn::from("arn::::").with_name("x").unwrap_err().is_malformed());
        assert!(Arn::from("arn::::").with_path("/x").unwrap_err().is_malformed());
    }

    #[test]
    fn test_no_path() {
        let err = Arn::BASE.with_path("/").unwrap_err();
        assert!(err.is_no_path());
        assert!(!err.is_malformed());
        assert!(Arn::BASE.with_path_name("/a").unwrap_err().is_no_path());
        assert!(Arn::from("arn:::::x").path_name().unwrap_err().is_no_path());
    }

    #[test]
    fn test_with_path_normalizes() {
        let arn = Arn::from("arn:aws:iam::123:role/a/b/name");
        assert_eq!(arn.with_path("x/./y//").unwrap(), "arn:aws:iam::123:role/x/y/name");
        assert_eq!(arn.with_path("/").unwrap(), "arn:aws:iam::123:role/name");
        assert_eq!(
            arn.with_path_name("p//q/other").unwrap(),
            "arn:aws:iam::123:role/p/q/other"
        );
        assert_eq!(arn.with_path_name("solo").unwrap(), "arn:aws:iam::123:role/solo");
        assert_eq!(arn.with_name("n2").unwrap(), "arn:aws:iam::123:role/a/b/n2");
    }

    #[test]
    fn test_with_name_without_separator() {
        let arn = Arn::from("arn:aws:s3:::bucket");
        assert_eq!(arn.with_name("other").unwrap(), "arn:aws:s3:::other");
    }

    #[test]
    fn test_ctx_extraction() {
        let arn = Arn::from("arn:aws:ec2:us-east-1:123456789012:instance/i-1");
        assert_eq!(
            arn.ctx().unwrap(),
            Ctx::new("aws", "us-east-1", "123456789012")
        );
    }

    #[test]
    fn test_optional_conversion() {
        assert_eq!(Arn::from_optional(Arn::BASE.to_optional().as_deref()), Arn::BASE);
        assert_eq!(Arn::from_optional(None), Arn::default());
        assert_eq!(Arn::from(None::<String>), Arn::from(""));
        assert_eq!(Arn::default().to_optional(), Some(String::new()));
    }

    #[test]
    fn test_parse() {
        let arn: Arn = "arn:aws:s3:::bucket".parse().unwrap();
        assert_eq!(arn.service().unwrap(), "s3");
        let err = "arn:aws:s3".parse::<Arn>().unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_json_roundtrip() {
        let arn = Arn::from("arn:aws:s3:::bucket");
        let json = serde_json::to_string(&arn).unwrap();
        assert_eq!(json, "\"arn:aws:s3:::bucket\"");
        let parsed: Arn = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, arn);

        let empty: Arn = serde_json::from_str("\"\"").unwrap();
        assert!(empty.is_empty());
        assert!(serde_json::from_str::<Arn>("\"arn:x\"").is_err());
    }
}
