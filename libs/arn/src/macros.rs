//! Macros for generating named field accessors.

/// Generates a getter and a `with_*` setter for each listed field index.
///
/// Both delegate to [`Arn::field`](crate::Arn::field) and
/// [`Arn::with_field`](crate::Arn::with_field), so named and indexed access
/// can never disagree.
///
/// # Example
///
/// ```ignore
/// field_accessors! {
///     0 => partition, with_partition, "partition";
///     1 => service, with_service, "service";
/// }
/// ```
macro_rules! field_accessors {
    ($($index:literal => $get:ident, $with:ident, $label:literal;)*) => {
        impl $crate::Arn {
            $(
                #[doc = concat!("Returns the ARN ", $label, ".")]
                pub fn $get(&self) -> Result<&str, $crate::ArnError> {
                    self.field($index)
                }

                #[doc = concat!("Returns a new ARN with the ", $label, " replaced by `value`.")]
                pub fn $with(&self, value: &str) -> Result<$crate::Arn, $crate::ArnError> {
                    self.with_field($index, value)
                }
            )*
        }
    };
}

pub(crate) use field_accessors;
