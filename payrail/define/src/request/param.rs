//! Conversion of typed values into query and header strings.

use rust_decimal::Decimal;

use crate::model::Amount;

/// A value that can be sent as a query parameter or header.
///
/// Returning `None` omits the parameter entirely; `Option<T>` uses this to
/// skip unset filters.
pub trait ParamValue {
    /// Converts the value to its string form, or `None` to omit it.
    fn into_param(self) -> Option<String>;
}

macro_rules! impl_param_value_via_to_string {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParamValue for $ty {
                fn into_param(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_param_value_via_to_string!(
    String, &str, &String, bool, i32, i64, u32, u64, usize, Amount, Decimal,
);

impl<T: ParamValue> ParamValue for Option<T> {
    fn into_param(self) -> Option<String> {
        self.and_then(ParamValue::into_param)
    }
}
