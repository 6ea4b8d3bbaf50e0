//! Filter values for list query parameters.
//!
//! The service reads an operator from a bracketed prefix on the parameter
//! value, e.g. `name=[like]%25acme%25` or `amount=[range]10,20`. Plain values
//! mean equality.
//!
//! ```
//! use eboekhouden::filter;
//! use eboekhouden::ListQuery;
//!
//! let query = ListQuery::new()
//!     .limit(50)
//!     .param("name", filter::like("%acme%"))
//!     .param("id", filter::gte(1000));
//!
//! assert_eq!(filter::like("%acme%"), "[like]%25acme%25");
//! ```

use std::fmt::Display;

mod sealed {
    pub trait Sealed {}
}

/// Primitive numbers accepted by the comparison and range filters.
///
/// This trait is sealed.
pub trait Numeric: Display + Copy + sealed::Sealed {}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl Numeric for $t {}
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

fn escape_wildcards(value: &str) -> String {
    value.replace('%', "%25")
}

/// Equality. The value is sent as-is.
pub fn eq<T: Display>(value: T) -> String {
    value.to_string()
}

/// Inequality: `[not_eq]{value}`.
pub fn not_eq<T: Display>(value: T) -> String {
    format!("[not_eq]{}", value)
}

/// Pattern match: `[like]{value}`, with `%` escaped to `%25`.
pub fn like(value: &str) -> String {
    format!("[like]{}", escape_wildcards(value))
}

/// Negated pattern match: `[not_like]{value}`, with `%` escaped to `%25`.
pub fn not_like(value: &str) -> String {
    format!("[not_like]{}", escape_wildcards(value))
}

/// Greater than: `[gt]{value}`.
pub fn gt<N: Numeric>(value: N) -> String {
    format!("[gt]{}", value)
}

/// Greater than or equal: `[gte]{value}`.
pub fn gte<N: Numeric>(value: N) -> String {
    format!("[gte]{}", value)
}

/// Less than: `[lt]{value}`.
pub fn lt<N: Numeric>(value: N) -> String {
    format!("[lt]{}", value)
}

/// Less than or equal: `[lte]{value}`.
pub fn lte<N: Numeric>(value: N) -> String {
    format!("[lte]{}", value)
}

/// Inclusive numeric range: `[range]{min},{max}`.
pub fn range<N: Numeric>(min: N, max: N) -> String {
    format!("[range]{},{}", min, max)
}

/// Inclusive date range: `[range]{start},{end}`.
///
/// Dates are expected as `YYYY-MM-DD`. Anything whose `Display` output has
/// that shape works, including `chrono::NaiveDate`. The dates are not
/// validated.
///
/// ```
/// use eboekhouden::filter::date_range;
///
/// assert_eq!(
///     date_range("2023-01-01", "2023-12-31"),
///     "[range]2023-01-01,2023-12-31"
/// );
/// ```
pub fn date_range<D: Display>(start: D, end: D) -> String {
    format!("[range]{},{}", start, end)
}
