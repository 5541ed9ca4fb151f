//! Display formatting for population figures. Presentation only.

use crate::utils::math::div_round_half_even;

const MILLION: u64 = 1_000_000;
const THOUSAND: i64 = 1_000;

/// Format a population (or population change) as a short string.
///
/// Values of a million or more render as `"<N> M"` when evenly divisible,
/// otherwise `"<N.d> M"` rounded half to even to one decimal. Everything
/// below a million, negative changes included, renders as `"<N> K"` with
/// floor division by 1,000, so `-18_878` becomes `"-19 K"`.
///
/// ```
/// use popdash::utils::format::format_number;
///
/// assert_eq!(format_number(1_000_000), "1 M");
/// assert_eq!(format_number(1_500_000), "1.5 M");
/// assert_eq!(format_number(999_999), "999 K");
/// assert_eq!(format_number(-18_878), "-19 K");
/// ```
#[must_use]
pub fn format_number(value: i64) -> String {
    match u64::try_from(value) {
        Ok(magnitude) if magnitude >= MILLION => {
            if magnitude % MILLION == 0 {
                format!("{} M", magnitude / MILLION)
            } else {
                let tenths = div_round_half_even(magnitude, MILLION / 10);
                format!("{}.{} M", tenths / 10, tenths % 10)
            }
        }
        _ => format!("{} K", value.div_euclid(THOUSAND)),
    }
}

/// `format_number` for unsigned population counts
#[must_use]
pub fn format_population(population: u64) -> String {
    format_number(i64::try_from(population).unwrap_or(i64::MAX))
}
