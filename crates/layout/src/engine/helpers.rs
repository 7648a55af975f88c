// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

/// A year span that is safe to divide by.  A timeline whose events all sit in
/// a single year has a span of zero, and the position/length formulas would
/// divide by it; treat such a span as one year instead.  Positions still come
/// out finite (and constant) rather than `NaN`/`Infinity`
pub(crate) fn clamped_span(span: i32) -> f64 {
    f64::from(span.max(1))
}

/// Express a number of years as a percentage of the timeline's span
pub(crate) fn percent_of_span(years: i32, span: i32) -> f64 {
    (f64::from(years) / clamped_span(span)) * 100.0
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clamped_span() {
        assert_eq!(clamped_span(0), 1.0);
        assert_eq!(clamped_span(-3), 1.0);
        assert_eq!(clamped_span(1), 1.0);
        assert_eq!(clamped_span(40), 40.0);
    }

    #[test]
    fn test_percent_of_span() {
        assert_eq!(percent_of_span(2, 4), 50.0);
        assert_eq!(percent_of_span(4, 4), 100.0);
        assert_eq!(percent_of_span(0, 4), 0.0);

        // Zero span must not produce NaN/Infinity
        assert_eq!(percent_of_span(0, 0), 0.0);
        assert!(percent_of_span(0, 0).is_finite());
    }
}
