//! Formatting helpers for presenting figures.

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Render a bound without a trailing `.0` for whole numbers.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(94.7), "94.7%");
        assert_eq!(format_percent(90.0), "90.0%");
    }

    #[test]
    fn whole_numbers_drop_the_fraction() {
        assert_eq!(format_number(500.0), "500");
        assert_eq!(format_number(0.5), "0.5");
    }
}
