/// Format an evaluation result for the display buffer.
///
/// Uses the shortest decimal form that round-trips. `f64`'s `Display` never
/// switches to exponent notation, so the output only contains digits, a
/// leading `-` and at most one `.`. Negative zero is shown as `0`.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_have_no_fraction() {
        assert_eq!(format_value(4.0), "4");
        assert_eq!(format_value(-12.0), "-12");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn test_shortest_round_trip() {
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_value(2.5), "2.5");
    }

    #[test]
    fn test_no_exponent_notation() {
        assert_eq!(format_value(1e21), "1000000000000000000000");
        assert_eq!(format_value(1e-7), "0.0000001");
    }
}
