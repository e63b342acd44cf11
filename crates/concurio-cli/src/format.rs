//! General-precision float formatting for the summary line.
//!
//! The summary output contract is C's `%g`: six significant digits, trailing
//! zeros stripped, scientific notation outside roughly [1e-4, 1e6). Rust's
//! formatter has no direct equivalent, so this pins the behavior down.

const SIGNIFICANT_DIGITS: i32 = 6;

pub fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let exponent = value.abs().log10().floor() as i32;
    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let formatted = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
        // Rust renders "1.50000e6"; %g renders "1.5e+06".
        let (mantissa, exp) = formatted
            .split_once('e')
            .expect("exponential format always contains 'e'");
        let exp: i32 = exp.parse().expect("exponent is an integer");
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_trailing_zeros(mantissa), sign, exp.abs())
    } else {
        let precision = (SIGNIFICANT_DIGITS - 1 - exponent).max(0) as usize;
        trim_trailing_zeros(&format!("{:.*}", precision, value)).to_string()
    }
}

fn trim_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_have_no_point() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(2.0), "2");
        assert_eq!(format_general(-3.0), "-3");
    }

    #[test]
    fn test_six_significant_digits() {
        assert_eq!(format_general(149.5), "149.5");
        assert_eq!(format_general(1.1315834336), "1.13158");
        assert_eq!(format_general(123456.4), "123456");
    }

    #[test]
    fn test_small_magnitudes() {
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(0.00001), "1e-05");
    }

    #[test]
    fn test_large_magnitudes() {
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(1000000.0), "1e+06");
    }
}
