//! Human-readable rendering of conversion results
//!
//! Small and large magnitudes switch to scientific notation, integers are
//! grouped by thousands, everything else is rounded to a handful of
//! significant digits. Significant-digit and scientific rounding work on the
//! exact decimal expansion of the binary value; the cap on fraction digits
//! rounds the shortest decimal form of the already-rounded value. Ties break
//! away from zero everywhere.

/// Values below this magnitude render in scientific notation
const SCIENTIFIC_BELOW: f64 = 0.000001;
/// Values above this magnitude render in scientific notation
const SCIENTIFIC_ABOVE: f64 = 999_999_999.0;
/// Mantissa decimals in scientific notation
const EXPONENT_DECIMALS: usize = 6;
/// Cap on fractional digits in fixed notation
const MAX_FRACTION_DIGITS: usize = 10;
/// Extra digits requested from the formatter so tie detection sees the exact tail
const GUARD_DIGITS: usize = 40;

/// Format a number for display.
///
/// ```
/// use unitref_units::format_number;
///
/// assert_eq!(format_number(0.0), "0");
/// assert_eq!(format_number(1e9), "1.000000e+9");
/// assert_eq!(format_number(12345.0), "12,345");
/// assert_eq!(format_number(1.0 / 3.0), "0.33333333");
/// ```
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude < SCIENTIFIC_BELOW || magnitude > SCIENTIFIC_ABOVE {
        return to_exponential(n, EXPONENT_DECIMALS);
    }

    if n.fract() == 0.0 {
        return with_sign(n, group_thousands(&format!("{}", magnitude)));
    }

    if n.is_nan() {
        return "NaN".to_string();
    }

    let precision = if magnitude < 1.0 { 8 } else { 6 };
    let rounded = to_precision(n, precision);
    with_sign(rounded, to_fixed_trimmed(rounded.abs(), MAX_FRACTION_DIGITS))
}

/// Scientific notation with a fixed number of mantissa decimals and a
/// signed exponent, e.g. `-1.234568e-7`.
fn to_exponential(n: f64, decimals: usize) -> String {
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let (digits, exponent) = significant_digits(n.abs(), decimals + 1);
    let (lead, rest) = digits.split_at(1);
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    let body = if rest.is_empty() {
        format!("{}e{}{}", lead, exp_sign, exponent.abs())
    } else {
        format!("{}.{}e{}{}", lead, rest, exp_sign, exponent.abs())
    };
    with_sign(n, body)
}

/// Round to `precision` significant digits and return the nearest double.
fn to_precision(n: f64, precision: usize) -> f64 {
    let (digits, exponent) = significant_digits(n.abs(), precision);
    let scale = exponent - (precision as i32 - 1);
    let magnitude = format!("{}e{}", digits, scale)
        .parse::<f64>()
        .unwrap_or(f64::NAN);
    magnitude.copysign(n)
}

/// First `count` significant decimal digits of a positive finite value,
/// rounded half away from zero, with the decimal exponent of the first digit.
fn significant_digits(magnitude: f64, count: usize) -> (String, i32) {
    let exact = format!("{:.*e}", count - 1 + GUARD_DIGITS, magnitude);
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);

    let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    if round_half_up(&mut digits, count) {
        digits.insert(0, b'1');
        digits.truncate(count);
        exponent += 1;
    }
    (String::from_utf8_lossy(&digits).into_owned(), exponent)
}

/// Fixed notation of a positive value with at most `max_fraction` decimals,
/// trailing zeros dropped and the integer part grouped.
///
/// Rounding starts from the shortest decimal that reads back as the same
/// double, not from its exact binary expansion.
fn to_fixed_trimmed(magnitude: f64, max_fraction: usize) -> String {
    let (int_part, frac_part) = shortest_fixed(magnitude);

    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes()).collect();
    let mut int_len = int_part.len();
    if round_half_up(&mut digits, int_len + max_fraction) {
        digits.insert(0, b'1');
        int_len += 1;
    }

    let (int_digits, frac_digits) = digits.split_at(int_len);
    let int_text = group_thousands(&String::from_utf8_lossy(int_digits));
    let frac_text = String::from_utf8_lossy(frac_digits);
    let frac_text = frac_text.trim_end_matches('0');
    if frac_text.is_empty() {
        int_text
    } else {
        format!("{}.{}", int_text, frac_text)
    }
}

/// Integer and fraction digits of the shortest round-trip decimal of a
/// positive finite value, e.g. `0.00002283105` gives `("0", "00002283105")`.
fn shortest_fixed(magnitude: f64) -> (String, String) {
    let sci = format!("{:e}", magnitude);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let point = exponent + 1;
    if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        ("0".to_string(), format!("{}{}", zeros, digits))
    } else if point as usize >= digits.len() {
        let zeros = "0".repeat(point as usize - digits.len());
        (format!("{}{}", digits, zeros), String::new())
    } else {
        let (int_part, frac_part) = digits.split_at(point as usize);
        (int_part.to_string(), frac_part.to_string())
    }
}

/// Keep the first `keep` ASCII digits, rounding half up on the digit that
/// follows. Returns true when the carry ran off the front (all nines).
fn round_half_up(digits: &mut Vec<u8>, keep: usize) -> bool {
    let round_up = digits.get(keep).is_some_and(|d| *d >= b'5');
    digits.truncate(keep);
    if !round_up {
        return false;
    }
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

/// Insert `,` between groups of three integer digits
fn group_thousands(int_digits: &str) -> String {
    let len = int_digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int_digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn with_sign(n: f64, body: String) -> String {
    if n.is_sign_negative() {
        format!("-{}", body)
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_scientific_large() {
        assert_eq!(format_number(1e9), "1.000000e+9");
        assert_eq!(format_number(-2.5e12), "-2.500000e+12");
        assert_eq!(format_number(9_461_000_000_000_000.0), "9.461000e+15");
    }

    #[test]
    fn test_scientific_small() {
        assert_eq!(format_number(1e-7), "1.000000e-7");
        assert_eq!(format_number(-1.2345678e-7), "-1.234568e-7");
        assert_eq!(format_number(1.602176634e-19), "1.602177e-19");
    }

    #[test]
    fn test_scientific_thresholds() {
        assert_eq!(format_number(999_999_999.0), "999,999,999");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_scientific_carry() {
        assert_eq!(format_number(9.9999999e10), "1.000000e+11");
    }

    #[test]
    fn test_integers_grouped() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(32.0), "32");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(-12345.0), "-12,345");
        assert_eq!(format_number(3_600_000.0), "3,600,000");
    }

    #[test]
    fn test_significant_digits() {
        assert_eq!(format_number(1.0 / 3.0), "0.33333333");
        assert_eq!(format_number(39.37007874015748), "39.3701");
        assert_eq!(format_number(0.621371192237334), "0.62137119");
        assert_eq!(format_number(1234.56789), "1,234.57");
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(0.3048), "0.3048");
    }

    #[test]
    fn test_rounding_to_integer_groups() {
        assert_eq!(format_number(123456.789), "123,457");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_number(100000.5), "100,001");
        assert_eq!(format_number(-100000.5), "-100,001");
        assert_eq!(format_number(0.125), "0.125");
    }

    #[test]
    fn test_fraction_digit_cap() {
        // 8 significant digits would need 13 decimals here
        assert_eq!(format_number(0.0000012345678), "0.0000012346");
    }

    #[test]
    fn test_fraction_cap_rounds_shortest_decimal() {
        // 60 / 2628000 rounds to the double printed as 0.00002283105
        assert_eq!(format_number(60.0 / 2_628_000.0), "0.0000228311");
        // 0.37 mm² in square inches, 0.00057350115 after 8 digits
        assert_eq!(format_number(0.37 / 1_000_000.0 / 0.00064516), "0.0005735012");
        assert_eq!(format_number(20.0 / 101_325.0), "0.0001973847");
    }

    #[test]
    fn test_shortest_fixed() {
        assert_eq!(shortest_fixed(0.00002283105), ("0".to_string(), "00002283105".to_string()));
        assert_eq!(shortest_fixed(1234.5), ("1234".to_string(), "5".to_string()));
        assert_eq!(shortest_fixed(1200.0), ("1200".to_string(), String::new()));
        assert_eq!(shortest_fixed(0.5), ("0".to_string(), "5".to_string()));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456789"), "123,456,789");
    }

    #[test]
    fn test_round_half_up_carry() {
        let mut digits = b"9996".to_vec();
        assert!(round_half_up(&mut digits, 3));
        assert_eq!(digits, b"000");
    }
}
