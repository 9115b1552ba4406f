/// Price label with precision tiered by magnitude.
///
/// - `value < 100` -> 3 decimals
/// - `value < 1000` -> 2 decimals
/// - otherwise en-US grouping with 1 to 2 fraction digits
pub fn format_price(value: f64) -> String {
    if value < 100.0 {
        to_fixed(value, 3)
    } else if value < 1000.0 {
        to_fixed(value, 2)
    } else {
        format_grouped(value, 1, 2)
    }
}

/// Integer with en-US thousands separators.
pub fn format_size(size: u32) -> String {
    group_thousands(&size.to_string())
}

/// en-US style grouping with a bounded number of fraction digits.
pub fn format_grouped(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    let fixed = to_fixed(value.abs(), max_fraction);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < min_fraction {
        frac.push('0');
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    let grouped = group_thousands(int_part);
    if frac.is_empty() { format!("{sign}{grouped}") } else { format!("{sign}{grouped}.{frac}") }
}

/// Fixed-point rendering that rounds exact decimal ties away from zero, the
/// way `Number.prototype.toFixed` does.
///
/// `{:.N}` already rounds on the exact binary value but sends exact ties to
/// even, so only inputs sitting exactly halfway between two candidates are
/// corrected here.
pub fn to_fixed(value: f64, digits: usize) -> String {
    match tie_rounded_up(value.abs(), digits) {
        Some(units) => {
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{sign}{}", insert_decimal_point(units, digits))
        }
        None => format!("{:.*}", digits, value),
    }
}

/// When `abs == (k + 0.5) / 10^digits` exactly, returns `k + 1`.
///
/// Such a tie is representable only if `5^digits` divides `2k + 1`; the
/// candidate is then rebuilt exactly and compared with `abs`.
fn tie_rounded_up(abs: f64, digits: usize) -> Option<u64> {
    let exp = i32::try_from(digits).ok().filter(|exp| *exp <= 15)?;
    let scaled = abs * 10f64.powi(exp);
    if !scaled.is_finite() || scaled >= 2f64.powi(52) {
        return None;
    }
    let k = scaled.floor();
    let odd = 2.0 * k + 1.0;
    let five_pow = 5f64.powi(exp);
    if odd % five_pow != 0.0 {
        return None;
    }
    let tie = (odd / five_pow) / 2f64.powi(exp + 1);
    (tie == abs).then(|| k as u64 + 1)
}

fn insert_decimal_point(units: u64, digits: usize) -> String {
    let raw = units.to_string();
    if digits == 0 {
        return raw;
    }
    let padded = format!("{:0>width$}", raw, width = digits + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - digits);
    format!("{int_part}.{frac_part}")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_boundaries() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(0.0625, 3), "0.063");
    }

    #[test]
    fn non_ties_keep_nearest_rounding() {
        assert_eq!(to_fixed(0.126, 2), "0.13");
        assert_eq!(to_fixed(0.124, 2), "0.12");
        assert_eq!(to_fixed(77.18, 3), "77.180");
        assert_eq!(to_fixed(-3.0, 1), "-3.0");
    }

    #[test]
    fn fraction_digits_are_bounded() {
        assert_eq!(format_grouped(1000.0, 1, 2), "1,000.0");
        assert_eq!(format_grouped(1000.456, 1, 2), "1,000.46");
        assert_eq!(format_grouped(-2500.5, 1, 2), "-2,500.5");
        assert_eq!(format_grouped(12.0, 0, 2), "12");
    }
}
