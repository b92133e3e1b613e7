//! Conversion between on-chain fixed-point integers and display decimals.
//!
//! Token amounts travel through the registry and token contracts as decimal
//! digit strings holding an integer number of the smallest token units, with
//! an implicit scale of `10^decimals` (24 for NEAR-style tokens).
//! [`Converter`] turns them into [`UD256`] decimals for display and back.
//!
//! All conversions operate on the decimal digits directly, so no precision
//! is lost other than the explicit rounding to the configured number of
//! display places. Rounding is half to even in both directions.

use std::{fmt, str::FromStr};

use fastnum::{D256, UD256};
use serde::Serialize;

use crate::error::AmountError;

/// Scale exponent of registry and token amounts.
pub const DEFAULT_SCALE_EXPONENT: u8 = 24;

/// Significant decimal digits [`UD256`] holds without rounding.
const MAX_SIGNIFICANT_DIGITS: usize = 77;

/// Non-negative integer amount in the smallest token units.
///
/// Always a non-empty string of ASCII digits: no sign, decimal point or
/// radix prefix. Leading zeros are tolerated on input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FixedPointAmount(String);

impl FixedPointAmount {
    /// Builds the amount from digits already known to be valid, stripping
    /// leading zeros.
    fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        Self(if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() })
    }

    pub fn as_str(&self) -> &str { &self.0 }

    pub fn into_string(self) -> String { self.0 }

    pub fn is_zero(&self) -> bool { self.0.bytes().all(|b| b == b'0') }
}

impl FromStr for FixedPointAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_digit_string(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(AmountError::InvalidAmountFormat(s.to_string()))
        }
    }
}

impl fmt::Display for FixedPointAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl AsRef<str> for FixedPointAmount {
    fn as_ref(&self) -> &str { &self.0 }
}

/// Converter of fixed-point <-> decimal numbers for one token scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Converter {
    decimals: u8,
    display_places: u8,
}

impl Default for Converter {
    fn default() -> Self { Self::new(DEFAULT_SCALE_EXPONENT) }
}

impl Converter {
    /// Converter for amounts scaled by `10^decimals`, displaying every
    /// fractional digit the scale carries.
    pub const fn new(decimals: u8) -> Self { Self { decimals, display_places: decimals } }

    /// Limits display precision to `places` fractional digits.
    /// Clamped to the scale exponent.
    pub const fn with_display_places(self, places: u8) -> Self {
        let display_places = if places < self.decimals { places } else { self.decimals };
        Self { decimals: self.decimals, display_places }
    }

    /// Scale exponent.
    pub fn decimals(&self) -> u8 { self.decimals }

    /// Fractional digits kept by [`Self::to_display`].
    pub fn display_places(&self) -> u8 { self.display_places }

    /// Converts a raw fixed-point digit string into a display decimal,
    /// rounded half to even at [`Self::display_places`].
    pub fn to_display(&self, raw: &str) -> Result<UD256, AmountError> {
        if !is_digit_string(raw) {
            return Err(AmountError::InvalidAmountFormat(raw.to_string()));
        }
        let decimals = self.decimals as usize;
        let places = self.display_places as usize;

        // At least one integer digit in front of the decimal point
        let padded = format!("{:0>width$}", raw.trim_start_matches('0'), width = decimals + 1);
        let keep = padded.len() - decimals + places;
        let rounded = round_half_even(&padded[..keep], &padded[keep..]);

        let (integer, fraction) = rounded.split_at(rounded.len() - places);
        let text = join_plain(integer, fraction);

        // Digits from the first to the last non-zero one
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let significant = digits.trim_start_matches('0').trim_end_matches('0');
        if significant.len() > MAX_SIGNIFICANT_DIGITS {
            return Err(AmountError::AmountOutOfRange(raw.to_string()));
        }
        let fraction_len = text.split_once('.').map_or(0, |(_, f)| f.len());
        let exponent = (digits.len() - digits.trim_end_matches('0').len()) as i64 - fraction_len as i64;
        text.parse::<UD256>()
            .or_else(|_| format!("{significant}e{exponent}").parse::<UD256>())
            .map_err(|_| AmountError::AmountOutOfRange(raw.to_string()))
    }

    /// Converts a display decimal into a fixed-point amount, rounding digits
    /// below the scale half to even.
    pub fn to_fixed_point(&self, value: D256) -> Result<FixedPointAmount, AmountError> {
        if value.is_nan() || value.is_infinite() || (value.is_negative() && !value.is_zero()) {
            return Err(AmountError::InvalidAmountValue(value.to_string()));
        }
        if value.is_zero() {
            return Ok(FixedPointAmount::from_digits("0"));
        }
        let text = value.to_string();
        self.scale_up(&text)
            .ok_or(AmountError::InvalidAmountValue(text))
    }

    /// Same as [`Self::to_fixed_point`] for native floats, e.g. amounts typed
    /// in by a user.
    pub fn to_fixed_point_f64(&self, value: f64) -> Result<FixedPointAmount, AmountError> {
        if !value.is_finite() || value < 0.0 {
            return Err(AmountError::InvalidAmountValue(value.to_string()));
        }
        // Display of f64 never uses exponent notation
        let text = value.abs().to_string();
        self.scale_up(&text)
            .ok_or(AmountError::InvalidAmountValue(text))
    }

    /// Parses user input into a fixed-point amount.
    pub fn parse_display(&self, input: &str) -> Result<FixedPointAmount, AmountError> {
        let value = input
            .trim()
            .parse::<D256>()
            .map_err(|_| AmountError::InvalidAmountValue(input.to_string()))?;
        self.to_fixed_point(value)
    }

    /// Multiplies decimal text (plain or exponent notation) by the scale and
    /// rounds to an integer.
    fn scale_up(&self, text: &str) -> Option<FixedPointAmount> {
        let (digits, exponent) = split_decimal(text)?;
        let shift = exponent + i64::from(self.decimals);
        if shift >= 0 {
            let zeros = "0".repeat(usize::try_from(shift).ok()?);
            Some(FixedPointAmount::from_digits(&format!("{digits}{zeros}")))
        } else {
            let dropped = usize::try_from(shift.unsigned_abs()).ok()?;
            let padded = format!("{:0>width$}", digits, width = dropped + 1);
            let (kept, rest) = padded.split_at(padded.len() - dropped);
            Some(FixedPointAmount::from_digits(&round_half_even(kept, rest)))
        }
    }
}

/// Renders the decimal in plain notation: no exponent, no trailing
/// fractional zeros.
pub fn format_plain(value: &UD256) -> String {
    let text = value.to_string();
    let Some((digits, exponent)) = split_decimal(&text) else {
        return text;
    };
    match usize::try_from(exponent) {
        Ok(zeros) => join_plain(&format!("{digits}{}", "0".repeat(zeros)), ""),
        Err(_) => {
            let places = exponent.unsigned_abs() as usize;
            let padded = format!("{:0>width$}", digits, width = places + 1);
            let (integer, fraction) = padded.split_at(padded.len() - places);
            join_plain(integer, fraction)
        },
    }
}

/// Serializes a decimal as a plain string, keeping every digit.
pub(crate) fn serialize_decimal<S>(value: &UD256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_plain(value))
}

fn is_digit_string(s: &str) -> bool { !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) }

/// Splits unsigned decimal text, plain or in exponent notation, into its
/// digits and the power of ten they are scaled by.
fn split_decimal(text: &str) -> Option<(String, i64)> {
    let text = text.strip_prefix('+').unwrap_or(text);
    let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => (&text[..pos], text[pos + 1..].parse::<i64>().ok()?),
        None => (text, 0),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{integer}{fraction}");
    if !is_digit_string(&digits) {
        return None;
    }
    Some((digits, exponent.checked_sub(i64::try_from(fraction.len()).ok()?)?))
}

/// Joins integer and fractional digits, dropping redundant zeros.
fn join_plain(integer: &str, fraction: &str) -> String {
    let integer = match integer.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    match fraction.trim_end_matches('0') {
        "" => integer.to_string(),
        fraction => format!("{integer}.{fraction}"),
    }
}

/// Rounds the digit string `kept` given the digits that were cut off after
/// it. Ties go to the even neighbour.
fn round_half_even(kept: &str, dropped: &str) -> String {
    let mut rest = dropped.bytes();
    let first = rest.next().unwrap_or(b'0');
    let rest_nonzero = rest.any(|b| b != b'0');
    let kept_odd = kept
        .bytes()
        .last()
        .is_some_and(|b| (b - b'0') % 2 == 1);

    let round_up = first > b'5' || (first == b'5' && (rest_nonzero || kept_odd));
    if round_up { increment(kept) } else { kept.to_string() }
}

fn increment(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            carry = false;
            break;
        }
    }
    if carry {
        bytes.insert(0, b'1');
    }
    bytes.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use fastnum::udec256;
    use proptest::prelude::*;

    use super::*;

    fn dec(s: &str) -> D256 { s.parse().unwrap() }

    fn near() -> Converter { Converter::new(DEFAULT_SCALE_EXPONENT) }

    #[test]
    fn zero_and_whole_units() {
        let c = near();
        assert_eq!(c.to_display("0").unwrap(), UD256::ZERO);
        assert_eq!(c.to_display("000").unwrap(), UD256::ZERO);
        assert_eq!(c.to_display(&format!("1{}", "0".repeat(24))).unwrap(), udec256!(1));
        assert_eq!(c.to_display("500000000000000000000000").unwrap(), udec256!(0.5));
        assert_eq!(c.to_display("100000000000000000000000").unwrap(), udec256!(0.1));
        assert_eq!(c.to_display("1").unwrap(), udec256!(0.000000000000000000000001));
        assert_eq!(
            c.to_display("0001234500000000000000000000").unwrap(),
            udec256!(1234.5)
        );
    }

    #[test]
    fn rejects_non_digit_amounts() {
        let c = near();
        for raw in ["", "-1", "1.5", "0x10", "1e24", " 1", "١"] {
            assert_eq!(
                c.to_display(raw),
                Err(AmountError::InvalidAmountFormat(raw.to_string())),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn rejects_amounts_beyond_decimal_precision() {
        let c = Converter::new(0);
        let raw = "9".repeat(MAX_SIGNIFICANT_DIGITS + 1);
        assert_eq!(c.to_display(&raw), Err(AmountError::AmountOutOfRange(raw.clone())));
        assert!(c.to_display(&raw[1..]).is_ok());
    }

    #[test]
    fn trailing_integer_zeros_are_not_significant() {
        let c = Converter::new(0);
        let raw = format!("1{}", "0".repeat(MAX_SIGNIFICANT_DIGITS));
        assert_eq!(format_plain(&c.to_display(&raw).unwrap()), raw);

        let raw = format!("{}{}", "9".repeat(MAX_SIGNIFICANT_DIGITS), "0".repeat(10));
        assert!(c.to_display(&raw).is_ok());

        let raw = format!("{}{}", "1".repeat(MAX_SIGNIFICANT_DIGITS + 1), "0".repeat(10));
        assert_eq!(c.to_display(&raw), Err(AmountError::AmountOutOfRange(raw.clone())));
    }

    #[test]
    fn display_rounding_is_half_even() {
        let c = Converter::new(4).with_display_places(2);
        assert_eq!(c.to_display("12345").unwrap(), udec256!(1.23));
        assert_eq!(c.to_display("12350").unwrap(), udec256!(1.24));
        assert_eq!(c.to_display("12250").unwrap(), udec256!(1.22));
        assert_eq!(c.to_display("12251").unwrap(), udec256!(1.23));
        assert_eq!(c.to_display("99950").unwrap(), udec256!(10));
        assert_eq!(c.to_display("49").unwrap(), UD256::ZERO);
        assert_eq!(c.to_display("51").unwrap(), udec256!(0.01));
    }

    #[test]
    fn display_places_are_clamped_to_scale() {
        let c = Converter::new(6).with_display_places(30);
        assert_eq!(c.display_places(), 6);
        assert_eq!(c.to_display("1").unwrap(), udec256!(0.000001));
    }

    #[test]
    fn fixed_point_from_decimal() {
        let c = near();
        assert_eq!(c.to_fixed_point(dec("0")).unwrap().as_str(), "0");
        assert_eq!(c.to_fixed_point(dec("0.5")).unwrap().as_str(), "500000000000000000000000");
        assert_eq!(
            c.to_fixed_point(dec("12.000001")).unwrap().as_str(),
            "12000001000000000000000000"
        );
        assert_eq!(
            c.to_fixed_point(dec("1e-24")).unwrap().as_str(),
            "1"
        );
    }

    #[test]
    fn fixed_point_rounds_below_scale_half_even() {
        let c = Converter::new(2);
        assert_eq!(c.to_fixed_point(dec("1.005")).unwrap().as_str(), "100");
        assert_eq!(c.to_fixed_point(dec("1.015")).unwrap().as_str(), "102");
        assert_eq!(c.to_fixed_point(dec("1.0051")).unwrap().as_str(), "101");
        assert_eq!(c.to_fixed_point(dec("0.004")).unwrap().as_str(), "0");
    }

    #[test]
    fn fixed_point_rejects_negative_and_non_finite() {
        let c = near();
        assert!(matches!(
            c.to_fixed_point(dec("-1")),
            Err(AmountError::InvalidAmountValue(_))
        ));
        for value in [-0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                c.to_fixed_point_f64(value),
                Err(AmountError::InvalidAmountValue(_))
            ));
        }
    }

    #[test]
    fn negative_zero_is_zero() {
        let c = near();
        assert_eq!(c.to_fixed_point(dec("-0")).unwrap().as_str(), "0");
        assert_eq!(c.to_fixed_point(dec("-0.000")).unwrap().as_str(), "0");
        assert_eq!(c.parse_display("-0").unwrap().as_str(), "0");
        assert_eq!(c.to_fixed_point_f64(-0.0).unwrap().as_str(), "0");
        assert!(matches!(c.parse_display("-0.1"), Err(AmountError::InvalidAmountValue(_))));
    }

    #[test]
    fn fixed_point_from_float_and_input() {
        let c = near();
        assert_eq!(c.to_fixed_point_f64(0.0).unwrap().as_str(), "0");
        assert_eq!(c.to_fixed_point_f64(0.1).unwrap().as_str(), "100000000000000000000000");
        assert_eq!(c.to_fixed_point_f64(250.0).unwrap().as_str(), "250000000000000000000000000");
        assert_eq!(c.parse_display(" 1.5 ").unwrap().as_str(), "1500000000000000000000000");
        assert!(matches!(c.parse_display("abc"), Err(AmountError::InvalidAmountValue(_))));
    }

    #[test]
    fn round_trip_stays_within_last_display_place() {
        let c = Converter::new(8).with_display_places(3);
        let unit = 10u128.pow(8 - 3);
        for raw in ["0", "1", "49999", "50000", "150000", "123456789", "99999999999", "100000000"] {
            let shown = c.to_display(raw).unwrap();
            let back = c.to_fixed_point(dec(&shown.to_string())).unwrap();
            let diff = back.as_str().parse::<u128>().unwrap().abs_diff(raw.parse().unwrap());
            assert!(diff < unit, "{raw} -> {shown} -> {back}");
        }
    }

    #[test]
    fn fixed_point_amount_parsing() {
        assert_eq!("007".parse::<FixedPointAmount>().unwrap().as_str(), "007");
        assert!(!"007".parse::<FixedPointAmount>().unwrap().is_zero());
        assert!("000".parse::<FixedPointAmount>().unwrap().is_zero());
        assert_eq!(
            "-7".parse::<FixedPointAmount>(),
            Err(AmountError::InvalidAmountFormat("-7".to_string()))
        );
    }

    #[test]
    fn plain_formatting() {
        assert_eq!(format_plain(&udec256!(0.000000000000000000000001)), "0.000000000000000000000001");
        assert_eq!(format_plain(&udec256!(1234.5)), "1234.5");
        assert_eq!(format_plain(&udec256!(1000)), "1000");
        assert_eq!(format_plain(&UD256::ZERO), "0");
        assert_eq!(split_decimal("1.25E+3"), Some(("125".to_string(), 1)));
        assert_eq!(split_decimal("5e-7"), Some(("5".to_string(), -7)));
        assert_eq!(split_decimal("-5"), None);
    }

    fn unit(exponent: u8) -> UD256 { format!("1{}", "0".repeat(exponent as usize)).parse().unwrap() }

    proptest! {
        #[test]
        fn display_is_never_negative(raw in "[0-9]{1,60}", places in 0u8..=24) {
            let shown = near().with_display_places(places).to_display(&raw).unwrap();
            prop_assert!(shown >= UD256::ZERO);
        }

        #[test]
        fn round_trip_within_last_display_place(raw in "[0-9]{1,60}", places in 0u8..=24) {
            let c = near().with_display_places(places);
            let shown = c.to_display(&raw).unwrap();
            let back = c.to_fixed_point(dec(&format_plain(&shown))).unwrap();

            let original = match raw.trim_start_matches('0') {
                "" => UD256::ZERO,
                digits => digits.parse::<UD256>().unwrap(),
            };
            let restored: UD256 = back.as_str().parse().unwrap();
            let diff = if restored > original { restored - original } else { original - restored };
            prop_assert!(diff < unit(DEFAULT_SCALE_EXPONENT - places), "{} -> {} -> {}", raw, shown, back);
        }
    }

    #[test]
    fn increment_carries() {
        assert_eq!(increment("199"), "200");
        assert_eq!(increment("999"), "1000");
        assert_eq!(increment(""), "1");
    }
}
