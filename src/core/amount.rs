use crate::domain::model::Amount;
use crate::utils::error::InputError;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

// sign, integer digits, fraction digits, exponent; `_` only between digits
static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([+-]?)((?:[0-9](?:_?[0-9])*)?)(?:\.((?:[0-9](?:_?[0-9])*)?))?(?:[eE]([+-]?[0-9](?:_?[0-9])*))?$",
    )
    .unwrap()
});

/// Parses user-entered text into a positive [`Amount`].
///
/// Surrounding whitespace is ignored. Plain (`50`, `20.5`, `.5`, `5.`,
/// `1_000`) and scientific (`1e3`, `2.5E-1`) forms are accepted. The value is
/// built exactly from its digits: anything the decimal type cannot hold
/// without rounding is not a number, whatever the spelling.
pub fn parse_amount(text: &str) -> Result<Amount, InputError> {
    let caps = AMOUNT_PATTERN
        .captures(text.trim())
        .ok_or(InputError::NotANumber)?;

    let negative = &caps[1] == "-";
    let int_part = caps.get(2).map_or(String::new(), |m| m.as_str().replace('_', ""));
    let frac_part = caps.get(3).map_or(String::new(), |m| m.as_str().replace('_', ""));

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(InputError::NotANumber);
    }

    let exponent: i64 = match caps.get(4) {
        Some(m) => m
            .as_str()
            .replace('_', "")
            .parse()
            .map_err(|_| InputError::NotANumber)?,
        None => 0,
    };

    let all_digits = format!("{}{}", int_part, frac_part);
    let mut digits = all_digits.trim_start_matches('0').to_string();

    if digits.is_empty() || negative {
        return Err(InputError::NonPositive);
    }

    // value = digits * 10^-scale
    let mut scale = (frac_part.len() as i64)
        .checked_sub(exponent)
        .ok_or(InputError::NotANumber)?;

    while digits.ends_with('0') {
        digits.pop();
        scale = scale.saturating_sub(1);
    }

    let mut mantissa: i128 = digits.parse().map_err(|_| InputError::NotANumber)?;
    if scale < 0 {
        let shift = u32::try_from(scale.unsigned_abs()).map_err(|_| InputError::NotANumber)?;
        mantissa = 10i128
            .checked_pow(shift)
            .and_then(|factor| mantissa.checked_mul(factor))
            .ok_or(InputError::NotANumber)?;
        scale = 0;
    }
    let scale = u32::try_from(scale).map_err(|_| InputError::NotANumber)?;

    let value = Decimal::try_from_i128_with_scale(mantissa, scale)
        .map_err(|_| InputError::NotANumber)?;

    Amount::new(value).ok_or(InputError::NonPositive)
}

impl FromStr for Amount {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_amount(s)
    }
}
