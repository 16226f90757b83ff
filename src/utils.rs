use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{self, Read};

/// byte order of the values in a binary plot3d file
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Endian {
    #[default]
    Little,
    Big,
}

impl Endian {
    pub(crate) fn read_i32<R: Read>(self, reader: &mut R) -> io::Result<i32> {
        match self {
            Endian::Little => reader.read_i32::<LittleEndian>(),
            Endian::Big => reader.read_i32::<BigEndian>(),
        }
    }

    pub(crate) fn read_u32<R: Read>(self, reader: &mut R) -> io::Result<u32> {
        match self {
            Endian::Little => reader.read_u32::<LittleEndian>(),
            Endian::Big => reader.read_u32::<BigEndian>(),
        }
    }

    pub(crate) fn read_f32<R: Read>(self, reader: &mut R) -> io::Result<f32> {
        match self {
            Endian::Little => reader.read_f32::<LittleEndian>(),
            Endian::Big => reader.read_f32::<BigEndian>(),
        }
    }

    pub(crate) fn read_f64<R: Read>(self, reader: &mut R) -> io::Result<f64> {
        match self {
            Endian::Little => reader.read_f64::<LittleEndian>(),
            Endian::Big => reader.read_f64::<BigEndian>(),
        }
    }
}

#[cfg(test)]
pub(crate) fn bytes_to_float(bytes: &[u8]) -> f64 {
    let mut arr = [0; 8];
    bytes
        .iter()
        .enumerate()
        .for_each(|(idx, value)| arr[idx] = *value);
    f64::from_le_bytes(arr)
}

/// integer value of the leading digits of `text`, in the manner of C's `atoi`
///
/// leading whitespace and a single sign are skipped, and conversion stops at the first
/// character that is not a digit. Text without leading digits is `0`.
pub(crate) fn leading_integer(text: &str) -> i64 {
    integer_prefix(text).unwrap_or(0)
}

/// like [`leading_integer`] but `None` when there are no leading digits at all
pub(crate) fn integer_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    if end == 0 {
        return None;
    }

    let magnitude = digits[..end]
        .bytes()
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    Some(if negative { -magnitude } else { magnitude })
}

/// split a line on whitespace and punctuation. Signs and decimal points stay with
/// the token they belong to.
pub(crate) fn tokenise(line: &str) -> Vec<&str> {
    line.split(|c: char| {
        c.is_whitespace() || (c.is_ascii_punctuation() && !matches!(c, '+' | '-' | '.'))
    })
    .filter(|token| !token.is_empty())
    .collect()
}

/// parse a floating point token, also accepting fortran `D` exponents (`1.0D+02`)
pub(crate) fn parse_float(token: &str) -> Option<f64> {
    if let Ok(value) = token.parse::<f64>() {
        return Some(value);
    }

    token.replace(['D', 'd'], "E").parse().ok()
}

/// render `value` with `digits` significant digits, in the style of C's `%.*g`: plain
/// notation unless the exponent is below -4 or at least `digits`, with trailing zeros
/// removed
pub(crate) fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);

    // nan and infinities have no exponent
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => (mantissa, exponent),
            Err(_) => return scientific,
        },
        None => return scientific,
    };

    if exponent < -4 || exponent >= digits as i32 {
        format!("{}e{}", trim_fraction(mantissa), exponent)
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
