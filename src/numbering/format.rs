//! Numeral styles used when rendering list numbers.

use serde::{Deserialize, Serialize};

/// How a level's counter is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NumberFormat {
    /// Arabic numerals (1, 2, 3...)
    #[default]
    Decimal,
    /// Arabic numerals padded to two digits (01, 02, ... 10)
    DecimalZero,
    /// Lowercase Roman numerals (i, ii, iii...)
    LowerRoman,
    /// Uppercase Roman numerals (I, II, III...)
    UpperRoman,
    /// Lowercase letters (a, b, ... z, aa, ab...)
    LowerLetter,
    /// Uppercase letters (A, B, ... Z, AA, AB...)
    UpperLetter,
    /// English ordinals (1st, 2nd, 3rd...)
    Ordinal,
    /// A bullet glyph instead of a number
    Bullet,
    /// Nothing at all
    None,
}

impl NumberFormat {
    /// Parse a WordprocessingML `w:numFmt` value.
    ///
    /// Unrecognised formats (Chinese counting, cardinal text and the like)
    /// fall back to [`NumberFormat::Decimal`].
    pub fn from_ooxml(value: &str) -> Self {
        match value {
            "decimal" => NumberFormat::Decimal,
            "decimalZero" => NumberFormat::DecimalZero,
            "lowerRoman" => NumberFormat::LowerRoman,
            "upperRoman" => NumberFormat::UpperRoman,
            "lowerLetter" => NumberFormat::LowerLetter,
            "upperLetter" => NumberFormat::UpperLetter,
            "ordinal" => NumberFormat::Ordinal,
            "bullet" => NumberFormat::Bullet,
            "none" => NumberFormat::None,
            _ => NumberFormat::Decimal,
        }
    }

    /// Map a binary Word number format code (`nfc`) to a format.
    pub fn from_nfc(code: u8) -> Self {
        match code {
            1 => NumberFormat::UpperRoman,
            2 => NumberFormat::LowerRoman,
            3 => NumberFormat::UpperLetter,
            4 => NumberFormat::LowerLetter,
            5 => NumberFormat::Ordinal,
            22 => NumberFormat::DecimalZero,
            23 => NumberFormat::Bullet,
            255 => NumberFormat::None,
            _ => NumberFormat::Decimal,
        }
    }

    /// Append `value` written in this format to `out`.
    ///
    /// Bullets and `None` produce nothing here; bullet glyphs are emitted
    /// by the renderer for the whole level.
    pub fn write(self, value: u32, out: &mut String) {
        match self {
            NumberFormat::Decimal => push_decimal(value, out),
            NumberFormat::DecimalZero => {
                if value < 10 {
                    out.push('0');
                }
                push_decimal(value, out);
            },
            NumberFormat::LowerRoman => push_roman(value, false, out),
            NumberFormat::UpperRoman => push_roman(value, true, out),
            NumberFormat::LowerLetter => push_letters(value, false, out),
            NumberFormat::UpperLetter => push_letters(value, true, out),
            NumberFormat::Ordinal => {
                push_decimal(value, out);
                out.push_str(ordinal_suffix(value));
            },
            NumberFormat::Bullet | NumberFormat::None => {},
        }
    }

    /// Convenience wrapper around [`write`](Self::write).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use longan::numbering::NumberFormat;
    ///
    /// assert_eq!(NumberFormat::UpperRoman.render(14), "XIV");
    /// assert_eq!(NumberFormat::LowerLetter.render(28), "ab");
    /// assert_eq!(NumberFormat::Ordinal.render(22), "22nd");
    /// ```
    pub fn render(self, value: u32) -> String {
        let mut out = String::new();
        self.write(value, &mut out);
        out
    }
}

#[inline]
fn push_decimal(value: u32, out: &mut String) {
    let mut buffer = itoa::Buffer::new();
    out.push_str(buffer.format(value));
}

const ROMAN: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

// Zero has no Roman form and renders as nothing
fn push_roman(value: u32, upper: bool, out: &mut String) {
    let mut n = value;
    for (weight, symbol) in ROMAN {
        while n >= weight {
            if upper {
                out.push_str(symbol);
            } else {
                out.extend(symbol.chars().map(|c| c.to_ascii_lowercase()));
            }
            n -= weight;
        }
    }
}

/// Bijective base-26: 1 is "a", 26 is "z", 27 is "aa".
fn push_letters(value: u32, upper: bool, out: &mut String) {
    let base = if upper { b'A' } else { b'a' };
    let mut letters = Vec::new();
    let mut n = value;

    while n > 0 {
        n -= 1;
        letters.push((n % 26) as u8 + base);
        n /= 26;
    }

    out.extend(letters.iter().rev().map(|&b| b as char));
}

/// English suffix chosen by the last decimal digit alone, so 11 is "11st".
#[inline]
fn ordinal_suffix(value: u32) -> &'static str {
    match value % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_formats() {
        assert_eq!(NumberFormat::Decimal.render(0), "0");
        assert_eq!(NumberFormat::Decimal.render(42), "42");
        assert_eq!(NumberFormat::DecimalZero.render(7), "07");
        assert_eq!(NumberFormat::DecimalZero.render(10), "10");
        assert_eq!(NumberFormat::DecimalZero.render(123), "123");
    }

    #[test]
    fn test_roman() {
        assert_eq!(NumberFormat::UpperRoman.render(1), "I");
        assert_eq!(NumberFormat::UpperRoman.render(4), "IV");
        assert_eq!(NumberFormat::UpperRoman.render(1994), "MCMXCIV");
        assert_eq!(NumberFormat::LowerRoman.render(9), "ix");
        assert_eq!(NumberFormat::LowerRoman.render(0), "");
    }

    #[test]
    fn test_letters() {
        assert_eq!(NumberFormat::LowerLetter.render(1), "a");
        assert_eq!(NumberFormat::LowerLetter.render(26), "z");
        assert_eq!(NumberFormat::UpperLetter.render(27), "AA");
        assert_eq!(NumberFormat::UpperLetter.render(702), "ZZ");
        assert_eq!(NumberFormat::UpperLetter.render(703), "AAA");
        assert_eq!(NumberFormat::LowerLetter.render(0), "");
    }

    #[test]
    fn test_ordinal_uses_last_digit() {
        assert_eq!(NumberFormat::Ordinal.render(1), "1st");
        assert_eq!(NumberFormat::Ordinal.render(2), "2nd");
        assert_eq!(NumberFormat::Ordinal.render(3), "3rd");
        assert_eq!(NumberFormat::Ordinal.render(4), "4th");
        assert_eq!(NumberFormat::Ordinal.render(11), "11st");
        assert_eq!(NumberFormat::Ordinal.render(12), "12nd");
        assert_eq!(NumberFormat::Ordinal.render(20), "20th");
    }

    #[test]
    fn test_bullet_and_none_are_empty() {
        assert_eq!(NumberFormat::Bullet.render(3), "");
        assert_eq!(NumberFormat::None.render(3), "");
    }

    #[test]
    fn test_parse_names_and_codes() {
        assert_eq!(NumberFormat::from_ooxml("upperLetter"), NumberFormat::UpperLetter);
        assert_eq!(NumberFormat::from_ooxml("decimalZero"), NumberFormat::DecimalZero);
        assert_eq!(NumberFormat::from_ooxml("chineseCounting"), NumberFormat::Decimal);
        assert_eq!(NumberFormat::from_nfc(0), NumberFormat::Decimal);
        assert_eq!(NumberFormat::from_nfc(2), NumberFormat::LowerRoman);
        assert_eq!(NumberFormat::from_nfc(23), NumberFormat::Bullet);
        assert_eq!(NumberFormat::from_nfc(255), NumberFormat::None);
    }
}
