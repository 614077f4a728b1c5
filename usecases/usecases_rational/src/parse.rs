//! Decimal Literal Parsing
//!
//! Accepts exactly `sign? digits ('.' digits)?` with no surrounding
//! whitespace, no exponent and no `n/d` syntax. The digits (ignoring the
//! point) become the numerator and `10^k` the denominator, where `k` is the
//! number of digits after the point; the pair is then normalized.

use entities_utilities::{BigNumber, ParseError, RationalError, RationalValue};

/// Parse a decimal literal given as raw bytes with explicit length
///
/// # Arguments
/// * `input` - UTF-8 bytes of the literal; no terminator is expected
///
/// # Returns
/// * `Ok(RationalValue)` - The exact, normalized value
/// * `Err(RationalError::Parse(_))` - The literal does not match the grammar
///
/// # Examples
/// ```
/// use usecases_rational::parse_decimal;
///
/// let r = parse_decimal(b"-1.25").unwrap();
/// assert_eq!(r.to_string(), "-5/4");
/// assert!(parse_decimal(b"1e5").is_err());
/// ```
pub fn parse_decimal(input: &[u8]) -> Result<RationalValue, RationalError> {
    let literal = scan(input).map_err(|err| {
        log::debug!("rejected decimal literal: {err}");
        RationalError::Parse(err)
    })?;

    let mut digits = String::with_capacity(literal.integer.len() + literal.fraction.len());
    digits.push_str(literal.integer);
    digits.push_str(literal.fraction);

    let magnitude = BigNumber::parse_decimal_digits(&digits).ok_or(ParseError::MissingDigits {
        position: literal.sign_len,
    })?;
    let numerator = if literal.negative {
        magnitude.neg()
    } else {
        magnitude
    };
    let denominator = BigNumber::pow10(literal.fraction.len() as u64);

    RationalValue::new(numerator, denominator)
}

/// Validated pieces of a literal, borrowed from the input
struct Literal<'a> {
    negative: bool,
    sign_len: usize,
    integer: &'a str,
    fraction: &'a str,
}

fn scan(input: &[u8]) -> Result<Literal<'_>, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let text = std::str::from_utf8(input).map_err(|_| ParseError::InvalidUtf8)?;

    let mut negative = false;
    let mut sign_len = 0;
    let mut point: Option<usize> = None;

    for (position, ch) in text.char_indices() {
        match ch {
            '+' | '-' if position == 0 => {
                negative = ch == '-';
                sign_len = 1;
            }
            '+' | '-' => return Err(ParseError::MisplacedSign { position }),
            '.' => {
                if point.is_some() {
                    return Err(ParseError::MultipleDecimalPoints { position });
                }
                if position == sign_len {
                    return Err(ParseError::MissingDigits { position });
                }
                point = Some(position);
            }
            '0'..='9' => {}
            found => return Err(ParseError::UnexpectedCharacter { position, found }),
        }
    }

    let (integer, fraction) = match point {
        Some(position) => (&text[sign_len..position], &text[position + 1..]),
        None => (&text[sign_len..], ""),
    };
    if integer.is_empty() || (point.is_some() && fraction.is_empty()) {
        return Err(ParseError::MissingDigits {
            position: text.len(),
        });
    }

    Ok(Literal {
        negative,
        sign_len,
        integer,
        fraction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(input: &str) -> ParseError {
        match parse_decimal(input.as_bytes()) {
            Err(RationalError::Parse(err)) => err,
            other => panic!("expected parse error for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_integers() {
        assert_eq!(parse_decimal(b"42").unwrap(), RationalValue::from_i64(42));
        assert_eq!(parse_decimal(b"-42").unwrap(), RationalValue::from_i64(-42));
        assert_eq!(parse_decimal(b"+42").unwrap(), RationalValue::from_i64(42));
        assert_eq!(parse_decimal(b"007").unwrap(), RationalValue::from_i64(7));
    }

    #[test]
    fn test_fractions_are_reduced() {
        assert_eq!(parse_decimal(b"0.5").unwrap().to_string(), "1/2");
        assert_eq!(parse_decimal(b"2.50").unwrap().to_string(), "5/2");
        assert_eq!(parse_decimal(b"-0.125").unwrap().to_string(), "-1/8");
        assert_eq!(parse_decimal(b"3.000").unwrap().to_string(), "3");
    }

    #[test]
    fn test_zero_forms() {
        for input in ["0", "-0", "+0.000", "00.0"] {
            let r = parse_decimal(input.as_bytes()).unwrap();
            assert!(r.is_zero(), "{input}");
            assert_eq!(r.to_string(), "0");
        }
    }

    #[test]
    fn test_long_literal() {
        let digits = "9".repeat(200);
        let input = format!("{digits}.{digits}");
        let r = parse_decimal(input.as_bytes()).unwrap();
        assert_eq!(r.denominator(), &BigNumber::pow10(200));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(parse_err(""), ParseError::Empty);
        assert_eq!(parse_err("-"), ParseError::MissingDigits { position: 1 });
        assert_eq!(parse_err("1."), ParseError::MissingDigits { position: 2 });
        assert_eq!(parse_err(".5"), ParseError::MissingDigits { position: 0 });
        assert_eq!(parse_err("-.5"), ParseError::MissingDigits { position: 1 });
        assert_eq!(parse_err("1.2.3"), ParseError::MultipleDecimalPoints { position: 3 });
        assert_eq!(parse_err("1-2"), ParseError::MisplacedSign { position: 1 });
        assert_eq!(parse_err("--1"), ParseError::MisplacedSign { position: 1 });
        assert_eq!(
            parse_err(" 1"),
            ParseError::UnexpectedCharacter { position: 0, found: ' ' }
        );
        assert_eq!(
            parse_err("1e5"),
            ParseError::UnexpectedCharacter { position: 1, found: 'e' }
        );
        assert_eq!(
            parse_err("1/3"),
            ParseError::UnexpectedCharacter { position: 1, found: '/' }
        );
        assert_eq!(
            parse_err("1\n"),
            ParseError::UnexpectedCharacter { position: 1, found: '\n' }
        );
    }

    #[test]
    fn test_invalid_utf8() {
        assert_eq!(
            parse_decimal(&[b'1', 0xff]),
            Err(RationalError::Parse(ParseError::InvalidUtf8))
        );
    }

    #[test]
    fn test_non_ascii_digit_rejected() {
        // Arabic-indic digit one
        assert_eq!(
            parse_err("1\u{0661}"),
            ParseError::UnexpectedCharacter { position: 1, found: '\u{0661}' }
        );
    }
}
