//! Amplitude list parsing
//!
//! Accepts text such as `[0.7071+0j, -0.5-0.5j, j, -1]`. Brackets and all
//! whitespace are dropped, the rest is split on commas and empty pieces are
//! ignored. Token `i` becomes the amplitude of basis state `i`.
//!
//! Parsing never fails. A component whose number cannot be read is replaced
//! by zero and the token is reported as [`TokenOutcome::DefaultedToZero`].

use crate::complex::Complex;
use crate::constants::IMAGINARY_UNIT;

/// Result of reading one comma separated token
#[derive(Debug, Clone, PartialEq)]
pub enum TokenOutcome {
    /// Every component was read
    Parsed(Complex),
    /// At least one component was unreadable and was set to zero
    DefaultedToZero { value: Complex, token: String },
}

impl TokenOutcome {
    /// Amplitude carried by the token, zero-filled where unreadable
    pub fn value(&self) -> Complex {
        match self {
            Self::Parsed(value) | Self::DefaultedToZero { value, .. } => *value,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::DefaultedToZero { .. })
    }
}

/// Split raw text into amplitude tokens
pub fn tokenize(input: &str) -> Vec<String> {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, '[' | ']') && !c.is_whitespace())
        .collect();

    cleaned
        .split(',')
        .filter(|part| !part.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse every token, keeping track of which ones were defaulted
pub fn parse_tokens(input: &str) -> Vec<TokenOutcome> {
    tokenize(input).iter().map(|token| parse_token(token)).collect()
}

/// Parse an amplitude list, zero-filling unreadable components
pub fn parse_amplitudes(input: &str) -> Vec<Complex> {
    parse_tokens(input).iter().map(TokenOutcome::value).collect()
}

/// Parse a single complex literal (`a`, `bj`, `a+bj`, `a-j`, `j`, ...)
pub fn parse_token(token: &str) -> TokenOutcome {
    let (re, im) = if token.contains(IMAGINARY_UNIT) {
        let body = token.replacen(IMAGINARY_UNIT, "", 1);
        match split_point(&body) {
            Some(idx) => (parse_float_prefix(&body[..idx]), parse_imaginary(&body[idx..])),
            None => (Some(0.0), parse_imaginary(&body)),
        }
    } else {
        (parse_float_prefix(token), Some(0.0))
    };

    match (re, im) {
        (Some(re), Some(im)) => TokenOutcome::Parsed(Complex::new(re, im)),
        (re, im) => TokenOutcome::DefaultedToZero {
            value: Complex::new(re.unwrap_or(0.0), im.unwrap_or(0.0)),
            token: token.to_owned(),
        },
    }
}

/// Last `+`/`-` after the first character; a leading sign is never a split
fn split_point(body: &str) -> Option<usize> {
    body.char_indices()
        .skip(1)
        .filter(|&(_, c)| c == '+' || c == '-')
        .map(|(idx, _)| idx)
        .last()
}

/// Imaginary coefficient; a bare sign or nothing means a unit coefficient
fn parse_imaginary(text: &str) -> Option<f64> {
    match text {
        "" | "+" => Some(1.0),
        "-" => Some(-1.0),
        _ => parse_float_prefix(text),
    }
}

/// Read the longest leading decimal number, ignoring any trailing garbage.
///
/// Accepts `[+-]digits[.digits][(e|E)[+-]digits]` where the mantissa needs at
/// least one digit, and `[+-]Infinity`. Returns `None` when no number starts
/// the text (`NaN` included, which ends up as zero like any unreadable text).
fn parse_float_prefix(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_brackets_and_whitespace() {
        assert_eq!(
            tokenize(" [ 0.5 + 0.5j ,\n -1 , , ] "),
            vec!["0.5+0.5j".to_string(), "-1".to_string()]
        );
        assert!(tokenize("[]").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_real_tokens() {
        assert_eq!(parse_token("1"), TokenOutcome::Parsed(Complex::new(1.0, 0.0)));
        assert_eq!(parse_token("-0.25"), TokenOutcome::Parsed(Complex::new(-0.25, 0.0)));
        assert_eq!(parse_token(".5"), TokenOutcome::Parsed(Complex::new(0.5, 0.0)));
        assert_eq!(parse_token("1e-3"), TokenOutcome::Parsed(Complex::new(0.001, 0.0)));
    }

    #[test]
    fn test_full_complex_tokens() {
        assert_eq!(parse_token("0.7071+0j").value(), Complex::new(0.7071, 0.0));
        assert_eq!(parse_token("-0.5-0.5j").value(), Complex::new(-0.5, -0.5));
        assert_eq!(parse_token("1+2j").value(), Complex::new(1.0, 2.0));
        assert_eq!(parse_token("+3-4j").value(), Complex::new(3.0, -4.0));
    }

    #[test]
    fn test_unit_imaginary_tokens() {
        assert_eq!(parse_token("j").value(), Complex::new(0.0, 1.0));
        assert_eq!(parse_token("+j").value(), Complex::new(0.0, 1.0));
        assert_eq!(parse_token("-j").value(), Complex::new(0.0, -1.0));
        assert_eq!(parse_token("0.5+j").value(), Complex::new(0.5, 1.0));
        assert_eq!(parse_token("0.5-j").value(), Complex::new(0.5, -1.0));
        assert_eq!(parse_token("2.5j").value(), Complex::new(0.0, 2.5));
        assert_eq!(parse_token("-2.5j").value(), Complex::new(0.0, -2.5));
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(parse_token("1.5x"), TokenOutcome::Parsed(Complex::new(1.5, 0.0)));
        assert_eq!(parse_token("2e"), TokenOutcome::Parsed(Complex::new(2.0, 0.0)));
    }

    #[test]
    fn test_exponent_sign_is_a_split_point() {
        // The last sign wins, even inside an exponent
        assert_eq!(parse_token("1e-5j").value(), Complex::new(1.0, -5.0));
    }

    #[test]
    fn test_unreadable_tokens_default_to_zero() {
        let outcome = parse_token("abc");
        assert!(outcome.is_defaulted());
        assert_eq!(outcome.value(), Complex::ZERO);

        let outcome = parse_token("x+2j");
        assert_eq!(
            outcome,
            TokenOutcome::DefaultedToZero {
                value: Complex::new(0.0, 2.0),
                token: "x+2j".to_string(),
            }
        );

        let outcome = parse_token("1+xj");
        assert!(outcome.is_defaulted());
        assert_eq!(outcome.value(), Complex::new(1.0, 0.0));
    }

    #[test]
    fn test_infinity_literals() {
        assert_eq!(parse_token("Infinity"), TokenOutcome::Parsed(Complex::new(f64::INFINITY, 0.0)));
        assert_eq!(parse_token("-Infinity").value(), Complex::new(f64::NEG_INFINITY, 0.0));
        assert_eq!(parse_token("1-Infinityj").value(), Complex::new(1.0, f64::NEG_INFINITY));
        // overflow and the spelled-out literal agree
        assert_eq!(parse_token("1e400"), parse_token("+Infinity"));
        assert!(parse_token("NaN").is_defaulted());
        assert!(parse_token("inf").is_defaulted());
    }

    #[test]
    fn test_lone_sign_is_unreadable() {
        assert!(parse_token("-").is_defaulted());
        assert!(parse_token(".").is_defaulted());
    }

    #[test]
    fn test_parse_amplitudes_keeps_order() {
        let amps = parse_amplitudes("[0.7071+0j, 0.7071+0j]");
        assert_eq!(amps, vec![Complex::new(0.7071, 0.0), Complex::new(0.7071, 0.0)]);

        let amps = parse_amplitudes("[j, -j, 1, -1]");
        assert_eq!(
            amps,
            vec![
                Complex::new(0.0, 1.0),
                Complex::new(0.0, -1.0),
                Complex::new(1.0, 0.0),
                Complex::new(-1.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_parse_tokens_reports_defaults() {
        let outcomes = parse_tokens("[1, oops, 0]");
        let defaulted: Vec<bool> = outcomes.iter().map(TokenOutcome::is_defaulted).collect();
        assert_eq!(defaulted, vec![false, true, false]);
    }
}
