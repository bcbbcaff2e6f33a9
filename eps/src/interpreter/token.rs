use super::operator::*;

///
/// A single whitespace-separated token from a command line
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// A decimal number, which is pushed on to the operand stack
    Number(f64),

    /// A known operator
    Operator(Operator),

    /// Anything else: these are skipped
    Unknown(&'a str),
}

impl<'a> Token<'a> {
    ///
    /// Classifies a token
    ///
    pub fn parse(text: &'a str) -> Token<'a> {
        if is_decimal(text) {
            if let Ok(number) = text.parse::<f64>() {
                return Token::Number(number);
            }
        }

        match Operator::from_name(text) {
            Some(operator)  => Token::Operator(operator),
            None            => Token::Unknown(text),
        }
    }
}

///
/// True if a token is a signed decimal number, like `12`, `-3.5`, `+.25` or `7.`
///
/// Exponents and radix numbers are not accepted.
///
pub fn is_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);

    let (integer, fraction) = match unsigned.find('.') {
        Some(pos)   => (&unsigned[..pos], Some(&unsigned[(pos+1)..])),
        None        => (unsigned, None),
    };

    let all_digits = |part: &str| part.bytes().all(|c| c.is_ascii_digit());

    match fraction {
        None            => !integer.is_empty() && all_digits(integer),
        Some(fraction)  => (!integer.is_empty() || !fraction.is_empty()) && all_digits(integer) && all_digits(fraction),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_decimals() {
        for number in ["0", "12", "-3", "+4", "3.5", "-0.25", ".5", "-.5", "7."].iter() {
            assert!(is_decimal(number), "{:?} should be a number", number);
        }
    }

    #[test]
    fn rejects_malformed_numbers() {
        for not_number in ["", "-", "+", ".", "-.", "1.2.3", "--1", "1-", "1e5", "16#FF", "moveto", "1,5"].iter() {
            assert!(!is_decimal(not_number), "{:?} should not be a number", not_number);
        }
    }

    #[test]
    fn operators_are_recognised() {
        assert!(Token::parse("lineto") == Token::Operator(Operator::LineTo));
        assert!(Token::parse("-2.5") == Token::Number(-2.5));
        assert!(Token::parse("1.2.3") == Token::Unknown("1.2.3"));
        assert!(Token::parse("LineTo") == Token::Unknown("LineTo"));
    }
}
