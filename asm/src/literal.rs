use crate::error::Error;

/// Parses `12`, `1Ah` or `0x1A` into a signed 16-bit value.
pub fn parse_literal(s: &str) -> Result<i16, Error> {
    let text = s.trim().to_ascii_lowercase();
    let parsed = if let Some(num) = text.strip_suffix('h') {
        i16::from_str_radix(num, 16)
    } else if let Some(num) = text.strip_prefix("0x") {
        i16::from_str_radix(num, 16)
    } else {
        text.parse::<i16>()
    };
    parsed.map_err(|_| Error::InvalidLiteral(s.trim().to_string()))
}

/// True when the text can only have been meant as a number.
pub fn looks_numeric(s: &str) -> bool {
    match s.trim().chars().next() {
        Some(head) => head.is_ascii_digit() || head == '-' || head == '+',
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_literal("0").unwrap(), 0);
        assert_eq!(parse_literal("42").unwrap(), 42);
        assert_eq!(parse_literal(" 300 ").unwrap(), 300);
        assert_eq!(parse_literal("-5").unwrap(), -5);
        assert_eq!(parse_literal("32767").unwrap(), i16::MAX);
        assert_eq!(parse_literal("-32768").unwrap(), i16::MIN);
    }

    #[test]
    fn test_hex() {
        assert_eq!(parse_literal("1Ah").unwrap(), 26);
        assert_eq!(parse_literal("1ah").unwrap(), 26);
        assert_eq!(parse_literal("0x1A").unwrap(), 26);
        assert_eq!(parse_literal("0X1a").unwrap(), 26);
        assert_eq!(parse_literal("10H").unwrap(), 16);
        assert_eq!(parse_literal("7FFFh").unwrap(), i16::MAX);
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(parse_literal("32768"), Err(Error::InvalidLiteral(_))));
        assert!(matches!(parse_literal("FFFFh"), Err(Error::InvalidLiteral(_))));
        assert!(matches!(parse_literal("0x8000"), Err(Error::InvalidLiteral(_))));
    }

    #[test]
    fn test_invalid() {
        for text in ["", "h", "0x", "1Z", "LOOP", "0x1Ah", "12 34"] {
            match parse_literal(text) {
                Err(Error::InvalidLiteral(t)) => assert_eq!(t, text.trim()),
                other => panic!("`{}` parsed as {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_looks_numeric() {
        assert!(looks_numeric("1Z"));
        assert!(looks_numeric("-"));
        assert!(looks_numeric(""));
        assert!(!looks_numeric("LOOP"));
        assert!(!looks_numeric("FFh"));
    }
}
