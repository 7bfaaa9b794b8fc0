use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::lexer::Keyword;

/// How `print` renders integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Signed base 10
    #[default]
    #[serde(rename = "dec")]
    Decimal,
    /// `0x` followed by the lowercase hex of the 32-bit pattern
    #[serde(rename = "hex")]
    Hexadecimal,
    /// The 32-bit pattern, most significant bit first
    #[serde(rename = "bin")]
    Binary,
}

impl OutputFormat {
    /// Render a value in this format
    pub fn render(self, value: i32) -> String {
        // the `as u32` casts reinterpret the two's-complement bits
        match self {
            OutputFormat::Decimal => value.to_string(),
            OutputFormat::Hexadecimal => format!("{:#x}", value as u32),
            OutputFormat::Binary => format!("{:032b}", value as u32),
        }
    }

    /// Format selected by a `config` argument
    pub fn from_keyword(keyword: Keyword) -> Option<OutputFormat> {
        match keyword {
            Keyword::Dec => Some(OutputFormat::Decimal),
            Keyword::Hex => Some(OutputFormat::Hexadecimal),
            Keyword::Bin => Some(OutputFormat::Binary),
            Keyword::Config | Keyword::Print => None,
        }
    }

    /// The `config` argument that selects this format
    pub fn keyword(self) -> Keyword {
        match self {
            OutputFormat::Decimal => Keyword::Dec,
            OutputFormat::Hexadecimal => Keyword::Hex,
            OutputFormat::Binary => Keyword::Bin,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.keyword().as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyword::from_lexeme(s)
            .and_then(OutputFormat::from_keyword)
            .ok_or_else(|| format!("unknown output format `{}` (expected dec, hex or bin)", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(OutputFormat::Decimal.render(14), "14");
        assert_eq!(OutputFormat::Decimal.render(-14), "-14");
        assert_eq!(OutputFormat::Decimal.render(i32::MIN), "-2147483648");
    }

    #[test]
    fn test_hexadecimal() {
        assert_eq!(OutputFormat::Hexadecimal.render(255), "0xff");
        assert_eq!(OutputFormat::Hexadecimal.render(0), "0x0");
        assert_eq!(OutputFormat::Hexadecimal.render(-1), "0xffffffff");
        assert_eq!(OutputFormat::Hexadecimal.render(i32::MIN), "0x80000000");
    }

    #[test]
    fn test_binary_is_32_wide() {
        assert_eq!(
            OutputFormat::Binary.render(5),
            "00000000000000000000000000000101"
        );
        assert_eq!(OutputFormat::Binary.render(-1), "1".repeat(32));
        assert_eq!(OutputFormat::Binary.render(0).len(), 32);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("hex".parse::<OutputFormat>(), Ok(OutputFormat::Hexadecimal));
        assert_eq!(OutputFormat::Binary.to_string(), "bin");
        assert!("print".parse::<OutputFormat>().is_err());
        assert!("oct".parse::<OutputFormat>().is_err());
    }
}
