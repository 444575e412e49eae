use std::{fmt, str::FromStr};

/// Single byte that terminates a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiter(u8);

impl Delimiter {
    pub const NEWLINE: Self = Self(b'\n');

    pub const fn new(byte: u8) -> Self {
        Self(byte)
    }

    pub const fn byte(self) -> u8 {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::NEWLINE
    }
}

impl FromStr for Delimiter {
    type Err = String;

    /// Accepts a single ASCII character or one of the escapes `\n`, `\t`, `\r`, `\0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let byte = match s {
            "\\n" => b'\n',
            "\\t" => b'\t',
            "\\r" => b'\r',
            "\\0" => b'\0',
            _ => match s.as_bytes() {
                [b] if b.is_ascii() => *b,
                _ => return Err(format!("delimiter must be a single ASCII character or escape, got {s:?}")),
            },
        };
        Ok(Self(byte))
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_ascii())
    }
}
