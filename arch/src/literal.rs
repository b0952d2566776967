/// Operand of a `BYTE` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteLiteral {
    /// `C'EOF'`
    Char(String),
    /// `X'F1'`
    Hex(String),
}

impl ByteLiteral {
    pub fn parse(s: &str) -> Option<ByteLiteral> {
        let mut chars = s.chars();
        let kind = chars.next()?;
        let body = chars.as_str().strip_prefix('\'')?.strip_suffix('\'')?;
        match kind {
            'C' if !body.is_empty() && body.is_ascii() => Some(ByteLiteral::Char(body.to_string())),
            'X' if !body.is_empty()
                && body.len() % 2 == 0
                && body.chars().all(|c| c.is_ascii_hexdigit()) =>
            {
                Some(ByteLiteral::Hex(body.to_ascii_uppercase()))
            }
            _ => None,
        }
    }

    /// Number of bytes the literal occupies.
    pub fn len(&self) -> u32 {
        match self {
            ByteLiteral::Char(text) => text.len() as u32,
            ByteLiteral::Hex(digits) => (digits.len() / 2) as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_hex(&self) -> String {
        match self {
            ByteLiteral::Char(text) => text.bytes().map(|b| format!("{:02X}", b)).collect(),
            ByteLiteral::Hex(digits) => digits.clone(),
        }
    }
}
