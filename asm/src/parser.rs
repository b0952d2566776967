use crate::error::{Diagnostic, Error};

/// Label field meaning "no symbol defined on this line".
pub const NO_LABEL: &str = "~";
/// Operand field meaning "no operand".
pub const NO_OPERAND: &str = "-";

// ----------------------------------------------------------------------------
// Source line

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 0-based line index in the source file
    pub row: usize,
    pub label: Option<String>,
    pub opcode: String,
    pub operand: Option<String>,
}

impl SourceLine {
    pub fn new(label: Option<&str>, opcode: &str, operand: Option<&str>) -> Self {
        SourceLine {
            row: 0,
            label: label.map(|s| s.to_string()),
            opcode: opcode.to_string(),
            operand: operand.map(|s| s.to_string()),
        }
    }

    /// Split one line into `LABEL OPCODE OPERAND`.
    /// Blank lines and `.` comments yield `None`.
    pub fn parse(row: usize, raw: &str) -> Result<Option<SourceLine>, Error> {
        let code = raw.trim();
        if code.is_empty() || code.starts_with('.') {
            return Ok(None);
        }

        let words: Vec<&str> = code.split_whitespace().collect();
        match words.as_slice() {
            [label, opcode, operand] => Ok(Some(Self::from_fields(row, label, opcode, operand))),
            // Trailing comment
            [label, opcode, operand, comment, ..] if comment.starts_with('.') => {
                Ok(Some(Self::from_fields(row, label, opcode, operand)))
            }
            _ => Err(Error::SyntaxError(code.to_string())),
        }
    }

    fn from_fields(row: usize, label: &str, opcode: &str, operand: &str) -> Self {
        SourceLine {
            row,
            label: (label != NO_LABEL).then(|| label.to_string()),
            opcode: opcode.to_string(),
            operand: (operand != NO_OPERAND).then(|| operand.to_string()),
        }
    }

    pub fn label_field(&self) -> &str {
        self.label.as_deref().unwrap_or(NO_LABEL)
    }

    pub fn operand_field(&self) -> &str {
        self.operand.as_deref().unwrap_or(NO_OPERAND)
    }
}

/// Parse a whole source text, collecting lines that do not split as diagnostics.
pub fn parse_source(text: &str) -> (Vec<SourceLine>, Vec<Diagnostic>) {
    let mut lines = vec![];
    let mut diags = vec![];
    for (row, raw) in text.lines().enumerate() {
        match SourceLine::parse(row, raw) {
            Ok(Some(line)) => lines.push(line),
            Ok(None) => {}
            Err(err) => diags.push(Diagnostic::new(row, err)),
        }
    }
    (lines, diags)
}

// ----------------------------------------------------------------------------
// Numeric operands

pub fn parse_decimal(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

pub fn parse_hex(s: &str) -> Option<u32> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(s, 16).ok()
}
