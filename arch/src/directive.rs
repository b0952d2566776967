use strum::{Display, EnumString};

/// Assembler directives. These never appear in the operation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum Directive {
    START,
    END,
    WORD,
    RESW,
    RESB,
    BYTE,
}

impl Directive {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    /// Whether the directive only reserves space and breaks text record contiguity.
    pub fn is_reservation(&self) -> bool {
        matches!(self, Directive::RESW | Directive::RESB)
    }
}
