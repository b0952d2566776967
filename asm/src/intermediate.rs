use std::fmt;

use crate::parser::SourceLine;

/// A source line with the location counter value at its start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntermediateLine {
    pub address: u32,
    pub line: SourceLine,
}

/// Pass 1 output, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntermediateProgram(Vec<IntermediateLine>);

impl IntermediateProgram {
    pub fn new() -> Self {
        IntermediateProgram(vec![])
    }

    pub(crate) fn push(&mut self, address: u32, line: SourceLine) {
        self.0.push(IntermediateLine { address, line });
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IntermediateLine> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a IntermediateProgram {
    type Item = &'a IntermediateLine;
    type IntoIter = std::slice::Iter<'a, IntermediateLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// intermediate file: `ADDR    LABEL   OPCODE  OPERAND`
impl fmt::Display for IntermediateProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for IntermediateLine { address, line } in &self.0 {
            writeln!(
                f,
                "{:<8X}{:<8}{:<8}{}",
                address,
                line.label_field(),
                line.opcode,
                line.operand_field()
            )?;
        }
        Ok(())
    }
}
