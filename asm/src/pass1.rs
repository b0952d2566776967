use arch::{directive::Directive, literal::ByteLiteral, optab::OpTable};

use crate::{
    error::{Diagnostic, Error},
    intermediate::IntermediateProgram,
    parser::{parse_hex, SourceLine},
    symbol::SymbolTable,
};

/// Highest address the 6 hex digit record fields can hold.
pub const ADDR_MAX: u32 = 0xFF_FFFF;

/// Everything Pass 2 needs.
#[derive(Debug)]
pub struct Pass1 {
    pub name: String,
    pub start: u32,
    pub length: u32,
    pub symbols: SymbolTable,
    pub program: IntermediateProgram,
    pub errors: Vec<Diagnostic>,
}

/// Assign every line its address and collect the symbol table.
///
/// Only a missing `START` or `END` aborts; everything else is recorded in
/// `Pass1::errors` and the walk continues.
pub fn pass1(lines: &[SourceLine], optab: &OpTable) -> Result<Pass1, Error> {
    let mut lines = lines.iter();
    let first = match lines.next() {
        Some(line) if Directive::parse(&line.opcode) == Some(Directive::START) => line,
        _ => return Err(Error::MissingStart),
    };

    let mut errors = vec![];
    let start = match first.operand.as_deref().and_then(parse_hex) {
        Some(addr) if addr <= ADDR_MAX => addr,
        _ => {
            errors.push(Diagnostic::new(
                first.row,
                Error::InvalidOperand(first.operand_field().to_string(), 0),
            ));
            0
        }
    };
    let name = first.label.clone().unwrap_or_default();

    let mut symbols = SymbolTable::new();
    let mut program = IntermediateProgram::new();
    program.push(start, first.clone());

    let mut locctr = start;
    for line in lines {
        if Directive::parse(&line.opcode) == Some(Directive::END) {
            program.push(locctr, line.clone());
            return Ok(Pass1 {
                name,
                start,
                length: locctr - start,
                symbols,
                program,
                errors,
            });
        }

        if let Some(label) = &line.label {
            if let Err(err) = symbols.define(label, locctr, line.row) {
                errors.push(Diagnostic::new(line.row, err));
            }
        }
        program.push(locctr, line.clone());

        match line_size(line, locctr, optab).and_then(|size| {
            locctr
                .checked_add(size)
                .filter(|next| *next <= ADDR_MAX)
                .ok_or_else(|| Error::InvalidOperand(line.operand_field().to_string(), locctr))
        }) {
            Ok(next) => locctr = next,
            Err(err) => errors.push(Diagnostic::new(line.row, err)),
        }
    }

    Err(Error::MissingEnd)
}

impl Pass1 {
    /// Program length file contents.
    pub fn render_length(&self) -> String {
        format!("{:X}", self.length)
    }
}

/// Bytes occupied by `line`, which starts at `addr`.
pub fn line_size(line: &SourceLine, addr: u32, optab: &OpTable) -> Result<u32, Error> {
    if let Some(entry) = optab.lookup(&line.opcode) {
        return Ok(entry.length);
    }

    let invalid_operand = || Error::InvalidOperand(line.operand_field().to_string(), addr);
    let count = || {
        line.operand
            .as_deref()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(invalid_operand)
    };

    match Directive::parse(&line.opcode) {
        Some(Directive::WORD) => Ok(3),
        Some(Directive::RESW) => count()?.checked_mul(3).ok_or_else(invalid_operand),
        Some(Directive::RESB) => count(),
        Some(Directive::BYTE) => line
            .operand
            .as_deref()
            .and_then(ByteLiteral::parse)
            .map(|lit| lit.len())
            .ok_or_else(invalid_operand),
        Some(Directive::START) | Some(Directive::END) | None => {
            Err(Error::InvalidOpcode(line.opcode.clone(), addr))
        }
    }
}
