use arch::{
    directive::Directive,
    literal::ByteLiteral,
    optab::OpTable,
    record::{Record, TextPacker},
};

use crate::{
    error::{Diagnostic, Error},
    intermediate::IntermediateLine,
    listing::Listing,
    parser::parse_decimal,
    pass1::Pass1,
    symbol::SymbolTable,
};

const WORD_MIN: i64 = -(1 << 23);
const WORD_MAX: i64 = (1 << 24) - 1;

#[derive(Debug)]
pub struct ObjectProgram<'a> {
    pub records: Vec<Record>,
    pub listing: Listing<'a>,
    pub errors: Vec<Diagnostic>,
}

impl ObjectProgram<'_> {
    /// Object program file contents, one record per line.
    pub fn render(&self) -> String {
        self.records
            .iter()
            .map(|record| format!("{}\n", record))
            .collect()
    }
}

/// Generate object code for every line and pack it into H/T/E records.
pub fn pass2<'a>(pass1: &'a Pass1, optab: &OpTable) -> ObjectProgram<'a> {
    let mut packer = TextPacker::new();
    let mut listing = Listing::new();
    let mut errors = vec![];

    for line in &pass1.program {
        let (code, errs) = object_code(line, &pass1.symbols, optab);
        errors.extend(errs.into_iter().map(|err| Diagnostic::new(line.line.row, err)));

        match &code {
            Some(code) => packer.push(line.address, code),
            None => {
                if Directive::parse(&line.line.opcode).is_some_and(|d| d.is_reservation()) {
                    packer.flush();
                }
            }
        }
        listing.push(line, code);
    }

    let mut records = vec![Record::header(&pass1.name, pass1.start, pass1.length)];
    records.extend(packer.finish());
    records.push(Record::End { start: pass1.start });

    ObjectProgram {
        records,
        listing,
        errors,
    }
}

/// Object code of a single line. Errors are non-fatal: a placeholder is
/// generated alongside them.
pub fn object_code(
    line: &IntermediateLine,
    symbols: &SymbolTable,
    optab: &OpTable,
) -> (Option<String>, Vec<Error>) {
    let IntermediateLine { address, line } = line;
    let mut errors = vec![];

    if let Some(entry) = optab.lookup(&line.opcode) {
        let target = match &line.operand {
            None => 0,
            Some(label) => match symbols.resolve(label, *address) {
                Ok(target) if target > 0xFFFF => {
                    errors.push(Error::AddressOverflow(label.clone(), target));
                    target & 0xFFFF
                }
                Ok(target) => target,
                Err(err) => {
                    errors.push(err);
                    0
                }
            },
        };
        return (Some(format!("{}{:04X}", entry.code, target)), errors);
    }

    let code = match Directive::parse(&line.opcode) {
        Some(Directive::WORD) => {
            let value = match line.operand.as_deref().and_then(parse_decimal) {
                Some(value) if (WORD_MIN..=WORD_MAX).contains(&value) => value,
                _ => {
                    errors.push(Error::InvalidOperand(
                        line.operand_field().to_string(),
                        *address,
                    ));
                    0
                }
            };
            Some(format!("{:06X}", value & 0xFF_FFFF))
        }
        // Malformed literals were already reported by pass 1
        Some(Directive::BYTE) => line
            .operand
            .as_deref()
            .and_then(ByteLiteral::parse)
            .map(|lit| lit.to_hex()),
        _ => None,
    };
    (code, errors)
}
