use color_print::cformat;
use std::fmt;

use crate::{intermediate::IntermediateLine, symbol::SymbolTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry<'a> {
    pub line: &'a IntermediateLine,
    pub code: Option<String>,
}

/// Intermediate lines paired with the object code generated for them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Listing<'a>(Vec<ListingEntry<'a>>);

impl<'a> Listing<'a> {
    pub fn new() -> Self {
        Listing(vec![])
    }

    pub(crate) fn push(&mut self, line: &'a IntermediateLine, code: Option<String>) {
        self.0.push(ListingEntry { line, code });
    }

    pub fn entries(&self) -> &[ListingEntry<'a>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Object code stream in line order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|entry| entry.code.as_deref())
    }

    /// Colored dump for the terminal.
    pub fn print_dump(&self, name: &str, symbols: &SymbolTable) {
        println!(
            "{}+------[{}]{}",
            "-".repeat(21),
            name,
            "-".repeat(45usize.saturating_sub(name.len()))
        );
        for ListingEntry { line, code } in &self.0 {
            let IntermediateLine { address, line } = line;
            let code_str = match code {
                Some(code) => cformat!("<y>{:<8}</>", code),
                None => format!("{:<8}", ""),
            };
            let label = match &line.label {
                Some(label) => cformat!("<g>{:<8}</>", label),
                None => format!("{:<8}", ""),
            };
            // Highlight operands that resolve to a symbol
            let operand = match &line.operand {
                Some(operand) => match symbols.get(operand) {
                    Some(sym) => cformat!("<b>{}</> <g>(0x{:04X})</>", operand, sym.address),
                    None => cformat!("<b>{}</>", operand),
                },
                None => String::new(),
            };
            println!(
                "[{:04X}] {} | {:>4}: {} {} {}",
                address,
                code_str,
                line.row + 1,
                label,
                cformat!("<r>{:<6}</>", line.opcode),
                operand
            );
        }
        println!("-------------------+-----------------------------------------------------");
    }
}

// listing file: `ADDR\tLABEL\tOPCODE\tOPERAND\tOBJ`
impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ListingEntry { line, code } in &self.0 {
            writeln!(
                f,
                "{:X}\t{}\t{}\t{}\t{}",
                line.address,
                line.line.label_field(),
                line.line.opcode,
                line.line.operand_field(),
                code.as_deref().unwrap_or("-")
            )?;
        }
        Ok(())
    }
}
