pub mod error;
pub mod intermediate;
pub mod listing;
pub mod loader;
pub mod parser;
pub mod pass1;
pub mod pass2;
pub mod symbol;

use arch::{optab::OpTable, record::Record};

pub use error::{Diagnostic, Error};
pub use pass1::{pass1, Pass1};
pub use pass2::{pass2, ObjectProgram};

/// Rendered results of one run.
#[derive(Debug)]
pub struct Assembled {
    pub name: String,
    pub start: u32,
    pub length: u32,
    pub records: Vec<Record>,
    pub object: String,
    pub listing: String,
    pub intermediate: String,
    pub symtab: String,
    /// Source, pass 1 and pass 2 diagnostics, in that order
    pub errors: Vec<Diagnostic>,
}

/// Assemble source text in one go.
pub fn assemble(source: &str, optab: &OpTable) -> Result<Assembled, Error> {
    let (lines, mut errors) = parser::parse_source(source);
    let first = pass1(&lines, optab)?;
    let second = pass2(&first, optab);

    let object = second.render();
    let listing = second.listing.to_string();
    let intermediate = first.program.to_string();
    let symtab = first.symbols.to_string();

    let ObjectProgram {
        records,
        errors: pass2_errors,
        ..
    } = second;
    let Pass1 {
        name,
        start,
        length,
        errors: pass1_errors,
        ..
    } = first;
    errors.extend(pass1_errors);
    errors.extend(pass2_errors);

    Ok(Assembled {
        name,
        start,
        length,
        records,
        object,
        listing,
        intermediate,
        symtab,
        errors,
    })
}
