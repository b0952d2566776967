use indexmap::IndexMap;
use std::fmt;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub address: u32,
    /// Source row of the definition
    pub row: usize,
}

/// Label -> address, in definition order.
#[derive(Debug, Default)]
pub struct SymbolTable(IndexMap<String, Symbol>);

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable(IndexMap::new())
    }

    /// Bind `label`. A label that is already bound keeps its first address.
    pub fn define(&mut self, label: &str, address: u32, row: usize) -> Result<(), Error> {
        if let Some(first) = self.0.get(label) {
            return Err(Error::DuplicateSymbol(label.to_string(), address, first.row));
        }
        self.0.insert(label.to_string(), Symbol { address, row });
        Ok(())
    }

    /// `referrer` is the address of the line using the label, for the error.
    pub fn resolve(&self, label: &str, referrer: u32) -> Result<u32, Error> {
        self.0
            .get(label)
            .map(|sym| sym.address)
            .ok_or_else(|| Error::UndefinedSymbol(label.to_string(), referrer))
    }

    pub fn get(&self, label: &str) -> Option<&Symbol> {
        self.0.get(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Symbol)> {
        self.0.iter()
    }
}

// symtab file: one `LABEL   ADDR` per line
impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, sym) in self.iter() {
            writeln!(f, "{:<8}{:04X}", label, sym.address)?;
        }
        Ok(())
    }
}
