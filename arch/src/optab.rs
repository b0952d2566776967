use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Instruction length used when a table entry does not give one.
pub const DEFAULT_LENGTH: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpEntry {
    pub mnemonic: String,
    pub code: String,
    #[serde(default = "default_length")]
    pub length: u32,
}

fn default_length() -> u32 {
    DEFAULT_LENGTH
}

impl OpEntry {
    pub fn new(mnemonic: &str, code: &str, length: u32) -> Self {
        OpEntry {
            mnemonic: mnemonic.to_string(),
            code: code.to_ascii_uppercase(),
            length,
        }
    }
}

// Standard SIC instruction set
static SIC: Lazy<OpTable> = Lazy::new(|| {
    let entries = [
        ("ADD", "18"),
        ("AND", "40"),
        ("COMP", "28"),
        ("DIV", "24"),
        ("J", "3C"),
        ("JEQ", "30"),
        ("JGT", "34"),
        ("JLT", "38"),
        ("JSUB", "48"),
        ("LDA", "00"),
        ("LDCH", "50"),
        ("LDL", "08"),
        ("LDX", "04"),
        ("MUL", "20"),
        ("OR", "44"),
        ("RD", "D8"),
        ("RSUB", "4C"),
        ("STA", "0C"),
        ("STCH", "54"),
        ("STL", "14"),
        ("STSW", "E8"),
        ("STX", "10"),
        ("SUB", "1C"),
        ("TD", "E0"),
        ("TIX", "2C"),
        ("WD", "DC"),
    ];
    OpTable(
        entries
            .iter()
            .map(|(mnemonic, code)| {
                let entry = OpEntry::new(mnemonic, code, DEFAULT_LENGTH);
                (entry.mnemonic.clone(), entry)
            })
            .collect(),
    )
});

/// Mnemonic -> (length, machine code). Lookup is an exact, case-sensitive match.
#[derive(Debug, Clone, Default)]
pub struct OpTable(IndexMap<String, OpEntry>);

impl OpTable {
    pub fn new() -> Self {
        OpTable(IndexMap::new())
    }

    pub fn sic() -> &'static OpTable {
        &SIC
    }

    /// Build a table, rejecting repeated mnemonics and non-hex machine codes.
    pub fn from_entries<I: IntoIterator<Item = OpEntry>>(entries: I) -> Result<Self, String> {
        let mut table = OpTable::new();
        for entry in entries {
            table.insert(entry)?;
        }
        Ok(table)
    }

    /// Parse the plain text form: `MNEMONIC CODE [LENGTH]` per line.
    pub fn parse_text(text: &str) -> Result<Self, (usize, String)> {
        let mut table = OpTable::new();
        for (idx, raw) in text.lines().enumerate() {
            let words: Vec<&str> = raw.split_whitespace().collect();
            let entry = match words.as_slice() {
                [] => continue,
                [mnemonic, code] => OpEntry::new(mnemonic, code, DEFAULT_LENGTH),
                [mnemonic, code, length] => {
                    let length = length
                        .parse::<u32>()
                        .map_err(|_| (idx, format!("Cannot parse `{}` as length", length)))?;
                    OpEntry::new(mnemonic, code, length)
                }
                _ => return Err((idx, format!("Expected `MNEMONIC CODE [LENGTH]`"))),
            };
            table.insert(entry).map_err(|msg| (idx, msg))?;
        }
        Ok(table)
    }

    fn insert(&mut self, entry: OpEntry) -> Result<(), String> {
        if entry.code.is_empty() || !entry.code.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!(
                "Machine code `{}` of `{}` is not hex",
                entry.code, entry.mnemonic
            ));
        }
        if self.0.contains_key(&entry.mnemonic) {
            return Err(format!("Mnemonic `{}` defined twice", entry.mnemonic));
        }
        self.0.insert(entry.mnemonic.clone(), entry);
        Ok(())
    }

    pub fn lookup(&self, mnemonic: &str) -> Option<&OpEntry> {
        self.0.get(mnemonic)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
