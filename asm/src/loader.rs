use arch::optab::{OpEntry, OpTable};
use std::path::Path;

use crate::error::Error;

/// Read a file into its lines.
pub fn read_lines(path: &str) -> Result<Vec<String>, Error> {
    use std::io::BufRead;

    let file = std::fs::File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    std::io::BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::FileRead)
}

/// Load an operation table. `.yaml`/`.yml` files hold a list of
/// `{mnemonic, code, length}` maps, anything else is `MNEMONIC CODE [LENGTH]` text.
pub fn load_optab(path: &str) -> Result<OpTable, Error> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    let is_yaml = matches!(
        Path::new(path).extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        parse_optab_yaml(&text).map_err(|e| match e {
            Error::Yaml(_, source) => Error::Yaml(path.to_string(), source),
            other => other,
        })
    } else {
        OpTable::parse_text(&text).map_err(|(idx, msg)| Error::OpTableSyntax(idx + 1, msg))
    }
}

pub fn parse_optab_yaml(text: &str) -> Result<OpTable, Error> {
    let entries: Vec<OpEntry> =
        serde_yaml::from_str(text).map_err(|e| Error::Yaml(String::new(), e))?;
    OpTable::from_entries(entries.into_iter().map(|e| OpEntry::new(&e.mnemonic, &e.code, e.length)))
        .map_err(|msg| Error::OpTableSyntax(0, msg))
}

/// Write `contents` to `path`.
pub fn write_file(path: &str, contents: &str) -> Result<(), Error> {
    use std::io::Write;

    let mut file =
        std::fs::File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| Error::FileWrite(path.to_string(), e))
}
