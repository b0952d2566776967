use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate symbol: `{0}` at 0x{1:04X}, first defined on line {}", .2 + 1)]
    DuplicateSymbol(String, u32, usize),

    #[error("Undefined symbol: `{0}` referenced at 0x{1:04X}")]
    UndefinedSymbol(String, u32),

    #[error("Invalid opcode: `{0}` at 0x{1:04X}")]
    InvalidOpcode(String, u32),

    #[error("Invalid operand: `{0}` at 0x{1:04X}")]
    InvalidOperand(String, u32),

    #[error("Address of `{0}` does not fit in 4 hex digits: 0x{1:X}")]
    AddressOverflow(String, u32),

    #[error("Program does not begin with START")]
    MissingStart,

    #[error("Program ended before END")]
    MissingEnd,

    #[error("Syntax Error: Expected `LABEL OPCODE OPERAND`, found `{0}`")]
    SyntaxError(String),

    #[error("Operation table line {0}: {1}")]
    OpTableSyntax(usize, String),

    #[error("Failed to parse operation table: {0}")]
    Yaml(String, #[source] serde_yaml::Error),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

/// An error tied to the source row it was found on.
#[derive(Debug)]
pub struct Diagnostic {
    pub row: usize,
    pub error: Error,
}

impl Diagnostic {
    pub fn new(row: usize, error: Error) -> Self {
        Diagnostic { row, error }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, source: &[String]) {
        cprintln!("<red,bold>error</>: {}", self.error);

        // row is 0-based, display as 1-based
        let line_num = self.row + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");

        let line_content = source.get(self.row).map(|s| s.as_str()).unwrap_or("");

        cprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
        cprintln!("      <blue>|</>");
    }
}
