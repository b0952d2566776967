use std::fmt;

/// Text record payload limit in hex characters (30 bytes).
pub const TEXT_MAX_HEX: usize = 60;

/// Program name field width in the header record.
pub const NAME_WIDTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Header { name: String, start: u32, length: u32 },
    Text { start: u32, payload: String },
    End { start: u32 },
}

impl Record {
    pub fn header(name: &str, start: u32, length: u32) -> Self {
        Record::Header {
            name: name.chars().take(NAME_WIDTH).collect(),
            start,
            length,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Header {
                name,
                start,
                length,
            } => write!(f, "H^{:<6}^{:06X}^{:06X}", name, start, length),
            Record::Text { start, payload } => {
                write!(f, "T^{:06X}^{:02X}{}", start, payload.len() / 2, payload)
            }
            Record::End { start } => write!(f, "E^{:06X}", start),
        }
    }
}

// ----------------------------------------------------------------------------
// Text record packing

/// Accumulates object code into text records no longer than `TEXT_MAX_HEX`.
#[derive(Debug, Default)]
pub struct TextPacker {
    start: u32,
    payload: String,
    records: Vec<Record>,
}

impl TextPacker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the object code of the line at `addr`.
    pub fn push(&mut self, addr: u32, code: &str) {
        if code.is_empty() {
            return;
        }
        if code.len() > TEXT_MAX_HEX {
            // Longer than one record: chunk on byte boundaries
            self.flush();
            let mut addr = addr;
            for chunk in code.as_bytes().chunks(TEXT_MAX_HEX) {
                let chunk = String::from_utf8_lossy(chunk).into_owned();
                let bytes = (chunk.len() / 2) as u32;
                self.records.push(Record::Text {
                    start: addr,
                    payload: chunk,
                });
                addr += bytes;
            }
            return;
        }
        if self.payload.len() + code.len() > TEXT_MAX_HEX {
            self.flush();
        }
        if self.payload.is_empty() {
            self.start = addr;
        }
        self.payload.push_str(code);
    }

    /// Close the current record, if it holds anything.
    pub fn flush(&mut self) {
        if !self.payload.is_empty() {
            self.records.push(Record::Text {
                start: self.start,
                payload: std::mem::take(&mut self.payload),
            });
        }
    }

    pub fn finish(mut self) -> Vec<Record> {
        self.flush();
        self.records
    }
}
