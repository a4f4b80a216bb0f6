//! Reassemble logical entries from a stream of physical lines.
//!
//! A new entry begins at every line that matches the header grammar.
//! Lines that do not (stack frames, wrapped messages, leading junk) are
//! appended to the entry being built. A header-shaped line inside a stack
//! trace therefore splits the entry; there is no look-ahead to correct it.

use super::grammar::is_entry_header;
use super::schema::LogicalEntry;
use log::debug;
use std::io::{self, BufRead};

/// Lazy iterator of [`LogicalEntry`] values over any line-oriented reader
///
/// **Public** - main entry point for reassembly
///
/// Entries are yielded in input order. A read error is yielded once and
/// ends the iteration.
///
/// # Example
/// ```ignore
/// let file = BufReader::new(File::open("php_errors.log")?);
/// for entry in EntryReassembler::new(file) {
///     let entry = entry?;
///     println!("{} lines", entry.lines().len());
/// }
/// ```
pub struct EntryReassembler<R> {
    reader: R,
    buffer: LogicalEntry,
    lines_read: u64,
    finished: bool,
}

impl<R: BufRead> EntryReassembler<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: LogicalEntry::new(),
            lines_read: 0,
            finished: false,
        }
    }

    /// Number of physical lines consumed so far
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Read one line including its terminator; `None` at end of stream
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.lines_read += 1;
        Ok(Some(line))
    }
}

impl<R: BufRead> Iterator for EntryReassembler<R> {
    type Item = io::Result<LogicalEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.next_line() {
                Ok(Some(line)) => {
                    if is_entry_header(&line) && !self.buffer.is_empty() {
                        let complete = std::mem::take(&mut self.buffer);
                        self.buffer.push(line);
                        return Some(Ok(complete));
                    }
                    self.buffer.push(line);
                }
                Ok(None) => {
                    self.finished = true;
                    debug!("End of stream after {} lines", self.lines_read);
                    if self.buffer.is_empty() {
                        return None;
                    }
                    return Some(Ok(std::mem::take(&mut self.buffer)));
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
