use super::Prompter;
use crate::config::FieldSpec;
use crate::error::PromptFailure;
use std::io::{BufRead, Write};

/// Reads one line per field from `reader`, writing `"<name>: "` labels to `labels`.
///
/// Only the line terminator is stripped, so surrounding whitespace and empty
/// lines come back as entered.
pub struct LinePrompter<R, W> {
    reader: R,
    labels: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub const fn new(reader: R, labels: W) -> Self {
        Self { reader, labels }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, field: &FieldSpec) -> Result<String, PromptFailure> {
        write!(self.labels, "{}: ", field.name)?;
        self.labels.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptFailure::Closed(field.name.clone()));
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn close(&mut self) {
        // Nothing useful to do if the label stream is already gone.
        self.labels.flush().ok();
    }
}
