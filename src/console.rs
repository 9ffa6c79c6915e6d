use std::io::{BufRead, Write};

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::diagnostics::Result;

/// Line-based console the dispatcher reads from and writes to.
///
/// `read_line` yields `None` once the input source is exhausted, letting the
/// dispatcher wind down without treating end-of-input as a failure.
pub trait Console {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Interactive console backed by a line editor with per-session history.
pub struct ReadlineConsole {
    editor: DefaultEditor,
}

impl ReadlineConsole {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Console for ReadlineConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                self.editor.add_history_entry(line.as_str()).ok();
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        println!("{line}");
        Ok(())
    }
}

/// Console over arbitrary reader/writer pairs; drives the dispatcher from
/// scripts and tests without a terminal.
pub struct PipeConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PipeConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for PipeConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}
