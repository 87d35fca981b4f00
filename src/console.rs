use std::io::Write;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

/// Line input and text output for the interactive session.
pub trait Console {
    /// Returns `None` once the user closes the input (Ctrl-C / Ctrl-D).
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReadlineError>;

    /// Writes `text` as-is.
    fn print(&mut self, text: &str);

    fn println(&mut self, text: &str) {
        self.print(text);
        self.print("\n");
    }

    fn success(&mut self, text: &str) {
        self.println(text);
    }

    fn warn(&mut self, text: &str) {
        self.println(text);
    }
}

pub struct TerminalConsole {
    editor: Editor<(), DefaultHistory>,
}

impl TerminalConsole {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            editor: Editor::<(), DefaultHistory>::new()?,
        })
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReadlineError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.trim());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn print(&mut self, text: &str) {
        print!("{}", text);
        let _ = std::io::stdout().flush();
    }

    fn success(&mut self, text: &str) {
        println!("{}", text.green());
    }

    fn warn(&mut self, text: &str) {
        println!("{}", text.yellow());
    }
}
