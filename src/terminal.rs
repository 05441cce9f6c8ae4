//! Terminal Notebook
//!
//! Line-oriented notebook where the running process is the session. A
//! paragraph is saved when an empty line follows it. Commands start with `:`.

use std::io::{self, BufRead, Write};

use crate::journal::EntryLog;
use crate::notebook::{self, Theme};

/// Commands recognised at the start of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    List,
    Quit,
    Help,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            ":list" | ":l" => Some(Command::List),
            ":quit" | ":q" => Some(Command::Quit),
            ":help" | ":h" => Some(Command::Help),
            _ => None,
        }
    }
}

/// A notebook session bound to an input and an output stream
pub struct TerminalNotebook<R, W> {
    input: R,
    output: W,
    theme: Theme,
    log: EntryLog,
}

impl<R: BufRead, W: Write> TerminalNotebook<R, W> {
    pub fn new(input: R, output: W, theme: Theme) -> Self {
        Self {
            input,
            output,
            theme,
            log: EntryLog::new(),
        }
    }

    /// Run until `:quit` or end of input, returning the session's log
    pub fn run(mut self) -> io::Result<EntryLog> {
        self.greet()?;

        let mut draft = String::new();
        let mut line = String::new();

        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                if !draft.trim().is_empty() {
                    self.save(&draft)?;
                }
                break;
            }

            if let Some(command) = Command::parse(&line) {
                if !draft.trim().is_empty() {
                    self.save(&draft)?;
                }
                draft.clear();

                match command {
                    Command::List => self.list()?,
                    Command::Help => self.help()?,
                    Command::Quit => break,
                }
                continue;
            }

            if line.trim().is_empty() {
                self.save(&draft)?;
                draft.clear();
            } else {
                draft.push_str(&line);
            }
        }

        tracing::info!(entries = self.log.len(), "Terminal session ended");
        self.output.flush()?;
        Ok(self.log)
    }

    fn greet(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", self.theme.heading())?;
        writeln!(self.output, "{}", self.theme.tagline)?;
        writeln!(self.output, "{}", self.theme.placeholder)?;
        writeln!(
            self.output,
            "(End an entry with an empty line. :list shows the notebook, :quit leaves.)"
        )?;
        writeln!(self.output)
    }

    fn help(&mut self) -> io::Result<()> {
        writeln!(self.output, ":list  show the notebook, newest first")?;
        writeln!(self.output, ":quit  end the session (entries are not kept)")?;
        writeln!(self.output, ":help  this message")
    }

    fn save(&mut self, draft: &str) -> io::Result<()> {
        let outcome = notebook::save(&mut self.log, draft, &self.theme);
        writeln!(self.output, "{}", outcome.message())
    }

    fn list(&mut self) -> io::Result<()> {
        let view = notebook::render(&self.log, &self.theme);
        write!(self.output, "{}", view.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (EntryLog, String) {
        let mut output = Vec::new();
        let log = TerminalNotebook::new(Cursor::new(input.to_string()), &mut output, Theme::default())
            .run()
            .unwrap();
        (log, String::from_utf8(output).unwrap())
    }

    fn texts(log: &EntryLog) -> Vec<String> {
        log.list_most_recent_first().map(|e| e.text().to_string()).collect()
    }

    #[test]
    fn test_paragraphs_become_entries() {
        let (log, output) = run("First thought\n\nSecond thought\nstill second\n\n");
        assert_eq!(texts(&log), vec!["Second thought\nstill second", "First thought"]);
        assert_eq!(output.matches(&Theme::default().saved_message).count(), 2);
    }

    #[test]
    fn test_blank_submission_is_rejected() {
        let (log, output) = run("\n");
        assert!(log.is_empty());
        assert!(output.contains("Please write something before saving."));
    }

    #[test]
    fn test_eof_saves_pending_draft() {
        let (log, _) = run("no trailing blank line");
        assert_eq!(texts(&log), vec!["no trailing blank line"]);
    }

    #[test]
    fn test_list_and_quit() {
        let (log, output) = run("one\n\n:list\n:quit\nnever saved\n\n");
        assert_eq!(texts(&log), vec!["one"]);
        assert!(output.contains("📔 Notebook Pages"));
        assert!(!output.contains("never saved"));
    }

    #[test]
    fn test_list_empty_notebook() {
        let (_, output) = run(":list\n");
        assert!(output.contains(&Theme::default().empty_message));
    }
}
