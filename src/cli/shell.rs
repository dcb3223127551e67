//! Interactive shell
//!
//! Terminal rendition of the two-pane notebook view: the session list, the
//! entry list of the currently selected session, and the three mutating
//! actions (new session, add entry, export). Commands and prompt answers
//! are read line by line from a single input source, so the shell works the
//! same whether it is driven by a person or a pipe.
//!
//! Adding an entry and exporting require a selected session; `add` without
//! one prints a notice, `export` without one does nothing.

use crate::application;
use crate::cli::output;
use crate::error::{LabbookError, Result};
use crate::infrastructure::{Config, NotebookStore};
use std::io::{BufRead, Write};
use std::path::Path;

pub struct Shell<'a, R, W> {
    store: &'a NotebookStore,
    config: &'a Config,
    input: R,
    out: W,
    selected: Option<i64>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a NotebookStore, config: &'a Config, input: R, out: W) -> Self {
        Shell {
            store,
            config,
            input,
            out,
            selected: None,
        }
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "labbook shell. Type 'help' for commands.")?;
        self.show_sessions()?;

        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };
            let line = line.trim().to_string();
            let (cmd, arg) = match line.split_once(char::is_whitespace) {
                Some((cmd, arg)) => (cmd, arg.trim()),
                None => (line.as_str(), ""),
            };

            match cmd {
                "" => {}
                "sessions" | "ls" => self.show_sessions()?,
                "select" => self.select(arg)?,
                "entries" => self.show_entries()?,
                "new" => self.new_session()?,
                "add" => self.add_entry()?,
                "export" => self.export()?,
                "help" => self.help()?,
                "quit" | "exit" => break,
                other => writeln!(
                    self.out,
                    "Unknown command: '{}'. Type 'help' for commands.",
                    other
                )?,
            }
        }

        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }

    /// Ask for one line of input; a blank answer means cancelled.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}: ", label)?;
        self.out.flush()?;

        match self.read_line()? {
            None => Ok(None),
            Some(line) => {
                let line = line.trim();
                if line.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(line.to_string()))
                }
            }
        }
    }

    fn show_sessions(&mut self) -> Result<()> {
        let sessions = application::list_sessions(self.store)?;
        writeln!(
            self.out,
            "{}",
            output::format_session_list(&sessions).trim_end()
        )?;
        Ok(())
    }

    fn show_entries(&mut self) -> Result<()> {
        let session_id = match self.selected {
            Some(id) => id,
            None => {
                writeln!(self.out, "Select a session first.")?;
                return Ok(());
            }
        };

        let entries = application::list_entries(self.store, session_id)?;
        writeln!(
            self.out,
            "{}",
            output::format_entry_list(&entries).trim_end()
        )?;
        Ok(())
    }

    fn select(&mut self, arg: &str) -> Result<()> {
        let id: i64 = match arg.parse() {
            Ok(id) => id,
            Err(_) => {
                writeln!(self.out, "Usage: select <session id>")?;
                return Ok(());
            }
        };

        match self.store.get_session(id) {
            Ok(session) => {
                self.selected = Some(session.id);
                writeln!(self.out, "Selected: {}", session)?;
                self.show_entries()
            }
            Err(LabbookError::SessionNotFound(_)) => {
                writeln!(self.out, "No session with id {}.", id)?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn new_session(&mut self) -> Result<()> {
        let title = match self.prompt("Session title")? {
            Some(title) => title,
            None => return Ok(()),
        };

        if let Some(id) = application::create_session(self.store, &title)? {
            writeln!(self.out, "Created session {}.", id)?;
            // The list reloads in place; the selection stays where it was.
            self.show_sessions()?;
        }
        Ok(())
    }

    fn add_entry(&mut self) -> Result<()> {
        let session_id = match self.selected {
            Some(id) => id,
            None => {
                writeln!(self.out, "Select a session first.")?;
                return Ok(());
            }
        };

        let description = match self.prompt("Entry description")? {
            Some(description) => description,
            None => return Ok(()),
        };

        let file = match self.prompt("Attachment file")? {
            Some(file) => file,
            None => return Ok(()),
        };
        if !Path::new(&file).is_file() {
            writeln!(self.out, "No such file: {}", file)?;
            return Ok(());
        }

        if application::add_entry(self.store, session_id, &description, Path::new(&file))?
            .is_some()
        {
            self.show_entries()?;
        }
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        let session_id = match self.selected {
            Some(id) => id,
            None => return Ok(()),
        };

        match application::export_session(self.store, session_id, &self.config.export_dir) {
            Ok(path) => writeln!(self.out, "Saved PDF as: {}", path.display())?,
            Err(e) => writeln!(self.out, "Error: {}", e)?,
        }
        Ok(())
    }

    fn help(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "Commands:\n\
             \x20 sessions        list all sessions\n\
             \x20 select <id>     select a session and list its entries\n\
             \x20 entries         list the selected session's entries\n\
             \x20 new             create a session (prompts for a title)\n\
             \x20 add             add an entry to the selected session\n\
             \x20 export          export the selected session to PDF\n\
             \x20 quit            leave the shell"
        )?;
        Ok(())
    }
}
