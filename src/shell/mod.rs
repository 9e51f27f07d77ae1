
mod command;
mod display;
mod parser;

use std::io::{BufRead, Write};

use color_print::cformat;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::inventory::{parse_identifier, Inventory};
use crate::storage;
use command::Command;
use display::{write_inventory, MENU};
use parser::{confirms_reload, confirms_save, parse_command};

const MENU_PROMPT: &str = "Which operation would you like to perform? [l, a, i, d, s or x]: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    MenuPrompt,
    Dispatch(Command),
    Terminated,
}

/// Interactive session over the one live inventory. Menu choices are read
/// from `input` and everything the user sees is written to `output`.
pub struct Shell<R, W> where R: BufRead, W: Write {
    config: Config,
    inventory: Inventory,
    input: R,
    output: W,
}

impl<R, W> Shell<R, W> where R: BufRead, W: Write {
    pub fn new(config: Config, inventory: Inventory, input: R, output: W) -> Self {
        Self {
            config,
            inventory,
            input,
            output,
        }
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Runs until the user exits or input is closed. Only failures writing
    /// to the console end the session with an error.
    pub fn start(&mut self) -> Result<()> {
        info!(records = self.inventory.len(), "session started");
        let mut state = State::MenuPrompt;
        loop {
            state = match state {
                State::MenuPrompt => {
                    writeln!(self.output, "{MENU}")?;
                    match self.menu_choice()? {
                        Some(command) => State::Dispatch(command),
                        None => State::Terminated,
                    }
                }
                State::Dispatch(command) => {
                    debug!(?command, "dispatching");
                    self.dispatch(command)?
                }
                State::Terminated => {
                    info!("session ended");
                    return Ok(());
                }
            };
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<State> {
        match command {
            Command::Load => self.reload(),
            Command::Add => self.add_record(),
            Command::Inspect => {
                self.show_inventory()?;
                Ok(State::MenuPrompt)
            }
            Command::Delete => self.delete_record(),
            Command::Save => self.save(),
            Command::Exit => Ok(State::Terminated),
        }
    }

    /// Prints `prompt` and reads one line. `None` means input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        /* Bytes that aren't UTF-8 are replaced rather than rejected, so
         * stray input can't end the session. */
        let mut buf = vec![];
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("input closed");
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn menu_choice(&mut self) -> Result<Option<Command>> {
        loop {
            let Some(line) = self.read_line(MENU_PROMPT)? else {
                return Ok(None);
            };
            match parse_command(&line) {
                Ok(command) => {
                    writeln!(self.output)?;
                    return Ok(Some(command));
                }
                Err(e) => debug!(?e, "ignoring menu input"),
            }
        }
    }

    /// Prompts until the answer is an integer. Returns it together with the
    /// trimmed text the user typed.
    fn read_identifier(&mut self, prompt: &str) -> Result<Option<(i64, String)>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse_identifier(&line) {
                Ok(id) => return Ok(Some((id, line.trim().to_string()))),
                Err(e) => writeln!(self.output, "That is not an integer, please try again. ({e})")?,
            }
        }
    }

    fn show_inventory(&mut self) -> Result<()> {
        write_inventory(&mut self.output, &self.inventory)?;
        Ok(())
    }

    fn reload(&mut self) -> Result<State> {
        let path = self.config.data_file.clone();
        if !storage::exists(&path) {
            writeln!(self.output, "File {} not found.", path.display())?;
            writeln!(self.output, "No data will be loaded.")?;
            return Ok(State::MenuPrompt);
        }

        writeln!(self.output, "File found.")?;
        writeln!(
            self.output,
            "{}",
            cformat!("<yellow>WARNING</yellow>: If you continue, all unsaved data will be lost and the Inventory re-loaded from file.")
        )?;
        let Some(answer) = self.read_line("Type 'yes' to continue and reload from file. Otherwise, reload will be canceled: ")? else {
            return Ok(State::Terminated);
        };

        if confirms_reload(&answer) {
            writeln!(self.output, "reloading...")?;
            match storage::load(&path) {
                Ok(inventory) => self.inventory = inventory,
                Err(e) => {
                    error!(path = %path.display(), error = %e, "reload failed");
                    writeln!(self.output, "{}", cformat!("<red>Unable to reload</red>: {}", e))?;
                    writeln!(self.output, "The current Inventory was kept.")?;
                }
            }
        } else {
            info!("reload canceled");
            if self.read_line("canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu.")?.is_none() {
                return Ok(State::Terminated);
            }
        }
        self.show_inventory()?;
        Ok(State::MenuPrompt)
    }

    fn add_record(&mut self) -> Result<State> {
        let Some((_, id)) = self.read_identifier("Enter ID: ")? else {
            return Ok(State::Terminated);
        };
        let Some(title) = self.read_line("What is the title? ")? else {
            return Ok(State::Terminated);
        };
        let Some(creator) = self.read_line("Who is the creator? ")? else {
            return Ok(State::Terminated);
        };

        self.inventory.add(&id, title.trim(), creator.trim())?;
        self.show_inventory()?;
        Ok(State::MenuPrompt)
    }

    fn delete_record(&mut self) -> Result<State> {
        self.show_inventory()?;
        let Some((id, _)) = self.read_identifier("Which ID would you like to delete? ")? else {
            return Ok(State::Terminated);
        };

        if self.inventory.remove(id) {
            writeln!(self.output, "{}", cformat!("<green>The record was removed</green>\n"))?;
        } else {
            writeln!(self.output, "{}", cformat!("<red>Could not find this record!</red>\n"))?;
        }
        self.show_inventory()?;
        Ok(State::MenuPrompt)
    }

    fn save(&mut self) -> Result<State> {
        self.show_inventory()?;
        let Some(answer) = self.read_line("Save this inventory to file? [y/n] ")? else {
            return Ok(State::Terminated);
        };

        if !confirms_save(&answer) {
            if self.read_line("The inventory was NOT saved to file. Press [ENTER] to return to the menu.")?.is_none() {
                return Ok(State::Terminated);
            }
            return Ok(State::MenuPrompt);
        }

        let path = self.config.data_file.clone();
        match storage::save(&path, &self.inventory) {
            Ok(()) => writeln!(self.output, "{}", cformat!("<green>Inventory saved to {}</green>", path.display()))?,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "save failed");
                writeln!(self.output, "{}", cformat!("<red>Unable to save inventory</red>: {}", e))?;
                writeln!(self.output, "The inventory was NOT saved to file.")?;
            }
        }
        Ok(State::MenuPrompt)
    }
}
