
use super::command::Command;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseErr {
    EmptyLine,
    UnknownCommand(String),
}

/// Menu keys are matched case-insensitively after trimming.
pub fn parse_command(input: &str) -> Result<Command, ParseErr> {
    let key = input.trim().to_lowercase();
    if key.is_empty() {
        return Err(ParseErr::EmptyLine);
    }
    Command::from_key(&key).ok_or(ParseErr::UnknownCommand(key))
}

/// Reload needs the whole word.
pub fn confirms_reload(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}

pub fn confirms_save(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}
