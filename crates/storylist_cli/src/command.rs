//! Line command parsing for the terminal view.

use std::fmt::{Display, Formatter};
use storylist_core::{RecordId, RecordIdParseError, ViewIntent};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to the core session.
    Intent(ViewIntent),
    Show,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingId(&'static str),
    InvalidId(RecordIdParseError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command `{word}`; type `help`"),
            Self::MissingId(verb) => write!(f, "`{verb}` needs a record id"),
            Self::InvalidId(err) => write!(f, "{err}"),
        }
    }
}

pub const HELP: &str = "commands:
  search <text>   edit the search box (empty text clears it)
  draft <text>    edit the new-record title (empty text clears it)
  add             click Add
  delete <id>     click Delete on a row
  toggle <id>     click Done/Undo on a row
  show            re-render
  json            print the view model as JSON
  help            show this help
  quit            exit";

/// Parses one input line.
///
/// Text arguments keep their inner spacing; only the single separator after
/// the verb is consumed.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\n', '\r']);
    let (verb, rest) = match line.trim_start().split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim(), ""),
    };

    match verb {
        "search" => Ok(Command::Intent(ViewIntent::SearchEdit(rest.to_string()))),
        "draft" => Ok(Command::Intent(ViewIntent::DraftEdit(rest.to_string()))),
        "add" => Ok(Command::Intent(ViewIntent::AddClick)),
        "delete" => parse_id("delete", rest).map(|id| Command::Intent(ViewIntent::DeleteClick(id))),
        "toggle" => parse_id("toggle", rest).map(|id| Command::Intent(ViewIntent::ToggleClick(id))),
        "show" | "" => Ok(Command::Show),
        "json" => Ok(Command::Json),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_id(verb: &'static str, rest: &str) -> Result<RecordId, CommandError> {
    if rest.trim().is_empty() {
        return Err(CommandError::MissingId(verb));
    }
    rest.parse::<RecordId>().map_err(CommandError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, CommandError};
    use storylist_core::{RecordId, ViewIntent};

    #[test]
    fn text_commands_keep_inner_spacing() {
        assert_eq!(
            parse_command("search  re dux\n").expect("search parses"),
            Command::Intent(ViewIntent::SearchEdit(" re dux".to_string()))
        );
        assert_eq!(
            parse_command("draft").expect("bare draft parses"),
            Command::Intent(ViewIntent::DraftEdit(String::new()))
        );
    }

    #[test]
    fn id_commands_parse_seed_ids() {
        assert_eq!(
            parse_command("toggle 1").expect("toggle parses"),
            Command::Intent(ViewIntent::ToggleClick(RecordId::Seed(1)))
        );
        assert_eq!(
            parse_command("delete 0").expect("delete parses"),
            Command::Intent(ViewIntent::DeleteClick(RecordId::Seed(0)))
        );
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(
            parse_command("delete"),
            Err(CommandError::MissingId("delete"))
        );
        assert!(matches!(
            parse_command("toggle nope"),
            Err(CommandError::InvalidId(_))
        ));
        assert_eq!(
            parse_command("undo"),
            Err(CommandError::Unknown("undo".to_string()))
        );
    }

    #[test]
    fn blank_line_rerenders() {
        assert_eq!(parse_command("").expect("blank parses"), Command::Show);
    }
}
