use catalog_core::{data::UserId, FilterEvent};
use thiserror::Error;

pub const USAGE: &str =
    "commands: owner <id> | all | search <text> | clear | reset | quit";

/// A line of interactive input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Filter(FilterEvent),
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` is not a user id")]
    InvalidOwner(String),
    #[error("`owner` needs a user id")]
    MissingOwner,
}

impl Command {
    /// Parses one line. Leading whitespace is ignored, and the keyword ends at
    /// the first whitespace character. Everything after that character is the
    /// argument, so a `search` line keeps its text verbatim.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_start();
        let (keyword, rest) = match line.char_indices().find(|(_, c)| c.is_whitespace()) {
            Some((at, c)) => (&line[..at], Some(&line[at + c.len_utf8()..])),
            None => (line, None),
        };

        let event = match keyword {
            "owner" => {
                let id = rest
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .ok_or(CommandError::MissingOwner)?;
                let id = id.parse().map_err(|_| CommandError::InvalidOwner(id.to_owned()))?;
                FilterEvent::SelectOwner(UserId(id))
            }
            "all" => FilterEvent::SelectAllOwners,
            "search" => FilterEvent::SetSearchText(rest.unwrap_or_default().to_owned()),
            "clear" => FilterEvent::ClearSearch,
            "reset" => FilterEvent::ResetAll,
            "quit" | "exit" => return Ok(Command::Quit),
            other => return Err(CommandError::Unknown(other.to_owned())),
        };
        Ok(Command::Filter(event))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn event(line: &str) -> FilterEvent {
        match Command::parse(line) {
            Ok(Command::Filter(event)) => event,
            other => panic!("expected a filter event for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn parses_each_event() {
        assert_eq!(event("owner 2"), FilterEvent::SelectOwner(UserId(2)));
        assert_eq!(event("all"), FilterEvent::SelectAllOwners);
        assert_eq!(event("search cola"), FilterEvent::SetSearchText("cola".into()));
        assert_eq!(event("clear"), FilterEvent::ClearSearch);
        assert_eq!(event("reset"), FilterEvent::ResetAll);
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
    }

    #[test]
    fn search_text_is_verbatim() {
        assert_eq!(event("search  Mac mini "), FilterEvent::SetSearchText(" Mac mini ".into()));
        assert_eq!(event("search"), FilterEvent::SetSearchText(String::new()));
    }

    #[test]
    fn keyword_ends_at_any_whitespace() {
        assert_eq!(event("search\tmac"), FilterEvent::SetSearchText("mac".into()));
        assert_eq!(event("  owner 1"), FilterEvent::SelectOwner(UserId(1)));
        assert_eq!(event("owner\t-3"), FilterEvent::SelectOwner(UserId(-3)));
        assert_eq!(event(" search \tMac "), FilterEvent::SetSearchText("\tMac ".into()));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(Command::parse("owner"), Err(CommandError::MissingOwner));
        assert_eq!(Command::parse("owner roma"), Err(CommandError::InvalidOwner("roma".into())));
        assert_eq!(Command::parse("sort id"), Err(CommandError::Unknown("sort".into())));
    }
}
