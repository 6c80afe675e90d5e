//! Terminal input parsing
//!
//! Plain lines replace the query text. Lines starting with `:` are edit
//! commands; a doubled `::` escapes a literal leading colon.

use shared::AccountId;

use crate::error::{SearcherError, SearcherResult};
use crate::types::ControllerEvent;

pub const HELP: &str = "type to search | :edit  :all  :toggle <id>  :dup  :del  :clear  :quit";

pub fn parse_line(line: &str) -> SearcherResult<ControllerEvent> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);

    if let Some(literal) = line.strip_prefix("::") {
        return Ok(ControllerEvent::Input(format!(":{literal}")));
    }

    let Some(command) = line.strip_prefix(':') else {
        return Ok(ControllerEvent::Input(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let event = match (parts.next(), parts.next(), parts.next()) {
        (Some("edit"), None, None) => ControllerEvent::ToggleEditMode,
        (Some("all"), None, None) => ControllerEvent::ToggleAll,
        (Some("dup"), None, None) => ControllerEvent::Duplicate,
        (Some("del"), None, None) => ControllerEvent::Delete,
        (Some("clear"), None, None) => ControllerEvent::Clear,
        (Some("quit" | "q"), None, None) => ControllerEvent::Quit,
        (Some("toggle"), Some(id), None) => {
            let id = id.parse::<AccountId>().map_err(|_| SearcherError::CommandError {
                input: line.to_string(),
            })?;
            ControllerEvent::ToggleSelect(id)
        }
        _ => {
            return Err(SearcherError::CommandError {
                input: line.to_string(),
            })
        }
    };

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_query_input() {
        assert_eq!(
            parse_line("octo cat\n").unwrap(),
            ControllerEvent::Input("octo cat".to_string())
        );
        assert_eq!(parse_line("").unwrap(), ControllerEvent::Input(String::new()));
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse_line(":edit").unwrap(), ControllerEvent::ToggleEditMode);
        assert_eq!(parse_line(":all").unwrap(), ControllerEvent::ToggleAll);
        assert_eq!(parse_line(":dup").unwrap(), ControllerEvent::Duplicate);
        assert_eq!(parse_line(":del\r\n").unwrap(), ControllerEvent::Delete);
        assert_eq!(parse_line(":clear").unwrap(), ControllerEvent::Clear);
        assert_eq!(parse_line(":q").unwrap(), ControllerEvent::Quit);
        assert_eq!(
            parse_line(":toggle 583231").unwrap(),
            ControllerEvent::ToggleSelect(AccountId::new(583231))
        );
    }

    #[test]
    fn test_escaped_colon() {
        assert_eq!(
            parse_line("::edit").unwrap(),
            ControllerEvent::Input(":edit".to_string())
        );
    }

    #[test]
    fn test_invalid_commands() {
        for line in [":nope", ":toggle", ":toggle abc", ":toggle 1 2", ":edit now", ":"] {
            assert!(
                matches!(parse_line(line), Err(SearcherError::CommandError { .. })),
                "expected error for {line:?}"
            );
        }
    }
}
