//! Line-oriented command parsing.

use crate::domain::{DistancePref, Intent, ParsePreferenceError, PricePref};

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward to the orchestrator.
    Intent(Intent),
    /// Print the command list.
    Help,
    /// Leave the program.
    Quit,
}

/// Reasons an input line is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The first word is not a command.
    #[error("unknown command '{input}'; type 'help' for the list")]
    Unknown {
        /// The offending word.
        input: String,
    },
    /// A command that takes a value was given none.
    #[error("'{command}' needs a value")]
    MissingArgument {
        /// Command name.
        command: &'static str,
    },
    /// The value is not one of the command's options.
    #[error(transparent)]
    InvalidPreference(#[from] ParsePreferenceError),
}

/// Command summary printed by `help`.
pub const HELP_TEXT: &str = "\
commands:
  recommend | r          pick a restaurant
  reroll                 pick another one
  directions | d         open walking directions
  home                   back to the filters
  retry                  start over after an error
  relocate               refresh the current position
  grant                  allow the location request
  price <any|cheap|normal|expensive>
  distance <any|near|normal>
  lang                   switch between Korean and English
  help | ?               show this list
  quit | q               exit";

/// Parse one line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`CommandError`] for unknown commands and bad preference values.
///
/// # Examples
/// ```
/// use roulette::domain::{Intent, PricePref};
/// use roulette::inbound::terminal::{Command, parse_command};
///
/// assert_eq!(
///     parse_command(" price cheap ").expect("valid"),
///     Some(Command::Intent(Intent::SetPrice(PricePref::Cheap)))
/// );
/// assert_eq!(parse_command("").expect("blank"), None);
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();
    let command = match head.to_ascii_lowercase().as_str() {
        "recommend" | "r" => Command::Intent(Intent::Recommend),
        "reroll" => Command::Intent(Intent::Reroll),
        "directions" | "d" => Command::Intent(Intent::OpenDirections),
        "home" => Command::Intent(Intent::GoHome),
        "retry" => Command::Intent(Intent::Retry),
        "relocate" => Command::Intent(Intent::Relocate),
        "grant" => Command::Intent(Intent::GrantPermission),
        "lang" => Command::Intent(Intent::ToggleLanguage),
        "price" => {
            let value = argument.ok_or(CommandError::MissingArgument { command: "price" })?;
            Command::Intent(Intent::SetPrice(value.parse::<PricePref>()?))
        }
        "distance" => {
            let value = argument.ok_or(CommandError::MissingArgument {
                command: "distance",
            })?;
            Command::Intent(Intent::SetDistance(value.parse::<DistancePref>()?))
        }
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => {
            return Err(CommandError::Unknown {
                input: head.to_owned(),
            });
        }
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("recommend", Command::Intent(Intent::Recommend))]
    #[case("R", Command::Intent(Intent::Recommend))]
    #[case("reroll", Command::Intent(Intent::Reroll))]
    #[case("d", Command::Intent(Intent::OpenDirections))]
    #[case("home", Command::Intent(Intent::GoHome))]
    #[case("retry", Command::Intent(Intent::Retry))]
    #[case("relocate", Command::Intent(Intent::Relocate))]
    #[case("grant", Command::Intent(Intent::GrantPermission))]
    #[case("lang", Command::Intent(Intent::ToggleLanguage))]
    #[case("distance near", Command::Intent(Intent::SetDistance(DistancePref::Near)))]
    #[case("price Expensive", Command::Intent(Intent::SetPrice(PricePref::Expensive)))]
    #[case("?", Command::Help)]
    #[case("quit", Command::Quit)]
    fn parses_known_commands(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(parse_command(line).expect("valid command"), Some(expected));
    }

    #[rstest]
    #[case("", None)]
    #[case("   \t", None)]
    fn blank_lines_are_skipped(#[case] line: &str, #[case] expected: Option<Command>) {
        assert_eq!(parse_command(line).expect("blank"), expected);
    }

    #[rstest]
    fn rejects_unknown_commands() {
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown {
                input: "dance".to_owned()
            })
        );
    }

    #[rstest]
    fn rejects_missing_and_invalid_values() {
        assert_eq!(
            parse_command("price"),
            Err(CommandError::MissingArgument { command: "price" })
        );
        assert!(matches!(
            parse_command("distance far"),
            Err(CommandError::InvalidPreference(_))
        ));
    }
}
