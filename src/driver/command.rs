//! Commands accepted by the terminal driver

use std::str::FromStr;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select the gallery used by the next search
    Gallery(String),
    /// Start a new search in the selected gallery
    Search(String),
    /// Fetch the next batch for the active search
    More,
    /// Jump to a window
    Page(usize),
    Next,
    Prev,
    /// Look up galleries by name
    Galleries(String),
    Presets,
    Show,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
commands:
  gallery <id>         select gallery for the next search
  search <keyword>     start a new search
  more                 fetch the next batch and append it
  page <n>             jump to window n
  next | prev          move one window
  galleries <keyword>  look up gallery ids
  presets              list preset galleries
  show                 redraw the current window
  help                 this text
  quit                 exit";

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let require = |what: &str| -> Result<String, String> {
            if rest.is_empty() {
                Err(format!("'{head}' needs {what}"))
            } else {
                Ok(rest.to_string())
            }
        };

        match head.to_ascii_lowercase().as_str() {
            "gallery" | "g" => require("a gallery id").map(Command::Gallery),
            "search" | "s" => require("a keyword").map(Command::Search),
            "more" | "m" => Ok(Command::More),
            "page" | "p" => {
                let raw = require("a page number")?;
                raw.parse::<usize>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .map(Command::Page)
                    .ok_or_else(|| format!("'{raw}' is not a page number"))
            }
            "next" | "n" => Ok(Command::Next),
            "prev" | "previous" => Ok(Command::Prev),
            "galleries" => require("a keyword").map(Command::Galleries),
            "presets" => Ok(Command::Presets),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command '{other}' (try 'help')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_keeps_inner_spaces() {
        assert_eq!(
            "search  genji  blade ".parse::<Command>(),
            Ok(Command::Search("genji  blade".to_string()))
        );
    }

    #[test]
    fn page_requires_positive_number() {
        assert_eq!("page 3".parse::<Command>(), Ok(Command::Page(3)));
        assert!("page 0".parse::<Command>().is_err());
        assert!("page x".parse::<Command>().is_err());
        assert!("page".parse::<Command>().is_err());
    }

    #[test]
    fn blank_line_redraws() {
        assert_eq!("   ".parse::<Command>(), Ok(Command::Show));
    }
}
