//! Input line parsing.

use crate::ui::View;

/// One user input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch to a view
    Show(View),

    /// Replace the name field
    SetName(String),

    /// Replace the e-mail field
    SetEmail(String),

    /// Submit the form
    Submit,

    Help,

    /// Redraw the current screen
    Refresh,

    /// End the session
    Quit,

    /// Anything else; carries the command word
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// The command word is matched case-insensitively. Field values are
    /// everything after the single whitespace character that follows the
    /// word, kept verbatim.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();

        let (word, rest) = match trimmed.char_indices().find(|(_, c)| c.is_whitespace()) {
            Some((at, sep)) => (&trimmed[..at], &trimmed[at + sep.len_utf8()..]),
            None => (trimmed, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Command::Refresh,
            ":form" | "form" => Command::Show(View::Form),
            ":list" | "list" | "cards" => Command::Show(View::Gallery),
            "name" => Command::SetName(rest.to_string()),
            "email" | "e-mail" => Command::SetEmail(rest.to_string()),
            "submit" | "add" => Command::Submit,
            "help" | "?" => Command::Help,
            "quit" | "exit" | ":q" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

pub const HELP: &str = "\
Commands:
  :form            show the entry form
  :list            show the contact list
  name <text>      set the name field
  email <text>     set the e-mail field
  submit           add the contact
  help             show this help
  quit             end the session
";
