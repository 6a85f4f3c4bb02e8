//! Parsing of typed lines into user actions.

use ecoquest_progress::domain::commands::Confirmation;

/// One user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Pick the n-th (1-based) choice of the current story.
    Choose(usize),
    /// Mark the active quest as done.
    Complete,
    /// Open or close the history overlay.
    ToggleHistory,
    /// Return to the day-cycle view.
    Back,
    /// Ask to wipe all progress.
    Reset,
    /// Show the command list.
    Help,
    /// Exit.
    Quit,
    /// Nothing recognizable.
    Unknown,
}

/// Parses a line typed at the main prompt.
#[must_use]
pub fn parse_input(line: &str) -> Input {
    let word = line.trim().to_ascii_lowercase();
    if let Ok(n) = word.parse::<usize>() {
        return if n == 0 { Input::Unknown } else { Input::Choose(n) };
    }
    match word.as_str() {
        "d" | "done" | "complete" => Input::Complete,
        "h" | "history" => Input::ToggleHistory,
        "b" | "back" | "home" => Input::Back,
        "reset" => Input::Reset,
        "?" | "help" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        _ => Input::Unknown,
    }
}

/// Parses the answer to the reset prompt. Anything but an explicit yes
/// declines.
#[must_use]
pub fn parse_confirmation(line: &str) -> Confirmation {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Confirmation::Confirmed,
        _ => Confirmation::Declined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers_as_choices() {
        assert_eq!(parse_input("1"), Input::Choose(1));
        assert_eq!(parse_input(" 2 \n"), Input::Choose(2));
        assert_eq!(parse_input("0"), Input::Unknown);
    }

    #[test]
    fn test_parse_keywords_case_insensitively() {
        assert_eq!(parse_input("DONE"), Input::Complete);
        assert_eq!(parse_input("h"), Input::ToggleHistory);
        assert_eq!(parse_input("Back"), Input::Back);
        assert_eq!(parse_input("reset"), Input::Reset);
        assert_eq!(parse_input("?"), Input::Help);
        assert_eq!(parse_input("quit"), Input::Quit);
        assert_eq!(parse_input("dance"), Input::Unknown);
        assert_eq!(parse_input(""), Input::Unknown);
    }

    #[test]
    fn test_only_explicit_yes_confirms_reset() {
        assert_eq!(parse_confirmation("y"), Confirmation::Confirmed);
        assert_eq!(parse_confirmation("YES"), Confirmation::Confirmed);
        assert_eq!(parse_confirmation(""), Confirmation::Declined);
        assert_eq!(parse_confirmation("n"), Confirmation::Declined);
        assert_eq!(parse_confirmation("sure"), Confirmation::Declined);
    }
}
