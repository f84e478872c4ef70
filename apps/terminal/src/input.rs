//! Parsing of submitted lines.

/// A submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Guess(String),
    Restart,
    Quit,
    Help,
}

/// Interpret a line. Anything that is not a known command is a guess,
/// including blank lines (the game ignores those).
pub fn parse_line(line: &str) -> Input {
    match line.trim() {
        "/reiniciar" | "/r" => Input::Restart,
        "/sair" | "/q" => Input::Quit,
        "/ajuda" | "/?" => Input::Help,
        _ => Input::Guess(line.to_string()),
    }
}
