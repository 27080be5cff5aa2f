/// The closed set of recognized commands.
///
/// Command names match case-insensitively; arguments keep their case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty or whitespace-only input.
    Empty,
    Clear,
    Help,
    /// `start` / `getting-started`.
    Start,
    Ls,
    /// `cd` with its first positional argument, if any. Extra arguments
    /// beyond the first are ignored, matching shell `cd`.
    Cd(Option<String>),
    About,
    /// `projects` / `work`.
    Projects,
    Experiences,
    Contact,
    /// Anything else, carrying the trimmed raw input for the error echo.
    Unknown(String),
}

impl Command {
    /// Tokenize a raw input line and classify its command name.
    ///
    /// Splits on runs of whitespace; the first token lower-cased selects
    /// the command, remaining tokens are positional arguments.
    pub fn parse(raw: &str) -> Command {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Command::Empty;
        }

        let mut tokens = trimmed.split_whitespace();
        let name = tokens
            .next()
            .map(str::to_lowercase)
            .unwrap_or_default();

        match name.as_str() {
            "clear" => Command::Clear,
            "help" => Command::Help,
            "start" | "getting-started" => Command::Start,
            "ls" => Command::Ls,
            "cd" => Command::Cd(tokens.next().map(str::to_string)),
            "about" => Command::About,
            "projects" | "work" => Command::Projects,
            "experiences" => Command::Experiences,
            "contact" => Command::Contact,
            _ => Command::Unknown(trimmed.to_string()),
        }
    }
}
