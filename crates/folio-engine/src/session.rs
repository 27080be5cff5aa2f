use folio_common::protocol::CommandResult;
use folio_common::route::Route;
use folio_parser::interpret;

/// Prompt prefix prepended to every echoed command.
pub const PROMPT_PREFIX: &str = "➜ visitor@portfolio:~$";

/// Lines shown when a fresh session opens.
pub const BANNER_LINES: &[&str] = &[
    "➜  visitor@portfolio:~$ init_session --guest",
    "   [INFO] Environment loaded. Welcome to the interactive portfolio.",
    "",
];

/// Quick-action presets: a display label and the literal command it injects.
pub const QUICK_ACTIONS: &[(&str, &str)] = &[
    ("Who are you?", "about"),
    ("Show Projects", "work"),
    ("How to contact?", "contact"),
];

/// The routing collaborator. The session only reports intent; the
/// navigator performs the actual view transition.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// A navigator that drops navigation on the floor. Useful for script mode
/// where there is no view to transition.
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn navigate(&mut self, _route: Route) {}
}

/// Stateful terminal session: owns the scrollback log and the pending
/// input buffer, and bridges submissions to the interpreter.
#[derive(Debug)]
pub struct Session {
    scrollback: Vec<String>,
    input: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            scrollback: BANNER_LINES.iter().map(|s| s.to_string()).collect(),
            input: String::new(),
        }
    }

    /// A session with an empty scrollback, no banner.
    pub fn bare() -> Self {
        Self {
            scrollback: Vec::new(),
            input: String::new(),
        }
    }

    pub fn scrollback(&self) -> &[String] {
        &self.scrollback
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Submit the pending input buffer. The buffer is reset to empty
    /// regardless of outcome.
    pub fn submit_input<N: Navigator + ?Sized>(&mut self, navigator: &mut N) -> CommandResult {
        let raw = std::mem::take(&mut self.input);
        self.submit(navigator, &raw)
    }

    /// Run one command through the submission pipeline. Typed input and
    /// quick-action presets both land here, so scrollback and navigation
    /// stay consistent across the two entry points.
    pub fn submit<N: Navigator + ?Sized>(
        &mut self,
        navigator: &mut N,
        raw: &str,
    ) -> CommandResult {
        // Echo first; a clear result discards this line along with the rest.
        self.scrollback.push(format!("{PROMPT_PREFIX} {raw}"));

        let result = interpret(raw.trim());

        if result.should_clear {
            self.scrollback.clear();
        }
        self.scrollback.extend(result.output.iter().cloned());

        if let Some(route) = result.navigation {
            navigator.navigate(route);
        }

        self.input.clear();
        result
    }
}
