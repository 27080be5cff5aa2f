use folio_common::protocol::CommandResult;
use folio_common::route::Route;

use crate::command::Command;

const HELP_TEXT: &[&str] = &[
    "┌─────────────────────────────────────────────────────────┐",
    "│  Available Commands                                     │",
    "├─────────────────────────────────────────────────────────┤",
    "│  help              Show this help message               │",
    "│  clear             Clear the terminal screen            │",
    "│  ls                List all available paths             │",
    "│  cd <path>         Navigate to a page (e.g. cd /about)  │",
    "│  about             Learn about me                       │",
    "│  projects          View my projects                     │",
    "│  contact           Get my contact information           │",
    "│  start             Quick start guide for visitors       │",
    "│  experiences       View my experiences                  │",
    "└─────────────────────────────────────────────────────────┘",
];

const START_TEXT: &[&str] = &[
    "",
    "  🚀 Welcome to my interactive portfolio!",
    "",
    "  Quick Navigation:",
    "    • Type \"cd /about\" to learn about me",
    "    • Type \"cd /projects\" to see my public work",
    "    • Type \"cd /experiences\" to view my journey",
    "    • Type \"cd /contact\" to get in touch",
    "",
    "  Tips:",
    "    • Use the CHAT tab to ask me anything!",
    "    • Drag the floating cards on the home page",
    "    • Type \"help\" for all available commands",
    "",
];

const LS_TEXT: &[&str] = &[
    "The available paths are:",
    "  /about         - Learn more about my journey",
    "  /projects      - Browse my recent work",
    "  /experiences   - View my skills and history",
    "  /contact       - Get in touch",
];

/// Map one input line to its result.
///
/// Total over all inputs; identical input yields an identical result.
pub fn interpret(raw: &str) -> CommandResult {
    match Command::parse(raw) {
        Command::Empty => CommandResult::empty(),
        Command::Clear => CommandResult::clear(),
        Command::Help => CommandResult::lines(HELP_TEXT.iter().copied()),
        Command::Start => CommandResult::lines(START_TEXT.iter().copied()),
        Command::Ls => CommandResult::lines(LS_TEXT.iter().copied()),
        Command::Cd(None) => CommandResult::line("Usage: cd <path> (e.g., cd /about)"),
        Command::Cd(Some(path)) => match Route::parse(&path) {
            Some(route) => CommandResult::navigate(route),
            None => CommandResult::line(format!("cd: no such file or directory: {path}")),
        },
        Command::About => CommandResult::line(
            "  Hello! I am Twan! I am a software developer who passionate to \
             software development and AI applications",
        ),
        Command::Projects => CommandResult::line(
            "  Check out my projects at /projects by typing \"cd /projects\"",
        ),
        Command::Experiences => CommandResult::line(
            "  Check out my experiences at /experiences by typing \"cd /experiences\"",
        ),
        Command::Contact => CommandResult::line("  Reach me at: contact@example.com"),
        Command::Unknown(input) => CommandResult::line(format!(
            "  Command not found: {input}. Type \"help\" for available commands."
        )),
    }
}
