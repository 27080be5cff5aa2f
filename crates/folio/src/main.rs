use clap::{Parser, Subcommand};
use folio_engine::chat::HttpChatBackend;
use folio_engine::cli::{self, ChatOptions, OutputHandlers, ReplOptions};
use folio_engine::RateLimitWindow;

#[derive(Parser)]
#[command(name = "folio", version, about = "Terminal-first personal portfolio")]
struct Args {
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Interactive terminal session (the default)
    Term {
        /// Run a command script instead of an interactive session
        #[arg(long)]
        file: Option<String>,
    },
    /// Chat with the portfolio concierge through a folio server
    Chat {
        /// Base URL of the folio server
        #[arg(long, default_value = "http://127.0.0.1:8787")]
        server: String,
    },
}

#[tokio::main]
async fn main() {
    // Log to stderr so scrollback output stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = OutputHandlers {
        out: |msg| println!("{}", msg),
        err: |msg| eprintln!("{}", msg),
    };

    if let Err(e) = run(Args::parse(), output).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args, output: OutputHandlers) -> Result<(), Box<dyn std::error::Error>> {
    match args.mode.unwrap_or(Mode::Term { file: None }) {
        Mode::Term { file: Some(path) } => cli::run_file(output, &path),
        Mode::Term { file: None } => cli::run_repl(output, ReplOptions::default()).await,
        Mode::Chat { server } => {
            let backend = HttpChatBackend::new(&server);
            let mut window = RateLimitWindow::default();
            cli::run_chat(&backend, &mut window, output, ChatOptions::default()).await
        }
    }
}
