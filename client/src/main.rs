mod config;
mod console_input;
mod renderer;

use std::io;
use std::path::Path;

use clap::Parser;
use common::games::SessionRng;
use common::games::n_in_a_row::GameSession;
use common::{log, logger};

use config::{get_config_manager, get_config_path};
use console_input::ConsoleInput;
use renderer::ConsoleRenderer;

#[derive(Parser)]
#[command(name = "n_in_a_row", about = "N-in-a-row for the terminal, against a friend or a bot")]
struct Args {
    /// YAML configuration file; defaults to n_in_a_row_config.yaml next to the binary
    #[arg(long)]
    config: Option<String>,

    /// Seed for the bot's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Append log lines to this file
    #[arg(long)]
    log_file: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Print marks without terminal colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(get_config_path);
    let mut config = get_config_manager(&config_path).get_config()?;
    if args.no_color {
        config.display.use_colors = false;
    }

    let prefix = if args.use_log_prefix || config.log.use_prefix {
        Some("Game".to_string())
    } else {
        None
    };
    let log_file = args.log_file.as_ref().or(config.log.file.as_ref());
    if let Err(e) = logger::init_logger(prefix.clone(), log_file.map(Path::new)) {
        eprintln!("Warning: {}. Continuing without a log file.", e);
        logger::init_logger(prefix, None)?;
    }

    let rng = match args.seed.or(config.bot.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Loaded config from {}", config_path);

    let stdin = io::stdin();
    let input = ConsoleInput::new(stdin.lock(), io::stdout());
    let renderer = ConsoleRenderer::new(io::stdout(), config.display);

    let mut session = GameSession::new(input, renderer, rng);
    let results = session.run();
    log!("Played {} round(s)", results.len());

    Ok(())
}
