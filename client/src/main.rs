mod config;
mod console;

use std::io;

use clap::{Parser, ValueEnum};
use common::games::SessionRng;
use common::games::tictactoe::{GameMode, Player, TicTacToeSession};
use common::{log, logger};

use config::{Config, get_config_manager};

const CONFIG_FILE: &str = "tic_tac_toe_client_config.yaml";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    VsComputer,
    TwoPlayers,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::VsComputer => GameMode::VsComputer,
            ModeArg::TwoPlayers => GameMode::TwoPlayers,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Player {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Player::X,
            MarkArg::O => Player::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "tic_tac_toe_client")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Which mark the computer plays
    #[arg(long, value_enum)]
    computer: Option<MarkArg>,

    #[arg(long)]
    seed: Option<u64>,

    /// Enable logging to stderr regardless of the config file
    #[arg(long)]
    log: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(&args.config);
    let mut config: Config = config_manager.get_config()?;

    if let Some(mode) = args.mode {
        config.game.mode = mode.into();
    }
    if let Some(computer) = args.computer {
        config.game.computer_player = computer.into();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.log {
        config.logging.enabled = true;
    }
    if args.use_log_prefix && config.logging.prefix.is_none() {
        config.logging.prefix = Some("Client".to_string());
    }

    if args.save_config {
        config_manager.set_config(&config)?;
    }

    if config.logging.enabled {
        logger::init_logger(config.logging.prefix.clone());
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut session = TicTacToeSession::new(config.game, rng);
    log!("Client started from {} with seed {}", args.config, session.seed());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console::run(&mut session, stdin.lock(), &mut stdout)?;

    log!("Client exited");
    Ok(())
}
