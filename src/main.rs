//! Mastermind - CLI
//!
//! Code-breaking game with TUI and CLI modes on top of a pure rules engine.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{ReplayConfig, replay, run_simple, score_codes},
    engine::{Engine, GameConfig},
    output::{print_palette, print_score_result},
    palettes::{Swatches, loader::load_from_file},
};
use rand::rngs::StdRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind: break the hidden color code before you run out of rows",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of slots in the secret code
    #[arg(short = 'l', long, global = true, default_value_t = GameConfig::DEFAULT_SLOTS)]
    slots: usize,

    /// Number of guesses allowed
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_ROWS)]
    rows: usize,

    /// Use only the first N palette colors
    #[arg(short, long, global = true)]
    colors: Option<usize>,

    /// Palette: 'default' (six colors) or path to a palette file
    #[arg(short, long, global = true, default_value = "default")]
    palette: String,

    /// Seed for a reproducible secret
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score a guess against a given secret
    Score {
        /// Secret code, e.g. "rose,blue,blue,green" or "1 4 4 3"
        secret: String,

        /// Guess to score against the secret
        guess: String,
    },

    /// Play a scripted game and print its JSON record
    Replay {
        /// A guess to submit (repeat for several turns)
        #[arg(short, long = "guess")]
        guesses: Vec<String>,

        /// Number of hints to request before the first guess
        #[arg(long, default_value_t = 0)]
        hints: usize,

        /// Give up after the last guess
        #[arg(long)]
        give_up: bool,
    },

    /// List the palette colors
    Palette,
}

/// Load swatches based on the -p flag, trimmed by -c
///
/// - "default": the embedded six-color palette
/// - "<path>": load a palette file
fn load_swatches(palette_mode: &str, colors: Option<usize>) -> Result<Swatches> {
    let swatches = match palette_mode {
        "default" => Swatches::embedded(),
        path => load_from_file(path).with_context(|| format!("loading palette '{path}'"))?,
    };

    Ok(match colors {
        Some(count) => swatches.truncated(count),
        None => swatches,
    })
}

fn build_config(cli: &Cli, swatches: &Swatches) -> Result<GameConfig> {
    let palette = swatches.palette().context("invalid palette")?;
    GameConfig::new(palette, cli.slots, cli.rows).context("invalid game settings")
}

fn build_engine(seed: Option<u64>) -> Engine<StdRng> {
    match seed {
        Some(seed) => Engine::seeded(seed),
        None => Engine::from_os_rng(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let swatches = load_swatches(&cli.palette, cli.colors)?;
    let config = build_config(&cli, &swatches)?;
    debug!(
        colors = config.palette().len(),
        slots = config.slots(),
        rows = config.max_rows(),
        "configuration loaded"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.seed, config, swatches),
        Commands::Simple => {
            let mut engine = build_engine(cli.seed);
            run_simple(&mut engine, config, &swatches).map_err(|e| anyhow!(e))
        }
        Commands::Score { secret, guess } => {
            let result =
                score_codes(&secret, &guess, config.palette()).map_err(|e| anyhow!(e))?;
            print_score_result(&result, &swatches);
            Ok(())
        }
        Commands::Replay {
            guesses,
            hints,
            give_up,
        } => run_replay_command(cli.seed, guesses, hints, give_up, config),
        Commands::Palette => {
            print_palette(&swatches);
            Ok(())
        }
    }
}

fn run_replay_command(
    seed: Option<u64>,
    guesses: Vec<String>,
    hints: usize,
    give_up: bool,
    config: GameConfig,
) -> Result<()> {
    let seed = seed.unwrap_or_else(|| {
        let seed = rand::random();
        eprintln!("Using seed {seed} (pass --seed to reproduce)");
        seed
    });

    let mut replay_config = ReplayConfig::new(seed, guesses);
    replay_config.hints = hints;
    replay_config.give_up = give_up;

    let record = replay(replay_config, config).map_err(|e| anyhow!(e))?;
    println!("{}", record.to_json().context("serializing game record")?);
    Ok(())
}

fn run_play_command(seed: Option<u64>, config: GameConfig, swatches: Swatches) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(build_engine(seed), config, swatches);
    run_tui(app)
}
