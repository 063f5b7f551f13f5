mod display;
mod terminal;

use std::fs::File;
use std::io::{stdout, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{cursor, event, terminal as term, ExecutableCommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use monster_catch::{GameConfig, GameLoop, Outcome};

use display::TerminalRenderer;
use terminal::{SleepClock, TerminalAudio, TerminalInput};

#[derive(Parser, Debug)]
#[command(about = "Catch the falling monsters before they land", version)]
struct Args {
    /// JSON file overriding any of the game settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fixed RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,
    /// Where log output goes; the terminal itself is busy with the game
    #[arg(long, default_value = "monster_catch.log")]
    log_file: PathBuf,
    /// Ring the terminal bell for catch and landing sounds
    #[arg(long)]
    bell: bool,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;
    let config = load_config(&args)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("Monster Catch starting, seed {}", seed);

    let mut out = stdout();
    term::enable_raw_mode()?;
    out.execute(term::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(event::EnableMouseCapture)?;

    let result = play(&config, seed, args.bell);

    // Always restore the terminal
    let _ = out.execute(event::DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(term::LeaveAlternateScreen);
    let _ = term::disable_raw_mode();

    match result? {
        Outcome::GameOver { score, level } => {
            println!("Game over: score {} (level {})", score, level)
        }
        Outcome::Quit => println!("Bye!"),
    }
    Ok(())
}

fn play(config: &GameConfig, seed: u64, bell: bool) -> Result<Outcome> {
    let (cols, rows) = term::size()?;
    let mut renderer = TerminalRenderer::new(
        BufWriter::new(stdout()),
        cols,
        rows,
        config.screen_width,
        config.screen_depth,
    );
    let mut game = GameLoop::new(
        config.clone(),
        TerminalAudio::new(bell),
        StdRng::seed_from_u64(seed),
    )?;
    let mut input = TerminalInput::spawn(cols, config.screen_width, game.catcher().x());
    let mut clock = SleepClock::new();

    let outcome = game.run(&mut input, &mut renderer, &mut clock)?;
    Ok(outcome)
}
