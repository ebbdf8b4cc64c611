use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pathdraw_core::{Coord2, GameConfig, LevelEditor, Session, level};
use tracing_subscriber::EnvFilter;

use keys::KeyAction;

mod keys;
mod render;

#[derive(Parser, Debug)]
#[command(name = "pathdraw", version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw a path through the board
    Play {
        /// Board configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Level file whose walls replace the configured obstacles
        #[arg(short, long)]
        level: Option<PathBuf>,

        /// Start cell as ROW,COL
        #[arg(short, long, value_parser = parse_coords)]
        start: Option<Coord2>,

        /// Keys to replay; reads lines from stdin when omitted
        keys: Vec<String>,
    },

    /// Paint walls and save the layout as a level file
    Edit {
        /// Level file to start from
        #[arg(long)]
        load: Option<PathBuf>,

        #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE.0)]
        rows: u8,

        #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE.1)]
        cols: u8,

        /// Cell to toggle as ROW,COL, may be repeated
        #[arg(short, long = "toggle", value_parser = parse_coords)]
        toggles: Vec<Coord2>,

        /// Where to save the level; printed to stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print a level file
    Show { level: PathBuf },
}

fn parse_coords(text: &str) -> Result<Coord2, String> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {text:?}"))?;
    let row = row.trim().parse().map_err(|err| format!("bad row: {err}"))?;
    let col = col.trim().parse().map_err(|err| format!("bad column: {err}"))?;
    Ok((row, col))
}

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) {
    let level = verbose.log_level_filter().to_string().to_lowercase();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))
}

fn load_config(
    config: Option<&Path>,
    level_path: Option<&Path>,
    start: Option<Coord2>,
) -> Result<GameConfig> {
    let base = match config {
        Some(path) => toml::from_str(&read_file(path)?)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?,
        None => GameConfig::default(),
    };
    let start = start.unwrap_or(base.start());

    let config = match level_path {
        Some(path) => {
            let grid = level::decode(&read_file(path)?)
                .with_context(|| format!("Could not load level {}", path.display()))?;
            GameConfig::from_level(&grid, start)?
        }
        None => GameConfig::new(base.size(), start, base.obstacles().clone())?,
    };
    log::debug!("config: {:?}", config);
    Ok(config)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Applied {
    /// False once quit was requested.
    running: bool,
    /// Some input changed the board.
    updated: bool,
}

/// Feeds actions to the session, stopping early on quit.
fn apply_actions(session: &mut Session, actions: Vec<KeyAction>) -> Applied {
    let mut updated = false;
    for action in actions {
        match action {
            KeyAction::Quit => {
                return Applied {
                    running: false,
                    updated,
                };
            }
            KeyAction::Apply(input) => {
                let outcome = session.handle(input);
                log::debug!("{:?}: {:?}", input, outcome);
                updated |= outcome.has_update();
            }
        }
    }
    Applied {
        running: true,
        updated,
    }
}

fn play(config: GameConfig, replay: &[String]) -> Result<()> {
    let mut session = Session::new(&config);

    if !replay.is_empty() {
        let actions = replay.iter().flat_map(|key| keys::parse_token(key)).collect();
        apply_actions(&mut session, actions);
        print!("{}", render::render_state(session.state()));
        return Ok(());
    }

    print!("{}", render::render_state(session.state()));
    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read input")?;
        let applied = apply_actions(&mut session, keys::parse_line(&line));
        if applied.updated {
            print!("{}", render::render_state(session.state()));
        }
        if !applied.running {
            break;
        }
    }
    Ok(())
}

fn edit(load: Option<&Path>, size: Coord2, toggles: &[Coord2], out: Option<&Path>) -> Result<()> {
    let mut editor = match load {
        Some(path) => {
            let mut editor = LevelEditor::default();
            editor
                .load(&read_file(path)?)
                .with_context(|| format!("Could not load level {}", path.display()))?;
            editor
        }
        None => LevelEditor::new(size.0, size.1)?,
    };

    for &coords in toggles {
        if !editor.toggle_wall(coords).has_update() {
            log::warn!("{:?} is outside the {:?} grid", coords, editor.grid().size());
        }
    }

    let text = editor.save()?;
    match out {
        Some(path) => {
            std::fs::write(path, text + "\n")
                .with_context(|| format!("Could not write {}", path.display()))?;
            print!("{}", render::render_grid(editor.grid()));
            log::info!("saved level to {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn show(path: &Path) -> Result<()> {
    let grid = level::decode(&read_file(path)?)
        .with_context(|| format!("Could not load level {}", path.display()))?;
    print!("{}", render::render_grid(&grid));
    println!(
        "{}x{} level, {} walls",
        grid.rows(),
        grid.cols(),
        grid.count(pathdraw_core::Cell::Wall)
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);
    log::debug!("{:?}", args.command);

    match args.command {
        Command::Play {
            config,
            level,
            start,
            keys,
        } => play(load_config(config.as_deref(), level.as_deref(), start)?, &keys),
        Command::Edit {
            load,
            rows,
            cols,
            toggles,
            out,
        } => edit(load.as_deref(), (rows, cols), &toggles, out.as_deref()),
        Command::Show { level } => show(&level),
    }
}
