//! Tile Merge entry point
//!
//! Line-oriented terminal host: reads one command per line from stdin and
//! prints the board after each turn.
//!
//! Commands: `w/a/s/d`, `k/h/j/l` or `up/left/down/right` to slide,
//! `n` for a new game, `q` to quit. An optional first argument names a
//! settings JSON file.

use std::io::{self, BufRead, Write};

use tile_merge::sim::{Direction, GameState, Session};
use tile_merge::Settings;

fn load_settings() -> Settings {
    let Some(path) = std::env::args().nth(1) else {
        return Settings::default();
    };
    match Settings::load_from(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Using default settings ({path}: {e})");
            Settings::default()
        }
    }
}

fn render(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    write!(out, "{}", state.grid)?;
    writeln!(out, "Score: {}   Best tile: {}", state.score, state.max_tile())?;
    if state.is_over {
        writeln!(out, "Game over! Press n for a new game.")?;
    }
    out.flush()
}

fn run() -> io::Result<()> {
    let settings = load_settings();
    let mut session = match Session::new(settings) {
        Ok(session) => session,
        Err(e) => {
            log::warn!("Invalid settings ({e}), falling back to defaults");
            Session::new(Settings::default()).map_err(|e| io::Error::other(e.to_string()))?
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    render(&mut stdout, session.state())?;

    for line in stdin.lock().lines() {
        let line = line?;
        let cmd = line.trim();
        match cmd {
            "" => continue,
            "q" | "quit" => break,
            "n" | "new" => {
                session.new_game();
            }
            _ => match Direction::from_str(cmd) {
                Some(dir) => {
                    if !session.play(dir).changed {
                        writeln!(stdout, "(no move)")?;
                    }
                }
                None => {
                    writeln!(stdout, "Unknown command: {cmd}")?;
                    continue;
                }
            },
        }
        render(&mut stdout, session.state())?;
    }

    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();
    log::info!("Tile Merge starting...");
    run()
}
