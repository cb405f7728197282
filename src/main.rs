//! Console 2048 runner (default binary).
//!
//! Stands in for the on-screen direction buttons: each command read from
//! stdin is applied to the session, then the grid and status line are
//! printed. Commands: `up`/`down`/`left`/`right` (or `w`/`a`/`s`/`d`),
//! `restart`, `quit`.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use tui_2048::core::{GameConfig, GameState, MoveOutcome};
use tui_2048::types::{GameAction, MergeRule};
use tui_2048::view::GameView;

#[derive(Parser, Debug)]
#[command(name = "tui-2048", about = "Play 2048 from the console")]
struct Args {
    /// Fixed RNG seed (default: derived from the clock).
    #[arg(long)]
    seed: Option<u32>,
    /// Merge rule: "cascade" (a merged tile may merge again with the next
    /// equal tile) or "single".
    #[arg(long, default_value = "cascade", value_parser = parse_merge_rule)]
    merge_rule: MergeRule,
}

fn parse_merge_rule(s: &str) -> Result<MergeRule, String> {
    MergeRule::from_str(s).ok_or_else(|| format!("unknown merge rule '{}'", s))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = GameConfig {
        seed: args.seed,
        merge_rule: args.merge_rule,
    };
    let mut game = GameState::new(config);
    game.start();
    info!("seed={} merge_rule={}", game.seed(), game.merge_rule().as_str());

    let view = GameView::default();
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    draw(&mut out, &view, &game, "")?;

    for line in stdin.lock().lines() {
        let line = line?;
        for token in line.split_whitespace() {
            if should_quit(token) {
                return Ok(());
            }

            match GameAction::from_str(token) {
                Some(action) => {
                    let outcome = game.apply_action(action);
                    draw(&mut out, &view, &game, status_line(&outcome))?;
                }
                None => {
                    warn!("ignored command {:?}", token);
                    writeln!(out, "unknown command: {}", token)?;
                    out.flush()?;
                }
            }
        }
    }

    Ok(())
}

fn should_quit(token: &str) -> bool {
    matches!(token.to_lowercase().as_str(), "q" | "quit" | "exit")
}

fn status_line(outcome: &MoveOutcome) -> &'static str {
    outcome.message.as_str()
}

fn draw(out: &mut impl Write, view: &GameView, game: &GameState, status: &str) -> Result<()> {
    writeln!(out)?;
    write!(out, "{}", view.render(&game.snapshot()))?;
    if !status.is_empty() {
        writeln!(out, "[{}]", status)?;
    }
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
