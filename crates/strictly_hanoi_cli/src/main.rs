//! Strictly Hanoi - terminal front-end.

use anyhow::Result;
use clap::Parser;
use strictly_hanoi::{CancelToken, GameState, PegAssignment, auto_replay, solve_for};
use strictly_hanoi_cli::{
    Cli, Command, Session, Settings, TerminalAnimator, cancel_on_ctrl_c, render, render_plan,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Solve { disks, json } => run_solve(settings.with_overrides(disks, None)?, json),
        Command::Play { disks, speed } => run_play(settings.with_overrides(disks, speed)?).await,
        Command::Instant { disks } => run_instant(settings.with_overrides(disks, None)?),
        Command::Interactive { disks, speed } => {
            run_interactive(settings.with_overrides(disks, speed)?).await
        }
    }
}

/// Print the plan
#[instrument(skip(settings))]
fn run_solve(settings: Settings, json: bool) -> Result<()> {
    let plan = solve_for(*settings.disks(), PegAssignment::CANONICAL)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("{}", render_plan(&plan));
    }
    Ok(())
}

/// Replay the plan with animation
#[instrument(skip(settings))]
async fn run_play(settings: Settings) -> Result<()> {
    let mut game = GameState::new(*settings.disks())?;
    let mut animator = TerminalAnimator::new(settings.animation_speed()?, settings.pause());
    println!("{}\n", render(&game.snapshot()));

    let cancel = CancelToken::new();
    let listener = cancel_on_ctrl_c(&cancel);
    let report = auto_replay(&mut game, &mut animator, &cancel).await?;
    listener.abort();

    info!(?report, "Replay finished");
    println!(
        "{:?}: {} moves (minimum {})",
        report.outcome,
        game.steps_taken(),
        game.min_steps()
    );
    Ok(())
}

/// Solve instantly
#[instrument(skip(settings))]
fn run_instant(settings: Settings) -> Result<()> {
    let mut game = GameState::new(*settings.disks())?;
    let applied = game.instant_solve()?;
    println!("{}", render(&game.snapshot()));
    println!("Solved in {} moves", applied);
    Ok(())
}

/// Play by hand
#[instrument(skip(settings))]
async fn run_interactive(settings: Settings) -> Result<()> {
    let game = GameState::new(*settings.disks())?;
    let animator = TerminalAnimator::new(settings.animation_speed()?, settings.pause());
    Session::new(game, animator).run().await
}
