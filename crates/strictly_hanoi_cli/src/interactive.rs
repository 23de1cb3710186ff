//! Line-driven manual play.

use crate::render::{render, render_plan};
use crate::terminal::{TerminalAnimator, cancel_on_ctrl_c};
use std::ops::ControlFlow;
use strictly_hanoi::{
    AnimationSpeed, Animator, CancelToken, ConfigurationError, GameState, PegLabel, auto_replay,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument, warn};

const HELP: &str = "\
Commands:
  A C        move the top disk of A onto C (also: AC)
  next       animate and apply the next planned move
  auto       replay the plan (Ctrl-C stops between moves); restacks first
             if the pegs are off the plan
  instant    solve at once; restacks first if the pegs are off the plan
  plan       print the plan
  reset      restack the disks
  disks N    start over with N disks
  speed N    animation speed 1-5
  help       show this help
  quit       leave";

/// One parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Manual move.
    Move(PegLabel, PegLabel),
    /// Next planned move.
    Next,
    /// Automatic replay.
    Auto,
    /// Instant solve.
    Instant,
    /// Print the plan.
    Plan,
    /// Reset the game.
    Reset,
    /// Change the disk count.
    Disks(u8),
    /// Change the animation speed level.
    Speed(u8),
    /// Show help.
    Help,
    /// Leave.
    Quit,
}

/// A line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Empty input")]
    Empty,
    /// Unrecognised command.
    #[display("Unknown command {:?} (try \"help\")", _0)]
    Unknown(String),
    /// A number was expected.
    #[display("Expected a number, got {:?}", _0)]
    BadNumber(String),
    /// A peg label was invalid.
    #[display("{}", _0)]
    Peg(ConfigurationError),
}

impl std::error::Error for InputError {}

impl Input {
    /// Parses one line of input.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Err(InputError::Empty),
            [word] => match word.to_ascii_lowercase().as_str() {
                "next" | "n" => Ok(Input::Next),
                "auto" => Ok(Input::Auto),
                "instant" => Ok(Input::Instant),
                "plan" => Ok(Input::Plan),
                "reset" => Ok(Input::Reset),
                "help" | "?" => Ok(Input::Help),
                "quit" | "exit" | "q" => Ok(Input::Quit),
                pair if pair.len() == 2 && pair.is_ascii() => {
                    let (from, to) = pair.split_at(1);
                    Ok(Input::Move(
                        PegLabel::parse(from).map_err(InputError::Peg)?,
                        PegLabel::parse(to).map_err(InputError::Peg)?,
                    ))
                }
                _ => Err(InputError::Unknown(line.trim().to_string())),
            },
            [command, value] if command.eq_ignore_ascii_case("disks") => value
                .parse()
                .map(Input::Disks)
                .map_err(|_| InputError::BadNumber(value.to_string())),
            [command, value] if command.eq_ignore_ascii_case("speed") => value
                .parse()
                .map(Input::Speed)
                .map_err(|_| InputError::BadNumber(value.to_string())),
            [from, to] => Ok(Input::Move(
                PegLabel::parse(from).map_err(InputError::Peg)?,
                PegLabel::parse(to).map_err(InputError::Peg)?,
            )),
            _ => Err(InputError::Unknown(line.trim().to_string())),
        }
    }
}

/// A manual-play session: one game and one animator.
#[derive(Debug)]
pub struct Session {
    game: GameState,
    animator: TerminalAnimator,
}

impl Session {
    /// Creates a session.
    #[instrument(skip(game))]
    pub fn new(game: GameState, animator: TerminalAnimator) -> Self {
        Self { game, animator }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Reads commands from stdin until `quit` or end of input.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> anyhow::Result<()> {
        println!("{}\n\n{}\n", HELP, render(&self.game.snapshot()));

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let input = match Input::parse(&line) {
                Ok(input) => input,
                Err(InputError::Empty) => continue,
                Err(err) => {
                    println!("{}", err);
                    continue;
                }
            };
            if self.handle(input).await.is_break() {
                break;
            }
        }

        info!(steps = self.game.steps_taken(), "Session ended");
        Ok(())
    }

    /// Executes one command and prints the result.
    #[instrument(skip(self))]
    pub async fn handle(&mut self, input: Input) -> ControlFlow<()> {
        match input {
            Input::Move(from, to) => match self.game.apply_move(from, to) {
                Ok(_) => self.show(),
                Err(err) => {
                    warn!(%err, "Manual move rejected");
                    println!("{}", err);
                }
            },
            Input::Next => self.step().await,
            Input::Auto => {
                if !self.prepare_replay() {
                    return ControlFlow::Continue(());
                }
                let cancel = CancelToken::new();
                let listener = cancel_on_ctrl_c(&cancel);
                let result = auto_replay(&mut self.game, &mut self.animator, &cancel).await;
                listener.abort();
                match result {
                    Ok(report) => println!("{:?} after {} moves", report.outcome, report.applied),
                    Err(err) => println!("{}", err),
                }
            }
            Input::Instant => match self.game.instant_solve() {
                Ok(applied) => {
                    println!("Applied {} moves", applied);
                    self.show();
                }
                Err(err) => println!("{}", err),
            },
            Input::Plan => match self.game.plan() {
                Some(plan) => println!("{}", render_plan(plan)),
                None => match self.game.generate_plan() {
                    Ok(plan) => println!("{}", render_plan(&plan)),
                    Err(err) => println!("{}", err),
                },
            },
            Input::Reset => {
                self.game.reset();
                self.show();
            }
            Input::Disks(disks) => match self.game.initialize(disks) {
                Ok(()) => self.show(),
                Err(err) => println!("{}", err),
            },
            Input::Speed(level) => match AnimationSpeed::from_level(level) {
                Some(speed) => {
                    self.animator.set_speed(speed);
                    println!("Speed: {}", speed);
                }
                None => println!("Speed must be 1-5 (still {})", self.animator.speed()),
            },
            Input::Help => println!("{}", HELP),
            Input::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Makes sure there is a plan the pegs can follow, restacking the disks
    /// if they have left it.
    fn prepare_replay(&mut self) -> bool {
        if self.game.plan().is_none()
            && let Err(err) = self.game.generate_plan()
        {
            println!("{}", err);
            return false;
        }
        if self.game.is_plan_diverged() && !self.game.is_completed() {
            info!(steps = self.game.steps_taken(), "Restacking before replay");
            println!("Pegs are off the plan, restacking.");
            self.game.reset();
            if let Err(err) = self.game.generate_plan() {
                println!("{}", err);
                return false;
            }
        }
        true
    }

    async fn step(&mut self) {
        if self.game.plan().is_none()
            && let Err(err) = self.game.generate_plan()
        {
            println!("{}", err);
            return;
        }
        if self.game.is_completed() {
            println!("Already solved.");
            return;
        }
        if self.game.is_plan_diverged() {
            println!("Pegs are off the plan; `reset` to follow it again.");
            return;
        }
        let Some(next) = self.game.next_planned_move() else {
            println!("No planned moves left.");
            return;
        };

        self.animator.animate(&next).await;
        match self.game.apply_move(next.from(), next.to()) {
            Ok(applied) => self.animator.on_applied(&applied, &self.game),
            Err(err) => println!("{}", err),
        }
    }

    fn show(&self) {
        println!("{}", render(&self.game.snapshot()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!(Input::parse("a c"), Ok(Input::Move(PegLabel::A, PegLabel::C)));
        assert_eq!(Input::parse("BA"), Ok(Input::Move(PegLabel::B, PegLabel::A)));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse(" next "), Ok(Input::Next));
        assert_eq!(Input::parse("disks 7"), Ok(Input::Disks(7)));
        assert_eq!(Input::parse("Speed 2"), Ok(Input::Speed(2)));
        assert_eq!(Input::parse("quit"), Ok(Input::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Input::parse("   "), Err(InputError::Empty));
        assert!(matches!(Input::parse("a d"), Err(InputError::Peg(_))));
        assert!(matches!(Input::parse("disks many"), Err(InputError::BadNumber(_))));
        assert!(matches!(Input::parse("jump"), Err(InputError::Unknown(_))));
    }

    #[tokio::test]
    async fn test_handle_manual_and_instant() {
        let game = GameState::new(3).unwrap();
        let animator = TerminalAnimator::new(AnimationSpeed::VeryFast, std::time::Duration::ZERO);
        let mut session = Session::new(game, animator);

        assert!(session.handle(Input::Move(PegLabel::A, PegLabel::C)).await.is_continue());
        assert_eq!(session.game().steps_taken(), 1);

        session.handle(Input::Reset).await;
        session.handle(Input::Instant).await;
        assert!(session.game().is_completed());

        assert!(session.handle(Input::Quit).await.is_break());
    }

    #[tokio::test]
    async fn test_instant_and_auto_after_manual_move() {
        let animator = TerminalAnimator::new(AnimationSpeed::VeryFast, std::time::Duration::ZERO);
        let mut session = Session::new(GameState::new(3).unwrap(), animator);

        session.handle(Input::Move(PegLabel::A, PegLabel::C)).await;
        session.handle(Input::Instant).await;
        assert!(session.game().is_completed());
        assert_eq!(session.game().steps_taken(), 7);

        session.handle(Input::Reset).await;
        session.handle(Input::Plan).await;
        session.handle(Input::Move(PegLabel::A, PegLabel::B)).await;
        assert!(session.game().is_plan_diverged());
        session.handle(Input::Auto).await;
        assert!(session.game().is_completed());
        assert_eq!(session.game().steps_taken(), 7);
    }

    #[tokio::test]
    async fn test_next_refuses_diverged_plan() {
        let animator = TerminalAnimator::new(AnimationSpeed::VeryFast, std::time::Duration::ZERO);
        let mut session = Session::new(GameState::new(3).unwrap(), animator);

        session.handle(Input::Plan).await;
        session.handle(Input::Move(PegLabel::A, PegLabel::B)).await;
        session.handle(Input::Next).await;
        assert_eq!(session.game().steps_taken(), 1);
        assert_eq!(session.game().cursor(), 0);
    }

    #[tokio::test]
    async fn test_handle_rejects_bad_disk_count() {
        let game = GameState::new(3).unwrap();
        let animator = TerminalAnimator::new(AnimationSpeed::VeryFast, std::time::Duration::ZERO);
        let mut session = Session::new(game, animator);

        session.handle(Input::Disks(0)).await;
        assert_eq!(session.game().disks(), 3);

        session.handle(Input::Disks(4)).await;
        assert_eq!(session.game().disks(), 4);
    }
}
