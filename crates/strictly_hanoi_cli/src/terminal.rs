//! Timed animation in the terminal.

use crate::render::render;
use async_trait::async_trait;
use std::time::Duration;
use strictly_hanoi::{AnimationSpeed, Animator, CancelToken, GameState, Move};
use tracing::{debug, instrument};

/// Prints each move, waits for the animation time, then prints the pegs.
#[derive(Debug, Clone)]
pub struct TerminalAnimator {
    speed: AnimationSpeed,
    pause: Duration,
}

impl TerminalAnimator {
    /// Creates an animator for the given speed and pause between moves.
    #[instrument]
    pub fn new(speed: AnimationSpeed, pause: Duration) -> Self {
        Self { speed, pause }
    }

    /// Changes the animation speed.
    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.speed = speed;
    }

    /// Current animation speed.
    pub fn speed(&self) -> AnimationSpeed {
        self.speed
    }
}

#[async_trait]
impl Animator for TerminalAnimator {
    async fn animate(&mut self, mv: &Move) {
        tokio::time::sleep(self.pause).await;
        match mv.step() {
            Some(step) => println!("{} (line {})", mv.description(), step.line()),
            None => println!("{}", mv.description()),
        }
        tokio::time::sleep(self.speed.duration()).await;
    }

    fn on_applied(&mut self, _mv: &Move, game: &GameState) {
        println!("{}\n", render(&game.snapshot()));
    }
}

/// Cancels `token` when Ctrl-C is pressed.
pub fn cancel_on_ctrl_c(token: &CancelToken) -> tokio::task::JoinHandle<()> {
    let token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Ctrl-C received");
            token.cancel();
        }
    })
}
