//! Command-line interface for strictly_hanoi.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Hanoi - Tower of Hanoi in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_hanoi")]
#[command(about = "Animated Tower of Hanoi solver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal plan
    Solve {
        /// Number of disks
        #[arg(short, long)]
        disks: Option<u8>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay the plan with animation (Ctrl-C stops between moves)
    Play {
        /// Number of disks
        #[arg(short, long)]
        disks: Option<u8>,

        /// Animation speed, 1 (slow) to 5 (fast)
        #[arg(short, long)]
        speed: Option<u8>,
    },

    /// Solve instantly and print the result
    Instant {
        /// Number of disks
        #[arg(short, long)]
        disks: Option<u8>,
    },

    /// Play by hand, one command per line
    Interactive {
        /// Number of disks
        #[arg(short, long)]
        disks: Option<u8>,

        /// Animation speed, 1 (slow) to 5 (fast)
        #[arg(short, long)]
        speed: Option<u8>,
    },
}
