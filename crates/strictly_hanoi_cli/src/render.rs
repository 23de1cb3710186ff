//! Plain-text rendering of the game.

use strictly_hanoi::{GameSnapshot, Plan};

/// Renders pegs bottom-to-top followed by a status line.
///
/// ```text
/// A | 3 2 1
/// B |
/// C |
/// Steps: 0 / 7 (Idle)
/// ```
pub fn render(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();
    for peg in &snapshot.pegs {
        out.push_str(&format!("{} |", peg.label));
        for disk in &peg.disks {
            out.push_str(&format!(" {}", disk));
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "Steps: {} / {} ({})",
        snapshot.steps_taken, snapshot.min_steps, snapshot.play_state
    ));
    if snapshot.completed {
        out.push_str(" - solved!");
    }
    out
}

/// Renders a plan one numbered move per line.
pub fn render_plan(plan: &Plan) -> String {
    let width = plan.len().to_string().len();
    plan.iter()
        .enumerate()
        .map(|(i, mv)| format!("{:>width$}. {}", i + 1, mv.description(), width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
