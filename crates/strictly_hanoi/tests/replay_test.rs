//! Tests for cooperative auto-replay.

use async_trait::async_trait;
use strictly_hanoi::{
    Animator, CancelToken, GameState, HanoiError, Move, MoveError, PegLabel, PlayState,
    ReplayOutcome, auto_replay,
};

/// Records every move it is asked to animate and can cancel after a count.
#[derive(Default)]
struct RecordingAnimator {
    animated: Vec<Move>,
    applied_steps: Vec<u64>,
    cancel_after: Option<(usize, CancelToken)>,
}

#[async_trait]
impl Animator for RecordingAnimator {
    async fn animate(&mut self, mv: &Move) {
        self.animated.push(*mv);
        tokio::task::yield_now().await;
    }

    fn on_applied(&mut self, _mv: &Move, game: &GameState) {
        self.applied_steps.push(game.steps_taken());
        if let Some((limit, token)) = &self.cancel_after
            && self.applied_steps.len() >= *limit
        {
            token.cancel();
        }
    }
}

#[tokio::test]
async fn test_auto_replay_completes() {
    let mut game = GameState::new(4).unwrap();
    let mut animator = RecordingAnimator::default();
    let cancel = CancelToken::new();

    let report = auto_replay(&mut game, &mut animator, &cancel).await.unwrap();

    assert_eq!(report.outcome, ReplayOutcome::Completed);
    assert_eq!(report.applied, 15);
    assert!(game.is_completed());
    assert_eq!(game.play_state(), PlayState::Completed);
    assert_eq!(animator.animated.len(), 15);
    assert_eq!(animator.applied_steps, (1..=15).collect::<Vec<u64>>());
    assert_eq!(animator.animated.as_slice(), game.plan().unwrap().moves());
}

#[tokio::test]
async fn test_cancel_stops_before_next_move() {
    let mut game = GameState::new(4).unwrap();
    let cancel = CancelToken::new();
    let mut animator = RecordingAnimator {
        cancel_after: Some((3, cancel.clone())),
        ..Default::default()
    };

    let report = auto_replay(&mut game, &mut animator, &cancel).await.unwrap();

    assert_eq!(report.outcome, ReplayOutcome::Cancelled);
    assert_eq!(report.applied, 3);
    assert_eq!(animator.animated.len(), 3);
    assert_eq!(game.steps_taken(), 3);
    assert_eq!(game.pending_move(), None);
    assert_eq!(game.play_state(), PlayState::PlanReady);

    // Resuming picks up where the replay stopped.
    cancel.reset();
    let mut animator = RecordingAnimator::default();
    let report = auto_replay(&mut game, &mut animator, &cancel).await.unwrap();
    assert_eq!(report.outcome, ReplayOutcome::Completed);
    assert_eq!(report.applied, 12);
    assert_eq!(game.steps_taken(), 15);
}

#[tokio::test]
async fn test_cancelled_token_applies_nothing() {
    let mut game = GameState::new(3).unwrap();
    let cancel = CancelToken::new();
    cancel.cancel();

    let mut animator = RecordingAnimator::default();
    let report = auto_replay(&mut game, &mut animator, &cancel).await.unwrap();

    assert_eq!(report.outcome, ReplayOutcome::Cancelled);
    assert_eq!(report.applied, 0);
    assert!(animator.animated.is_empty());
    assert_eq!(game.steps_taken(), 0);
}

#[tokio::test]
async fn test_pending_move_is_applied_first() {
    let mut game = GameState::new(2).unwrap();
    game.generate_plan().unwrap();
    let pending = game.next_planned_move().unwrap();

    let mut animator = RecordingAnimator::default();
    let report = auto_replay(&mut game, &mut animator, &CancelToken::new())
        .await
        .unwrap();

    assert_eq!(report.applied, 3);
    assert_eq!(animator.animated[0], pending);
    assert!(game.is_completed());
}

#[tokio::test]
async fn test_diverged_plan_surfaces_rejection() {
    let mut game = GameState::new(3).unwrap();
    game.generate_plan().unwrap();
    game.apply_move(PegLabel::A, PegLabel::B).unwrap();

    let mut animator = RecordingAnimator::default();
    let result = auto_replay(&mut game, &mut animator, &CancelToken::new()).await;

    assert!(matches!(
        result,
        Err(HanoiError::Move(MoveError::LargerOnSmaller { .. }))
    ));
    assert_eq!(game.play_state(), PlayState::PlanReady);
    assert_eq!(game.steps_taken(), 2);
}

#[tokio::test]
async fn test_exhausted_plan_without_completion() {
    let mut game = GameState::new(1).unwrap();
    game.generate_plan().unwrap();
    // Disk 1 goes to B by hand; the single planned move A -> C is then
    // rejected and consumed, leaving nothing to replay.
    game.apply_move(PegLabel::A, PegLabel::B).unwrap();
    let stale = game.next_planned_move().unwrap();
    assert!(game.apply_move(stale.from(), stale.to()).is_err());

    let mut animator = RecordingAnimator::default();
    let report = auto_replay(&mut game, &mut animator, &CancelToken::new())
        .await
        .unwrap();

    assert_eq!(report.outcome, ReplayOutcome::Exhausted);
    assert_eq!(report.applied, 0);
    assert_eq!(game.play_state(), PlayState::PlanReady);
}
