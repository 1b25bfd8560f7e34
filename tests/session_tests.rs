//! Session tests - timer driven ticks, player actions and renderer calls

use std::time::{Duration, Instant};

use melt_tetris::core::{BoardModel, GridSize, Renderer, SequenceRandomizer, TickOutcome};
use melt_tetris::engine::{Session, TickTimer};
use melt_tetris::types::{GameAction, PieceKind, Rgb, ACTIVE_COLOR, LOCKED_COLOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Grid,
    Clear,
    Fill { x: i8, y: i8, color: Rgb, clear: bool },
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Recorder {
    fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl Renderer for Recorder {
    fn draw_grid(&mut self) {
        self.calls.push(Call::Grid);
    }

    fn fill_cell(&mut self, x: i8, y: i8, color: Rgb, clear: bool) {
        self.calls.push(Call::Fill { x, y, color, clear });
    }

    fn clear_surface(&mut self) {
        self.calls.push(Call::Clear);
    }
}

fn fill(x: i8, y: i8, color: Rgb, clear: bool) -> Call {
    Call::Fill { x, y, color, clear }
}

/// Session whose active piece is an O at (3, 0), speed 10 (100ms interval).
fn o_session(t0: Instant) -> Session<Recorder, SequenceRandomizer> {
    let mut model = BoardModel::new(
        GridSize::default(),
        SequenceRandomizer::new(vec![PieceKind::O]),
    );
    model.spawn_next();
    Session::new(model, Recorder::default(), TickTimer::new(10, t0))
}

#[test]
fn test_start_draws_grid_and_active_piece() {
    let mut session = o_session(Instant::now());
    session.start();
    let calls = session.renderer_mut().take();
    assert_eq!(calls[0], Call::Clear);
    assert_eq!(calls[1], Call::Grid);
    assert_eq!(
        &calls[2..],
        &[
            fill(3, 0, ACTIVE_COLOR, false),
            fill(4, 0, ACTIVE_COLOR, false),
            fill(3, 1, ACTIVE_COLOR, false),
            fill(4, 1, ACTIVE_COLOR, false),
        ]
    );
}

#[test]
fn test_move_erases_previous_then_draws() {
    let mut session = o_session(Instant::now());
    assert!(session.apply(GameAction::MoveRight));
    let calls = session.renderer_mut().take();
    assert_eq!(
        calls,
        vec![
            fill(3, 0, ACTIVE_COLOR, true),
            fill(4, 0, ACTIVE_COLOR, true),
            fill(3, 1, ACTIVE_COLOR, true),
            fill(4, 1, ACTIVE_COLOR, true),
            fill(4, 0, ACTIVE_COLOR, false),
            fill(5, 0, ACTIVE_COLOR, false),
            fill(4, 1, ACTIVE_COLOR, false),
            fill(5, 1, ACTIVE_COLOR, false),
        ]
    );
}

#[test]
fn test_blocked_move_draws_nothing() {
    let mut session = o_session(Instant::now());
    for _ in 0..3 {
        assert!(session.apply(GameAction::MoveLeft));
    }
    session.renderer_mut().take();
    assert!(!session.apply(GameAction::MoveLeft));
    assert!(session.renderer().calls.is_empty());
}

#[test]
fn test_timer_drives_ticks() {
    let t0 = Instant::now();
    let mut session = o_session(t0);
    assert_eq!(session.poll(t0 + Duration::from_millis(50)), None);
    assert_eq!(
        session.poll(t0 + Duration::from_millis(100)),
        Some(TickOutcome::Moved)
    );
    assert_eq!(session.model().active().placement.y, 1);
    assert_eq!(session.poll(t0 + Duration::from_millis(150)), None);
}

#[test]
fn test_lock_triggers_full_redraw() {
    let mut session = o_session(Instant::now());
    for _ in 0..18 {
        assert_eq!(session.on_timer(), TickOutcome::Moved);
    }
    session.renderer_mut().take();

    let outcome = session.on_timer();
    assert!(matches!(outcome, TickOutcome::Locked { game_over: false, .. }));

    let calls = session.renderer_mut().take();
    assert_eq!(&calls[..2], &[Call::Clear, Call::Grid]);
    let locked: Vec<_> = calls
        .iter()
        .filter(|c| matches!(c, Call::Fill { color, clear: false, .. } if *color == LOCKED_COLOR))
        .collect();
    assert_eq!(locked.len(), 4);
    // New piece drawn on top.
    assert_eq!(calls.last(), Some(&fill(4, 1, ACTIVE_COLOR, false)));
}

#[test]
fn test_pause_blocks_ticks_and_moves() {
    let t0 = Instant::now();
    let mut session = o_session(t0);
    assert!(session.apply(GameAction::Pause));
    assert!(session.is_paused());
    assert!(!session.is_playable());

    assert_eq!(session.poll(t0 + Duration::from_secs(1)), None);
    assert_eq!(session.on_timer(), TickOutcome::Idle);
    assert!(!session.apply(GameAction::MoveLeft));
    assert!(!session.apply(GameAction::Rotate));
    assert!(!session.apply(GameAction::HardDrop));
    assert_eq!(session.model().active().placement.x, 3);
    assert_eq!(session.model().active().placement.y, 0);

    assert!(session.apply(GameAction::Pause));
    assert!(session.is_playable());
    assert!(session.apply(GameAction::MoveLeft));
}

#[test]
fn test_speed_actions_clamp() {
    let mut session = o_session(Instant::now());
    assert!(session.apply(GameAction::SpeedUp));
    assert_eq!(session.timer().speed(), 11);
    assert_eq!(session.timer().interval(), Duration::from_millis(90));
    assert!(session.apply(GameAction::SpeedDown));
    assert!(session.apply(GameAction::SpeedDown));
    assert_eq!(session.timer().speed(), 9);

    for _ in 0..20 {
        session.apply(GameAction::SpeedDown);
    }
    assert_eq!(session.timer().speed(), 1);
    assert!(!session.apply(GameAction::SpeedDown));
}

#[test]
fn test_stop_is_final() {
    let t0 = Instant::now();
    let mut session = o_session(t0);
    assert!(session.apply(GameAction::Stop));
    assert!(session.is_stopped());
    assert!(!session.apply(GameAction::Stop));
    // Pause cannot resume a stopped game.
    assert!(!session.apply(GameAction::Pause));
    assert!(!session.apply(GameAction::MoveDown));
    assert!(!session.apply(GameAction::HardDrop));
    assert!(!session.apply(GameAction::ToggleAuto));
    assert!(!session.is_auto());
    assert_eq!(session.poll(t0 + Duration::from_secs(5)), None);
}

#[test]
fn test_game_over_stops_ticking() {
    let mut session = o_session(Instant::now());
    session.model_mut().board_mut().set_row(2, 0b11000);
    match session.on_timer() {
        TickOutcome::Locked { game_over, .. } => assert!(game_over),
        other => panic!("expected lock, got {:?}", other),
    }
    assert!(!session.is_playable());

    // The final redraw leaves out the active piece.
    let calls = session.renderer_mut().take();
    assert!(calls
        .iter()
        .all(|c| !matches!(c, Call::Fill { color, clear: false, .. } if *color == ACTIVE_COLOR)));

    assert_eq!(session.on_timer(), TickOutcome::Idle);
    assert!(!session.apply(GameAction::MoveRight));
}

#[test]
fn test_session_over_mutable_reference_renderer() {
    let mut recorder = Recorder::default();
    {
        let model = BoardModel::seeded(3);
        let mut session = Session::new(model, &mut recorder, TickTimer::default());
        session.start();
    }
    assert!(recorder.calls.len() > 2);
}

#[test]
fn test_resume_waits_a_full_interval() {
    let t0 = Instant::now();
    let mut session = o_session(t0);
    // Paused 10ms before the first fire was due.
    assert!(session.apply_at(GameAction::Pause, t0 + Duration::from_millis(90)));
    let resumed = t0 + Duration::from_secs(2);
    assert!(session.apply_at(GameAction::Pause, resumed));
    assert!(session.is_playable());

    assert_eq!(session.poll(resumed), None);
    assert_eq!(session.poll(resumed + Duration::from_millis(99)), None);
    assert_eq!(
        session.poll(resumed + Duration::from_millis(100)),
        Some(TickOutcome::Moved)
    );
}

#[test]
fn test_hard_drop_lands_and_locks_on_next_tick() {
    let mut session = o_session(Instant::now());
    assert!(session.apply(GameAction::HardDrop));
    assert_eq!(session.model().active().placement.y, 18);
    assert_eq!(session.model().board().occupied_count(), 0);

    let calls = session.renderer_mut().take();
    assert_eq!(
        calls,
        vec![
            fill(3, 0, ACTIVE_COLOR, true),
            fill(4, 0, ACTIVE_COLOR, true),
            fill(3, 1, ACTIVE_COLOR, true),
            fill(4, 1, ACTIVE_COLOR, true),
            fill(3, 18, ACTIVE_COLOR, false),
            fill(4, 18, ACTIVE_COLOR, false),
            fill(3, 19, ACTIVE_COLOR, false),
            fill(4, 19, ACTIVE_COLOR, false),
        ]
    );

    // Already resting: nothing to drop.
    assert!(!session.apply(GameAction::HardDrop));
    assert!(matches!(
        session.on_timer(),
        TickOutcome::Locked { game_over: false, .. }
    ));
    assert_eq!(session.model().board().occupied_count(), 4);
}

#[test]
fn test_auto_play_steers_each_new_piece() {
    let mut model = BoardModel::new(
        GridSize::default(),
        SequenceRandomizer::new(vec![PieceKind::I]),
    );
    model.spawn_next();
    let mut session = Session::new(model, Recorder::default(), TickTimer::default());
    // Bottom row open only in column 0.
    session
        .model_mut()
        .board_mut()
        .set_row(19, 0b11_1111_1110);
    session.set_auto(true);
    session.start();

    let active = session.model().active();
    assert_eq!(active.placement.x, 0);
    assert_eq!(active.placement.y, 0);
    assert_eq!(active.placement.rotation, 0);

    let cleared = loop {
        match session.on_timer() {
            TickOutcome::Moved => continue,
            TickOutcome::Locked { cleared, .. } => break cleared,
            TickOutcome::Idle => panic!("game ended before the piece locked"),
        }
    };
    assert_eq!(cleared.len(), 1);
    // The next I was steered as soon as it spawned.
    assert_eq!(session.model().active().placement.y, 0);
    assert_eq!(session.model().previous().y, 0);
}

#[test]
fn test_toggle_auto_steers_the_falling_piece() {
    let mut session = o_session(Instant::now());
    session
        .model_mut()
        .board_mut()
        .set_row(19, 0b11_1111_1100);
    assert!(session.apply(GameAction::ToggleAuto));
    assert!(session.is_auto());
    assert_eq!(session.model().active().placement.x, 0);

    let calls = session.renderer_mut().take();
    assert_eq!(calls.first(), Some(&fill(3, 0, ACTIVE_COLOR, true)));
    assert_eq!(calls.last(), Some(&fill(1, 1, ACTIVE_COLOR, false)));

    assert!(session.apply(GameAction::ToggleAuto));
    assert!(!session.is_auto());
    assert!(session.renderer().calls.is_empty());
}
