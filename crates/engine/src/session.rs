//! Session: drives a [`BoardModel`] from timer fires and player actions and keeps
//! a [`Renderer`] in sync.
//!
//! After a piece moves or rotates only its old and new cells are repainted.
//! After a lock the whole board is redrawn, since melted rows shift everything
//! above them.
//!
//! With auto-play on, every new piece is steered to the column and rotation the
//! [`solver`](melt_tetris_core::solver) picks as soon as it spawns; gravity then
//! drops it into place.

use std::time::Instant;

use log::{debug, info};

use melt_tetris_core::{solve, BoardModel, KindRandomizer, Renderer, TickOutcome};

use crate::timer::TickTimer;
use crate::types::{GameAction, ACTIVE_COLOR};

pub struct Session<R, K> {
    model: BoardModel<K>,
    renderer: R,
    timer: TickTimer,
    stopped: bool,
    auto: bool,
}

impl<R: Renderer, K: KindRandomizer> Session<R, K> {
    pub fn new(model: BoardModel<K>, renderer: R, timer: TickTimer) -> Self {
        Self {
            model,
            renderer,
            timer,
            stopped: false,
            auto: false,
        }
    }

    /// Paint the grid and the first piece.
    pub fn start(&mut self) {
        self.redraw();
        self.auto_place();
    }

    /// Fire the timer if due. Returns the tick result when a tick ran.
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.stopped {
            return None;
        }
        if !self.timer.poll(now) {
            return None;
        }
        Some(self.on_timer())
    }

    /// One gravity step, skipped while paused, stopped or after game over.
    pub fn on_timer(&mut self) -> TickOutcome {
        if !self.is_playable() {
            return TickOutcome::Idle;
        }
        let outcome = self.model.tick();
        if let TickOutcome::Locked { cleared, .. } = &outcome {
            debug!("tick locked, {} rows melted", cleared.len());
        }
        match &outcome {
            TickOutcome::Moved => self.draw_update(),
            TickOutcome::Locked { .. } => {
                self.redraw();
                self.auto_place();
            }
            TickOutcome::Idle => {}
        }
        outcome
    }

    /// Apply a player action now. Returns whether anything changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        self.apply_at(action, Instant::now())
    }

    /// Apply a player action at `now` (resuming restarts the timer from `now`).
    pub fn apply_at(&mut self, action: GameAction, now: Instant) -> bool {
        match action {
            GameAction::Pause => {
                if self.stopped {
                    return false;
                }
                let paused = self.timer.toggle_pause(now);
                info!("{}", if paused { "paused" } else { "resumed" });
                true
            }
            GameAction::SpeedUp => self.set_speed(self.timer.speed().saturating_add(1)),
            GameAction::SpeedDown => self.set_speed(self.timer.speed().saturating_sub(1)),
            GameAction::Stop => {
                if self.stopped {
                    return false;
                }
                self.stopped = true;
                self.timer.pause();
                info!("stopped");
                true
            }
            GameAction::ToggleAuto => {
                if self.stopped {
                    return false;
                }
                self.set_auto(!self.auto);
                self.auto_place();
                true
            }
            GameAction::HardDrop => {
                if !self.is_playable() || self.model.hard_drop() == 0 {
                    return false;
                }
                self.draw_update();
                true
            }
            GameAction::Rotate => {
                if !self.is_playable() || !self.model.rotate() {
                    return false;
                }
                self.draw_update();
                true
            }
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::MoveDown => {
                let Some(direction) = action.direction() else {
                    return false;
                };
                if !self.is_playable() || !self.model.move_piece(direction) {
                    return false;
                }
                self.draw_update();
                true
            }
        }
    }

    pub fn set_auto(&mut self, auto: bool) {
        if auto != self.auto {
            info!("auto-play {}", if auto { "on" } else { "off" });
        }
        self.auto = auto;
    }

    pub fn is_auto(&self) -> bool {
        self.auto
    }

    /// Steer the active piece to the solver's pick. Only acts with auto-play
    /// on and the game playable.
    fn auto_place(&mut self) -> bool {
        if !self.auto || !self.is_playable() {
            return false;
        }
        let kind = self.model.active().kind;
        let Some(solution) = solve(self.model.board(), kind) else {
            return false;
        };
        let target = solution.placement;
        if !self.model.steer(target.x, target.rotation) {
            return false;
        }
        debug!(
            "auto {} to x {} rotation {} (score {:.2})",
            kind.as_str(),
            target.x,
            target.rotation,
            solution.score
        );
        self.draw_update();
        true
    }

    fn set_speed(&mut self, speed: u32) -> bool {
        let before = self.timer.speed();
        let after = self.timer.set_speed(speed);
        if after != before {
            info!("speed {} -> {}", before, after);
        }
        after != before
    }

    /// Erase the piece at its previous placement and draw it at the current one.
    fn draw_update(&mut self) {
        let prev = self.model.previous();
        self.renderer.draw_shape(
            prev.x,
            prev.y,
            self.model.previous_shape(),
            ACTIVE_COLOR,
            true,
        );
        self.draw_active();
    }

    fn draw_active(&mut self) {
        let active = self.model.active();
        self.renderer.draw_shape(
            active.placement.x,
            active.placement.y,
            active.shape(),
            ACTIVE_COLOR,
            false,
        );
    }

    /// Full repaint: grid, locked cells, and the active piece unless the game is over.
    pub fn redraw(&mut self) {
        self.renderer.redraw_all(self.model.board());
        if !self.model.is_game_over() {
            self.draw_active();
        }
    }

    pub fn is_playable(&self) -> bool {
        !self.stopped && !self.timer.is_paused() && !self.model.is_game_over()
    }

    pub fn is_paused(&self) -> bool {
        self.timer.is_paused()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn model(&self) -> &BoardModel<K> {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut BoardModel<K> {
        &mut self.model
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }
}
