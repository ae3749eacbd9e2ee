//! Pointer-driven rotation controller.
//!
//! Turns start/move/end pointer events into a per-frame rotation: drag deltas
//! set the velocity, velocity coasts into the target and decays, the current
//! angle eases toward the target, and an idle globe auto-rotates once the
//! post-drag cooldown has elapsed.

use crate::config::{ControllerConfig, ReleaseBehavior};
use crate::state::{ContactId, CooldownToken, Mode, Position, RotationState, YawPitch};
use std::time::Instant;
use tracing::{debug, trace};

pub struct RotationController {
    config: ControllerConfig,
    state: RotationState,
    /// Generation handed to the next cooldown token
    next_generation: u64,
}

impl RotationController {
    pub fn new(config: ControllerConfig, reduced_motion: bool) -> Self {
        let state = RotationState::new(config.auto_rotate && !reduced_motion, reduced_motion);
        RotationController {
            config,
            state,
            next_generation: 0,
        }
    }

    /// A contact went down. Ignored while another contact is held.
    pub fn on_interaction_start(&mut self, contact: ContactId, position: Position) {
        match self.state.mode {
            Mode::Dragging { contact: held } => {
                trace!(?contact, ?held, "ignoring second contact");
                return;
            }
            Mode::Settling(token) => {
                debug!(generation = token.generation, "cooldown cancelled by new drag");
            }
            Mode::Idle => {}
        }

        self.state.mode = Mode::Dragging { contact };
        self.state.pointer_anchor = Some(position);
        debug!(?contact, x = position.x, y = position.y, "drag started");
    }

    /// The tracked contact moved to `position`.
    pub fn on_interaction_move(&mut self, contact: ContactId, position: Position) {
        if !self.is_tracking(contact) {
            trace!(?contact, "ignoring move from untracked contact");
            return;
        }
        let anchor = self.state.pointer_anchor.unwrap_or(position);
        self.state.pointer_anchor = Some(position);

        let mut delta = YawPitch::new(position.x - anchor.x, position.y - anchor.y);
        if self.config.pitch_bounds.is_none() {
            delta.pitch = 0.0;
        }

        self.state.velocity = delta.scale(self.config.sensitivity);
        self.state.target += self.state.velocity;
        self.clamp_axes();
    }

    /// The tracked contact was released (or left the surface).
    pub fn on_interaction_end(&mut self, contact: ContactId) {
        self.on_interaction_end_at(contact, Instant::now());
    }

    /// Releases the tracked contact and schedules the cooldown from `now`.
    pub fn on_interaction_end_at(&mut self, contact: ContactId, now: Instant) {
        if !self.is_tracking(contact) {
            trace!(?contact, "ignoring release from untracked contact");
            return;
        }

        if self.config.release == ReleaseBehavior::Stop {
            self.state.velocity = YawPitch::ZERO;
        }

        let token = CooldownToken {
            generation: self.next_generation,
            deadline: now + self.config.cooldown,
        };
        self.next_generation += 1;
        self.state.mode = Mode::Settling(token);
        self.state.pointer_anchor = None;
        debug!(
            ?contact,
            generation = token.generation,
            cooldown_ms = self.config.cooldown.as_millis() as u64,
            "drag ended, settling"
        );
    }

    /// The platform reduced-motion preference changed.
    pub fn on_motion_preference_changed(&mut self, reduced: bool) {
        if reduced == self.state.reduced_motion {
            return;
        }
        self.state.reduced_motion = reduced;
        if reduced {
            let factor = self.config.reduced_velocity.factor();
            self.state.velocity = self.state.velocity * factor;
            self.state.auto_rotate_enabled = false;
        } else {
            self.state.auto_rotate_enabled = self.config.auto_rotate;
        }
        debug!(reduced, auto_rotate = self.state.auto_rotate_enabled, "motion preference changed");
    }

    /// Steps one frame and returns the angles to draw.
    pub fn advance(&mut self) -> YawPitch {
        self.advance_at(Instant::now())
    }

    /// Steps one frame at time `now`.
    pub fn advance_at(&mut self, now: Instant) -> YawPitch {
        if let Mode::Settling(token) = self.state.mode {
            if token.is_due(now) {
                self.state.mode = Mode::Idle;
                debug!(generation = token.generation, "cooldown elapsed, idle");
            }
        }

        let profile = *self.config.profile(self.state.reduced_motion);

        if self.state.mode == Mode::Idle && self.state.auto_rotate_enabled {
            self.state.target.yaw += profile.auto_speed;
        }

        let gap = self.state.target - self.state.current;
        self.state.current += gap * profile.damping;

        self.state.velocity = self.state.velocity.scale(profile.inertia);
        self.state.target += self.state.velocity;

        self.clamp_axes();
        self.state.current
    }

    fn is_tracking(&self, contact: ContactId) -> bool {
        self.state.mode == Mode::Dragging { contact }
    }

    fn clamp_axes(&mut self) {
        let state = &mut self.state;
        match self.config.pitch_bounds {
            Some(bounds) => {
                state.target.pitch = bounds.clamp(state.target.pitch);
                state.current.pitch = bounds.clamp(state.current.pitch);
            }
            None => {
                state.target.pitch = 0.0;
                state.current.pitch = 0.0;
            }
        }
        if let Some(bounds) = self.config.yaw_bounds {
            state.target.yaw = bounds.clamp(state.target.yaw);
            state.current.yaw = bounds.clamp(state.current.yaw);
        }
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
