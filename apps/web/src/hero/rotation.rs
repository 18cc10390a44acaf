//! Typewriter role rotation for the hero section.
//!
//! State machine over `{role_index, visible_len, phase}`:
//! - `Typing`: one character appended per tick (150ms).
//! - `Pausing`: role fully shown; the next tick comes after 3000ms.
//! - `Deleting`: one character removed per tick (80ms). Reaching empty
//!   advances to the next role (wrapping) and returns to `Typing`.
//!
//! `tick` performs one transition and returns the delay until the next one, so
//! the async driver is a plain sleep/tick loop and tests can drive the machine
//! directly or on tokio's paused clock.

use std::time::Duration;

use futures_util::stream::{self, Stream};
use serde::Serialize;

pub const TYPE_DELAY: Duration = Duration::from_millis(150);
pub const DELETE_DELAY: Duration = Duration::from_millis(80);
pub const PAUSE_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

/// What a viewer sees after a tick.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RotationFrame {
    pub text: String,
    pub role_index: usize,
    pub phase: Phase,
}

#[derive(Debug, Clone)]
pub struct RoleRotation {
    roles: Vec<String>,
    role_index: usize,
    /// Counted in chars, not bytes.
    visible_len: usize,
    phase: Phase,
}

impl RoleRotation {
    pub fn new(roles: Vec<String>) -> Self {
        Self {
            roles,
            role_index: 0,
            visible_len: 0,
            phase: Phase::Typing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    fn current_role(&self) -> &str {
        self.roles.get(self.role_index).map_or("", String::as_str)
    }

    fn role_len(&self) -> usize {
        self.current_role().chars().count()
    }

    /// The typed prefix of the current role.
    pub fn display(&self) -> &str {
        let role = self.current_role();
        match role.char_indices().nth(self.visible_len) {
            Some((end, _)) => &role[..end],
            None => role,
        }
    }

    pub fn frame(&self) -> RotationFrame {
        RotationFrame {
            text: self.display().to_string(),
            role_index: self.role_index(),
            phase: self.phase(),
        }
    }

    /// Applies one transition and returns how long to wait before the next.
    pub fn tick(&mut self) -> Duration {
        match self.phase {
            Phase::Typing => {
                let len = self.role_len();
                if self.visible_len < len {
                    self.visible_len += 1;
                }
                if self.visible_len >= len {
                    self.phase = Phase::Pausing;
                    PAUSE_DELAY
                } else {
                    TYPE_DELAY
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                self.delete_one()
            }
            Phase::Deleting => self.delete_one(),
        }
    }

    fn delete_one(&mut self) -> Duration {
        self.visible_len = self.visible_len.saturating_sub(1);
        if self.visible_len > 0 {
            return DELETE_DELAY;
        }
        if !self.roles.is_empty() {
            self.role_index = (self.role_index + 1) % self.roles.len();
        }
        self.phase = Phase::Typing;
        TYPE_DELAY
    }
}

/// Endless frame stream: sleep, tick, emit. Dropping the stream ends the chain.
pub fn role_frames(rotation: RoleRotation) -> impl Stream<Item = RotationFrame> + Send {
    stream::unfold((rotation, TYPE_DELAY), |(mut rotation, delay)| async move {
        tokio::time::sleep(delay).await;
        let next = rotation.tick();
        let frame = rotation.frame();
        Some((frame, (rotation, next)))
    })
}
