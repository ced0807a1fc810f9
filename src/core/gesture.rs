use std::time::Duration;

/// Committed swipe direction: left rejects, right likes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Sign of the horizontal axis for this direction
    pub fn sign(&self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// Gesture tunables.
///
/// Defaults match the shipped discovery screen: commit at 25% of the
/// container width, 0.05 degrees of rotation per pixel clamped to ±15°,
/// opacity ramping to 0.8 across 40% of the width, and a 250 ms exit.
#[derive(Debug, Clone, Copy)]
pub struct GestureConfig {
    /// Fraction of the container width a drag must cross to commit
    pub commit_fraction: f32,
    /// Degrees of card rotation per pixel of horizontal drag
    pub rotation_per_px: f32,
    /// Rotation clamp, in degrees
    pub max_rotation_deg: f32,
    /// Fraction of the width over which the opacity ramp completes
    pub fade_fraction: f32,
    /// Opacity floor while dragging
    pub min_opacity: f32,
    /// Card scale while a drag is active
    pub pressed_scale: f32,
    /// Duration of the commit exit animation
    pub exit_duration_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            commit_fraction: 0.25,
            rotation_per_px: 0.05,
            max_rotation_deg: 15.0,
            fade_fraction: 0.4,
            min_opacity: 0.8,
            pressed_scale: 0.95,
            exit_duration_ms: 250,
        }
    }
}

/// Visual transform for the active card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotation_deg: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl Transform {
    pub const NEUTRAL: Transform = Transform {
        translate_x: 0.0,
        translate_y: 0.0,
        rotation_deg: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };
}

/// Gesture lifecycle. One sequence at a time: input is rejected until the
/// commit or spring-back animation has been completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
    Committing(SwipeDirection),
    Resetting,
}

/// Classification of a released drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The drag crossed the threshold; the card exits in this direction
    Commit(SwipeDirection),
    /// Below threshold; the card springs back to center
    Cancel,
}

/// Maps a continuous pointer drag to transform values and classifies the
/// gesture on release.
///
/// The driver is independent of any rendering framework: the embedding UI
/// feeds it drag deltas, renders the returned transforms, runs its own
/// exit or spring animation, and calls [`GestureDriver::complete_animation`]
/// when that animation finishes.
#[derive(Debug, Clone)]
pub struct GestureDriver {
    config: GestureConfig,
    container_width: f32,
    phase: GesturePhase,
    offset_x: f32,
    offset_y: f32,
}

impl GestureDriver {
    pub fn new(config: GestureConfig, container_width: f32) -> Self {
        Self {
            config,
            container_width,
            phase: GesturePhase::Idle,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// True while a commit exit or spring-back is in flight
    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            GesturePhase::Committing(_) | GesturePhase::Resetting
        )
    }

    /// Horizontal displacement a drag must exceed to commit
    pub fn commit_threshold(&self) -> f32 {
        self.config.commit_fraction * self.container_width
    }

    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.config.exit_duration_ms)
    }

    /// Accept a new drag. Rejected while any animation is in flight.
    pub fn begin(&mut self) -> bool {
        if self.phase != GesturePhase::Idle {
            return false;
        }
        self.phase = GesturePhase::Dragging;
        true
    }

    /// Per-frame drag update; returns the transform to render
    pub fn drag_to(&mut self, dx: f32, dy: f32) -> Option<Transform> {
        if self.phase != GesturePhase::Dragging {
            return None;
        }
        self.offset_x = dx;
        self.offset_y = dy;
        Some(self.transform())
    }

    /// Current transform target for the active card
    pub fn transform(&self) -> Transform {
        match self.phase {
            GesturePhase::Idle | GesturePhase::Resetting => Transform::NEUTRAL,
            GesturePhase::Dragging => {
                let rotation = (self.offset_x * self.config.rotation_per_px)
                    .clamp(-self.config.max_rotation_deg, self.config.max_rotation_deg);

                let fade_distance = self.config.fade_fraction * self.container_width;
                let progress = (self.offset_x.abs() / fade_distance).clamp(0.0, 1.0);
                let opacity = 1.0 - progress * (1.0 - self.config.min_opacity);

                Transform {
                    translate_x: self.offset_x,
                    translate_y: self.offset_y,
                    rotation_deg: rotation,
                    opacity,
                    scale: self.config.pressed_scale,
                }
            }
            GesturePhase::Committing(direction) => Transform {
                // Exit target: fully off-screen, faded out
                translate_x: direction.sign() * self.container_width,
                translate_y: self.offset_y,
                rotation_deg: direction.sign() * self.config.max_rotation_deg,
                opacity: 0.0,
                scale: self.config.pressed_scale,
            },
        }
    }

    /// Classify the drag on pointer release.
    ///
    /// Crossing the threshold enters the commit exit in the direction of the
    /// drag; anything less springs back without firing a commit.
    pub fn release(&mut self) -> ReleaseOutcome {
        if self.phase != GesturePhase::Dragging {
            return ReleaseOutcome::Cancel;
        }

        if self.offset_x.abs() > self.commit_threshold() {
            let direction = if self.offset_x > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            };
            self.phase = GesturePhase::Committing(direction);
            ReleaseOutcome::Commit(direction)
        } else {
            self.phase = GesturePhase::Resetting;
            ReleaseOutcome::Cancel
        }
    }

    /// Button-triggered like/reject. Enters the identical commit path as a
    /// threshold-crossing drag.
    pub fn press(&mut self, direction: SwipeDirection) -> bool {
        if self.phase != GesturePhase::Idle {
            return false;
        }
        self.offset_x = direction.sign() * self.container_width;
        self.offset_y = 0.0;
        self.phase = GesturePhase::Committing(direction);
        true
    }

    /// Finish the in-flight animation.
    ///
    /// From `Committing` this yields the direction to apply; from
    /// `Resetting` it yields nothing. Either way the driver returns to
    /// `Idle` with neutral values, ready for the next card.
    pub fn complete_animation(&mut self) -> Option<SwipeDirection> {
        match self.phase {
            GesturePhase::Committing(direction) => {
                self.reset();
                Some(direction)
            }
            GesturePhase::Resetting => {
                self.reset();
                None
            }
            GesturePhase::Idle | GesturePhase::Dragging => None,
        }
    }

    /// Discard any gesture state (the card under the pointer is gone,
    /// e.g. the filtered list changed identity)
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }
}
