//! Golf Ball Flight
//!
//! Screen placement for the flag and the ball. Nothing here feeds back
//! into game state; the caller advances the ball with its own step.
//!
//! The ball starts at its rest position, travels `dest_x` to the right over
//! one unit of flight time, and follows a parabola whose apex sits one ball
//! height above the golfer's head and whose ends sit at the golfer's feet.

use serde::{Serialize, Deserialize};

use crate::core::fixed::{Fixed, FIXED_ONE, fixed_clamp, fixed_mul, from_int, to_fixed};
use crate::core::vec2::FixedVec2;

/// Pixels between the golfer and value 0 on the course.
pub const PLAY_AREA_OFFSET: i32 = 130;

/// Pixels per unit of guess value.
pub const PIXELS_PER_VALUE: i32 = 6;

/// Half the flag's width, so the pole stands on the value.
pub const FLAG_OFFSET: i32 = 8;

/// Default flight step: 0.01 of the whole flight.
pub const DEFAULT_STEP: Fixed = to_fixed(0.01);

/// Fixed geometry of the course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Golfer's top-left position
    pub golfer: FixedVec2,
    /// Golfer sprite height
    pub golfer_height: Fixed,
    /// Ball sprite height
    pub ball_height: Fixed,
}

impl Course {
    /// Create a course from pixel measurements.
    pub fn new(golfer_x: i32, golfer_y: i32, golfer_height: i32, ball_height: i32) -> Self {
        Self {
            golfer: FixedVec2::from_ints(golfer_x, golfer_y),
            golfer_height: from_int(golfer_height),
            ball_height: from_int(ball_height),
        }
    }

    /// Screen X of a value on the course.
    #[inline]
    pub fn to_play_area_x(&self, value: u32) -> Fixed {
        self.golfer.x + from_int(PLAY_AREA_OFFSET + value as i32 * PIXELS_PER_VALUE)
    }

    /// Screen X of the flag marking `secret`.
    #[inline]
    pub fn flag_x(&self, secret: u32) -> Fixed {
        self.to_play_area_x(secret) - from_int(FLAG_OFFSET)
    }

    /// Horizontal travel for a shot at `guess`.
    #[inline]
    pub fn shot_distance(&self, guess: u32) -> Fixed {
        from_int(guess as i32 * PIXELS_PER_VALUE)
    }

    /// Ball Y at flight time `t` in `[0, 1]`.
    pub fn ball_y_at(&self, t: Fixed) -> Fixed {
        // Shift t to [-1, 1] so the parabola peaks mid-flight
        let point = 2 * t - FIXED_ONE;
        self.golfer.y - self.ball_height + fixed_mul(fixed_mul(point, point), self.golfer_height)
    }
}

/// A ball in flight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallFlight {
    course: Course,
    rest: FixedVec2,
    dest_x: Fixed,
    time: Fixed,
}

impl BallFlight {
    /// Create a ball resting at `rest`.
    pub fn new(course: Course, rest: FixedVec2) -> Self {
        Self {
            course,
            rest,
            dest_x: 0,
            time: 0,
        }
    }

    /// Return the ball to rest. Keeps the previous travel when `dest_x` is `None`.
    pub fn reset(&mut self, dest_x: Option<Fixed>) {
        if let Some(dest_x) = dest_x {
            self.dest_x = dest_x;
        }
        self.time = 0;
    }

    /// Reset and aim the ball at `guess`.
    pub fn launch(&mut self, guess: u32) {
        let distance = self.course.shot_distance(guess);
        self.reset(Some(distance));
    }

    /// Advance flight time by `dt` and return the new position.
    ///
    /// Time is capped at 1 so the ball never flies past its landing point,
    /// whatever the size of `dt`.
    pub fn advance(&mut self, dt: Fixed) -> FixedVec2 {
        self.time = fixed_clamp(self.time.saturating_add(dt), 0, FIXED_ONE);
        self.position()
    }

    /// Position at the current flight time.
    pub fn position(&self) -> FixedVec2 {
        if self.time == 0 {
            return self.rest;
        }
        FixedVec2::new(
            self.rest.x + fixed_mul(self.dest_x, self.time),
            self.course.ball_y_at(self.time),
        )
    }

    /// Flight time elapsed, in `[0, 1]`.
    pub fn time(&self) -> Fixed {
        self.time
    }

    /// Whether the ball has landed.
    pub fn is_finished(&self) -> bool {
        self.time >= FIXED_ONE
    }

    /// Fly the rest of the way in `step` increments and return the landing point.
    pub fn land(&mut self, step: Fixed) -> FixedVec2 {
        let step = step.max(1);
        while !self.is_finished() {
            self.advance(step);
        }
        self.position()
    }
}
