//! Animation model
//!
//! Components describe their motion as data: a starting [`VisualState`], a
//! target, and a [`Transition`]. A renderer samples the animation at an
//! elapsed time. Sampling is pure, so the same animation can be evaluated
//! by tests without a clock.
//!
//! Springs are modelled as a unit-mass damped harmonic oscillator driven
//! from 0 to 1. Once a transition has settled, sampling returns the target
//! exactly.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Residual displacement below which a spring counts as settled
pub const SPRING_REST_THRESHOLD: f32 = 0.001;

/// Upper bound on how long any spring is allowed to run
pub const MAX_SPRING_SETTLE_MS: u64 = 10_000;

const CRITICAL_NEWTON_STEPS: usize = 6;

const OVERDAMPED_BISECTION_STEPS: usize = 40;

// =============================================================================
// Visual State
// =============================================================================

/// Animatable visual properties of a component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    /// Opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Uniform scale
    pub scale: f32,
    /// Horizontal offset
    pub translate_x: f32,
    /// Vertical offset
    pub translate_y: f32,
}

impl VisualState {
    /// Fully visible, unscaled, untranslated
    pub const REST: VisualState = VisualState {
        opacity: 1.0,
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Set opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set vertical offset
    pub fn with_translate_y(mut self, translate_y: f32) -> Self {
        self.translate_y = translate_y;
        self
    }

    /// Interpolate towards `to` by progress `t`
    ///
    /// `t` is not clamped; springs overshoot.
    pub fn lerp(&self, to: &VisualState, t: f32) -> VisualState {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        VisualState {
            opacity: mix(self.opacity, to.opacity),
            scale: mix(self.scale, to.scale),
            translate_x: mix(self.translate_x, to.translate_x),
            translate_y: mix(self.translate_y, to.translate_y),
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::REST
    }
}

// =============================================================================
// Transitions
// =============================================================================

/// Easing curve for timing transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Quadratic ease in and out
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the curve to linear progress in `[0, 1]`
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// How a component moves between two visual states
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transition {
    /// Fixed-duration curve
    Timing {
        /// Duration in milliseconds
        duration_ms: u32,
        /// Start delay in milliseconds
        delay_ms: u32,
        /// Easing curve
        #[serde(default)]
        easing: Easing,
    },
    /// Physical spring
    Spring {
        /// Damping coefficient
        damping: f32,
        /// Stiffness
        stiffness: f32,
        /// Start delay in milliseconds
        delay_ms: u32,
    },
}

impl Transition {
    /// Ease-in-out timing transition
    pub fn timing(duration_ms: u32) -> Self {
        Transition::Timing {
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseInOut,
        }
    }

    /// Linear timing transition
    pub fn linear(duration_ms: u32) -> Self {
        Transition::Timing {
            duration_ms,
            delay_ms: 0,
            easing: Easing::Linear,
        }
    }

    /// Spring transition
    pub fn spring(damping: f32, stiffness: f32) -> Self {
        Transition::Spring {
            damping,
            stiffness,
            delay_ms: 0,
        }
    }

    /// Same transition starting after a delay
    pub fn with_delay(self, delay: u32) -> Self {
        match self {
            Transition::Timing {
                duration_ms,
                easing,
                ..
            } => Transition::Timing {
                duration_ms,
                delay_ms: delay,
                easing,
            },
            Transition::Spring {
                damping, stiffness, ..
            } => Transition::Spring {
                damping,
                stiffness,
                delay_ms: delay,
            },
        }
    }

    fn delay(&self) -> Duration {
        match self {
            Transition::Timing { delay_ms, .. } | Transition::Spring { delay_ms, .. } => {
                Duration::from_millis(u64::from(*delay_ms))
            }
        }
    }

    /// Total time from start (including delay) until the motion has settled
    pub fn settle_time(&self) -> Duration {
        let active = match self {
            Transition::Timing { duration_ms, .. } => {
                Duration::from_millis(u64::from(*duration_ms))
            }
            Transition::Spring {
                damping, stiffness, ..
            } => Spring::new(*damping, *stiffness).settle_time(),
        };
        self.delay() + active
    }

    /// Progress from 0 (start) to 1 (target) at `elapsed`
    ///
    /// Springs may overshoot past 1 before settling. At or after
    /// [`settle_time`](Self::settle_time) the result is exactly 1.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.settle_time() {
            return 1.0;
        }
        let delay = self.delay();
        if elapsed <= delay {
            return 0.0;
        }
        let t = elapsed - delay;

        match self {
            Transition::Timing {
                duration_ms,
                easing,
                ..
            } => {
                let linear = t.as_secs_f32() * 1000.0 / *duration_ms as f32;
                easing.apply(linear)
            }
            Transition::Spring {
                damping, stiffness, ..
            } => Spring::new(*damping, *stiffness).position(t.as_secs_f32()),
        }
    }
}

// =============================================================================
// Spring Physics
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct Spring {
    omega0: f32,
    zeta: f32,
}

impl Spring {
    fn new(damping: f32, stiffness: f32) -> Self {
        let omega0 = stiffness.max(0.0).sqrt();
        let zeta = if omega0 > 0.0 {
            damping.max(0.0) / (2.0 * omega0)
        } else {
            0.0
        };
        Self { omega0, zeta }
    }

    fn is_critical(&self) -> bool {
        (self.zeta - 1.0).abs() < 1e-6
    }

    /// Displacement toward the target at `t` seconds (0 at start, 1 at rest)
    fn position(&self, t: f32) -> f32 {
        let Spring { omega0, zeta } = *self;
        if omega0 <= 0.0 {
            return 1.0;
        }

        if self.is_critical() {
            1.0 - (-omega0 * t).exp() * (1.0 + omega0 * t)
        } else if zeta < 1.0 {
            let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega0 * t).exp();
            1.0 - decay * ((omega_d * t).cos() + (zeta * omega0 / omega_d) * (omega_d * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega0 * (zeta - root);
            let r2 = -omega0 * (zeta + root);
            1.0 + (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r1 - r2)
        }
    }

    fn settle_time(&self) -> Duration {
        let cap = Duration::from_millis(MAX_SPRING_SETTLE_MS);
        if self.omega0 <= 0.0 {
            return Duration::ZERO;
        }
        if self.zeta <= 0.0 {
            return cap;
        }

        let secs = if self.is_critical() {
            self.critical_settle_secs()
        } else if self.zeta < 1.0 {
            // Envelope of the underdamped oscillation
            let amplitude = 1.0 / (1.0 - self.zeta * self.zeta).sqrt();
            (amplitude / SPRING_REST_THRESHOLD).ln() / (self.zeta * self.omega0)
        } else {
            self.overdamped_settle_secs(cap.as_secs_f32())
        };

        // Huge or NaN values from near-zero damping fall back to the cap
        Duration::try_from_secs_f32(secs.max(0.0)).map_or(cap, |settle| settle.min(cap))
    }

    /// Solves `(1 + x) e^-x = threshold` for `x = omega0 * t` with Newton
    /// steps on the log form, which is concave and converges in a few steps
    fn critical_settle_secs(&self) -> f32 {
        let target = SPRING_REST_THRESHOLD.ln();
        let mut x = -target + (1.0 - target).ln();
        for _ in 0..CRITICAL_NEWTON_STEPS {
            let f = (1.0 + x).ln() - x - target;
            let slope = 1.0 / (1.0 + x) - 1.0;
            x -= f / slope;
        }
        x / self.omega0
    }

    /// Bisection on the residual, which decreases monotonically when
    /// overdamped
    fn overdamped_settle_secs(&self, cap_secs: f32) -> f32 {
        let residual = |t: f32| (1.0 - self.position(t)).abs();
        if residual(cap_secs) >= SPRING_REST_THRESHOLD {
            return cap_secs;
        }
        let (mut lo, mut hi) = (0.0_f32, cap_secs);
        for _ in 0..OVERDAMPED_BISECTION_STEPS {
            let mid = (lo + hi) / 2.0;
            if residual(mid) < SPRING_REST_THRESHOLD {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        hi
    }
}

// =============================================================================
// Entrance Animation
// =============================================================================

/// A one-shot animation from an initial state to a target state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntranceAnimation {
    /// Initial state
    pub from: VisualState,
    /// Target state
    pub to: VisualState,
    /// Transition curve
    pub transition: Transition,
    /// When false, the component renders the target immediately
    pub enabled: bool,
}

impl EntranceAnimation {
    /// Create an enabled animation
    pub fn new(from: VisualState, to: VisualState, transition: Transition) -> Self {
        Self {
            from,
            to,
            transition,
            enabled: true,
        }
    }

    /// Enable or disable the animation
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Visual state at `elapsed` since mount
    pub fn sample(&self, elapsed: Duration) -> VisualState {
        if !self.enabled || self.is_settled(elapsed) {
            return self.to;
        }
        self.from.lerp(&self.to, self.transition.progress(elapsed))
    }

    /// Whether the animation has finished at `elapsed`
    pub fn is_settled(&self, elapsed: Duration) -> bool {
        !self.enabled || elapsed >= self.settle_time()
    }

    /// Time until the animation has settled
    pub fn settle_time(&self) -> Duration {
        if self.enabled {
            self.transition.settle_time()
        } else {
            Duration::ZERO
        }
    }

    /// Start a new animation toward `to` from wherever this one is at `elapsed`
    pub fn retarget(&self, elapsed: Duration, to: VisualState) -> Self {
        Self {
            from: self.sample(elapsed),
            to,
            transition: self.transition,
            enabled: self.enabled,
        }
    }
}
