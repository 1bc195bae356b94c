//! The screen reducer trait

use crate::effect::Effect;

/// A tab screen's state machine
///
/// `reduce` is synchronous and infallible. It mutates the screen's own state
/// and describes everything else as effects.
pub trait Screen: Send + 'static {
    /// Events the screen accepts
    type Event: std::fmt::Debug + Send + 'static;

    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Apply one event
    fn reduce(&mut self, event: Self::Event) -> Vec<Effect<Self::Event>>;
}
