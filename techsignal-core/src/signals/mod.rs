//! Signal synthesis: fold indicator readings into one directional call.
//!
//! Synthesis is a pure function of the latest indicator readings. It never
//! sees the series itself, so the same readings always produce the same call.

pub mod composite;
pub mod synthesizer;

pub use composite::{CompositeSignal, Direction};
pub use synthesizer::{synthesize, SignalInputs};
