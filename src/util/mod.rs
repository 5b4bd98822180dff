//! Shared helpers: decay envelopes for offset effects and tick pacing for
//! drivers of the rig.

/// Decay envelopes.
pub mod falloff;
/// Tick pacing and rate measurement.
pub mod frame_timing;
