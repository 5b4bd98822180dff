// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Third-person follow camera rig.
//!
//! Every tick the rig derives a camera transform from a tracked focus
//! object, look input, an operator-chosen viewing distance, line-of-sight
//! obstruction and additive perturbations (headbob, screen shake).
//!
//! # Key entry points
//!
//! - [`rig::CameraRig`] - the per-tick orchestrator and its acquisition
//!   state machine
//! - [`rig::RigBuilder`] - wires rotation, zoom, collision, target, input
//!   and offset components into a rig
//! - [`world`] - the collaborator interfaces the rig talks to (focus
//!   resolution, collision probes) plus reference implementations
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! The rig is single-threaded and driven by one external call per frame,
//! [`rig::CameraRig::tick`]. Inside a tick the pipeline runs in a fixed
//! order: input → rotation → offsets → desired zoom → target point →
//! collision probe → smoothed distance → position → persisted distance →
//! offsets cleared → transform written to the sink exactly once.

pub mod camera;
pub mod effects;
pub mod error;
pub mod input;
pub mod options;
pub mod rig;
pub mod util;
pub mod world;

pub use camera::transform::{CameraTransform, TransformSink};
pub use error::VantageError;
pub use options::Options;
pub use rig::{CameraRig, RigBuilder, RigState, TickOutcome};
