// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
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
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float comparison against exact constants is common in camera math
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

//! Scene-lifecycle and camera-transition core for 3D model showcases.
//!
//! Eyecandy owns the orchestration of a single-model showcase scene:
//! startup sequencing, asset-load outcome handling (real model vs.
//! fallback primitive), the per-frame tick, and interruptible tweened
//! transitions between named camera viewpoints. Rendering, asset
//! decoding, and debug-panel widgets stay behind trait seams
//! ([`render::Renderer`], [`asset::AssetLoader`], [`gui::DebugPanel`]).
//!
//! # Key entry points
//!
//! - [`engine::ShowcaseEngine`] - the scene lifecycle controller
//! - [`camera::ViewTransition`] - the view-to-view tween state machine
//! - [`options::Options`] - runtime configuration (camera, effects,
//!   fallback, colors, keybindings)
//!
//! # Frame loop
//!
//! The host computes an elapsed-seconds delta and calls
//! [`engine::ShowcaseEngine::tick`] once per display refresh. All load
//! completion, tween stepping, and clip playback happens inside that
//! single-threaded call; the engine never blocks.

pub mod animation;
pub mod asset;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gui;
pub mod input;
pub mod options;
pub mod render;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{ShowcaseCommand, ShowcaseEngine};
pub use error::EyecandyError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
