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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
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

//! Interactive 3D viewport samples built on wgpu and winit.
//!
//! Four small samples share one stack: a blank window, a triangle, an
//! indexed mesh, and a 3D viewport with a ground grid that the user rotates
//! by dragging with the left mouse button (a virtual trackball).
//!
//! # Key entry points
//!
//! - [`camera::TrackballController`] - drag-to-rotate orientation state
//! - [`engine::Viewport`] - what a window host drives: paint, resize,
//!   pointer events
//! - [`engine::SampleEngine`] - GPU context, renderer and view state for
//!   one demo
//! - [`options::Options`] - TOML-backed configuration
//! - `Viewer` - the winit window host (`viewer` feature)
//!
//! # Architecture
//!
//! Everything runs on the event-loop thread. Window events become
//! [`input::InputEvent`]s, the [`input::InputProcessor`] gates them into
//! [`engine::ViewCommand`]s, [`engine::ViewState`] applies those to the
//! trackball and camera, and the [`renderer::SceneRenderer`] reads the
//! resulting view matrix once per frame. Redraws happen only on demand.

pub mod camera;
#[cfg(feature = "dialog")]
pub mod dialog;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{SampleEngine, ViewState, Viewport};
pub use error::ViewportError;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
