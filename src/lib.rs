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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Assembly choreography engine for an explorable reactor model.
//!
//! A reactor model (one housing, one lid, a ring of fuel units) can be
//! toggled between an assembled and an exploded arrangement. The engine
//! computes the target layouts, drives barrier-synchronized tween phases
//! over the parts, resolves pointer clicks to parts by ray intersection, and
//! keeps 2D overlay markers glued to the moving parts.
//!
//! # Key entry points
//!
//! - [`engine::AssemblyEngine`] - the engine instance driven by the host
//! - [`engine::boot`] - load parts through an [`loader::AssetLoader`]
//! - [`engine::EngineCommand`] - everything the UI shell can ask for
//! - [`options::Options`] - tuning (distances, durations, colors, camera)
//!
//! # Frame loop
//!
//! The host calls [`AssemblyEngine::tick`](engine::AssemblyEngine::tick)
//! once per rendered frame with the current time. All animation progress,
//! phase barriers, delays and marker projection happen inside that call;
//! nothing runs on other threads.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod layout;
pub mod loader;
pub mod markers;
pub mod options;
pub mod parts;
pub mod picking;
pub mod util;
