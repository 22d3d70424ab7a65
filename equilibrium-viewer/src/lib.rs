//! Equilibrium Viewer - front ends for the A + B ⇌ AB simulation
//!
//! This crate provides:
//! - An interactive egui window with sliders, buttons and the three views
//! - A headless runner that prints population counts
//! - Shared start-up helpers (configuration loading, logging)

pub mod cli;
#[cfg(feature = "egui")]
pub mod painter;
#[cfg(feature = "egui")]
pub mod ui;

pub use cli::{init_tracing, load_config, ParamOverrides};
#[cfg(feature = "egui")]
pub use painter::EguiSurface;
