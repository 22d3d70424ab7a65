//! # Equilibrium
//!
//! A 2D particle simulation of the reversible reaction A + B ⇌ AB.
//!
//! Circular particles drift around a box, bounce off the walls and off each
//! other. When an A hits a B they may merge into an AB; every AB may split
//! back into an A and a B. Four parameters steer the balance between the two:
//! temperature, activation energy, and the energies of reactants and product.
//!
//! ## Quick Start
//!
//! ```ignore
//! use equilibrium::prelude::*;
//!
//! let mut sim = Simulation::new(SimConfig {
//!     seed: Some(7),
//!     ..Default::default()
//! });
//! sim.set_temperature(450.0);
//!
//! for _ in 0..1000 {
//!     sim.step(1.0);
//! }
//! println!("{:?}", sim.counts());
//! ```
//!
//! ## Core Concepts
//!
//! ### Ticks
//!
//! [`Simulation::step`] is a pure state transition: integrate, collide and
//! react, dissociate, record the population. It never draws and never blocks,
//! so it runs headless in tests and in the runner binary.
//!
//! ### Probabilities
//!
//! | Event | Per-tick probability |
//! |-------|----------------------|
//! | A + B → AB (per colliding pair) | `exp(-Ea / (T / 10))` |
//! | AB → A + B (per molecule) | `max(0.001, T/1000 · 0.05 · (1 - stability))` |
//!
//! with `stability = (E_reactant - E_product + 50) / 100`.
//!
//! ### Drawing
//!
//! The [`render`] module draws the particle view, the population graph and
//! the energy diagram through the [`Surface`] trait. Front ends implement
//! `Surface` for whatever they paint on.

pub mod config;
pub mod controls;
pub mod energy;
mod error;
pub mod history;
pub mod params;
pub mod particle;
pub mod physics;
pub mod reaction;
pub mod render;
mod simulation;
pub mod spawn;
pub mod time;

pub use config::SimConfig;
pub use controls::{Control, ControlEffect};
pub use energy::{EnergyProfile, ProfileLayout};
pub use error::ConfigError;
pub use glam::{Vec2, Vec3};
pub use history::{GraphConfig, GraphSeries, PopulationHistory};
pub use params::{ParamKind, ReactionParams};
pub use particle::{Particle, ParticleScale, Population, Species};
pub use render::{Stroke, Surface, Theme};
pub use simulation::{Simulation, Snapshot, TickReport};
pub use time::{FixedStep, Time};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use equilibrium::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::SimConfig;
    pub use crate::controls::{Control, ControlEffect};
    pub use crate::energy::EnergyProfile;
    pub use crate::params::{ParamKind, ReactionParams};
    pub use crate::particle::{Particle, Population, Species};
    pub use crate::render::{
        draw_energy_profile, draw_particles, draw_population_graph, Stroke, Surface, Theme,
    };
    pub use crate::simulation::{Simulation, Snapshot, TickReport};
    pub use crate::time::{FixedStep, Time};
    pub use crate::{Vec2, Vec3};
}
