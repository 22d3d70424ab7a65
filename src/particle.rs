//! Particle types for the A + B ⇌ AB reaction.
//!
//! Particles are fungible: a particle has a species, a position, a velocity
//! and a size, nothing else. Reactions destroy two particles and create one,
//! dissociations do the reverse.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Radius multiplier applied to AB particles relative to A/B.
pub const AB_RADIUS_FACTOR: f32 = 1.4;

/// Mass multiplier applied to AB particles relative to A/B.
pub const AB_MASS_FACTOR: f32 = 2.0;

/// The three species a particle can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    A,
    B,
    AB,
}

impl Species {
    /// All species in display order.
    pub const ALL: [Species; 3] = [Species::A, Species::B, Species::AB];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Species::A => "A",
            Species::B => "B",
            Species::AB => "AB",
        }
    }

    /// RGB colour (0.0-1.0) used for the particle view and the graph line.
    pub fn color(self) -> Vec3 {
        match self {
            Species::A => Vec3::new(0.91, 0.30, 0.24),
            Species::B => Vec3::new(0.20, 0.60, 0.86),
            Species::AB => Vec3::new(0.61, 0.35, 0.71),
        }
    }

    /// True for one A and one B in either order.
    #[inline]
    pub fn can_react_with(self, other: Species) -> bool {
        matches!(
            (self, other),
            (Species::A, Species::B) | (Species::B, Species::A)
        )
    }
}

/// Base size of an A or B particle. AB particles are derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleScale {
    pub radius: f32,
    pub mass: f32,
}

impl ParticleScale {
    /// Radius for a particle of the given species.
    pub fn radius_of(&self, species: Species) -> f32 {
        match species {
            Species::AB => self.radius * AB_RADIUS_FACTOR,
            _ => self.radius,
        }
    }

    /// Mass for a particle of the given species.
    pub fn mass_of(&self, species: Species) -> f32 {
        match species {
            Species::AB => self.mass * AB_MASS_FACTOR,
            _ => self.mass,
        }
    }
}

impl Default for ParticleScale {
    fn default() -> Self {
        Self {
            radius: 6.0,
            mass: 1.0,
        }
    }
}

/// A single circular particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub species: Species,
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub mass: f32,
}

impl Particle {
    /// Create a particle, sizing it from `scale` according to its species.
    pub fn new(species: Species, position: Vec2, velocity: Vec2, scale: &ParticleScale) -> Self {
        Self {
            species,
            position,
            velocity,
            radius: scale.radius_of(species),
            mass: scale.mass_of(species),
        }
    }

    /// Kinetic energy `½·m·|v|²`.
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

/// Live count of each species.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Population {
    pub a: usize,
    pub b: usize,
    pub ab: usize,
}

impl Population {
    /// Count the species of a particle slice.
    pub fn count(particles: &[Particle]) -> Self {
        particles.iter().fold(Self::default(), |mut acc, p| {
            match p.species {
                Species::A => acc.a += 1,
                Species::B => acc.b += 1,
                Species::AB => acc.ab += 1,
            }
            acc
        })
    }

    /// Count for a single species.
    pub fn get(&self, species: Species) -> usize {
        match species {
            Species::A => self.a,
            Species::B => self.b,
            Species::AB => self.ab,
        }
    }

    /// Number of particles.
    pub fn total(&self) -> usize {
        self.a + self.b + self.ab
    }

    /// `a + b + 2·ab`; unchanged by reactions and dissociations.
    pub fn mass_units(&self) -> usize {
        self.a + self.b + 2 * self.ab
    }
}
