//! Initial particle placement.
//!
//! Provides helper methods for scattering particles across the world when a
//! simulation starts or resets.

use crate::particle::{Particle, ParticleScale, Species};
use glam::Vec2;
use rand::Rng;

/// Context used while spawning the initial population.
///
/// Borrows the simulation's RNG so a seeded run spawns the same particles
/// every time.
pub struct SpawnContext<'a, R: Rng + ?Sized> {
    /// World size.
    pub bounds: Vec2,
    /// Base particle size.
    pub scale: ParticleScale,
    /// Velocity components are drawn from `[-speed, speed]`.
    pub speed: f32,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> SpawnContext<'a, R> {
    pub fn new(bounds: Vec2, scale: ParticleScale, speed: f32, rng: &'a mut R) -> Self {
        Self {
            bounds,
            scale,
            speed,
            rng,
        }
    }

    /// Random point whose circle of `radius` lies fully inside the world.
    pub fn random_position(&mut self, radius: f32) -> Vec2 {
        let x = self.random_between(radius, self.bounds.x - radius);
        let y = self.random_between(radius, self.bounds.y - radius);
        Vec2::new(x, y)
    }

    /// Random velocity with each component in `[-speed, speed]`.
    pub fn random_velocity(&mut self) -> Vec2 {
        let speed = self.speed;
        Vec2::new(
            self.random_between(-speed, speed),
            self.random_between(-speed, speed),
        )
    }

    /// One particle of `species` at a random position and velocity.
    pub fn particle(&mut self, species: Species) -> Particle {
        let radius = self.scale.radius_of(species);
        let position = self.random_position(radius);
        let velocity = self.random_velocity();
        Particle::new(species, position, velocity, &self.scale)
    }

    /// `a` A particles followed by `b` B particles.
    pub fn population(&mut self, a: usize, b: usize) -> Vec<Particle> {
        let mut particles = Vec::with_capacity(a + b);
        particles.extend((0..a).map(|_| self.particle(Species::A)));
        particles.extend((0..b).map(|_| self.particle(Species::B)));
        particles
    }

    // Empty ranges (zero speed, a world exactly one particle wide) collapse to
    // the lower bound instead of panicking in `gen_range`.
    fn random_between(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }
}
