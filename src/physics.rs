//! Motion, wall bounces and elastic collisions between circles.
//!
//! Everything here works on individual particles or pairs and knows nothing
//! about species; reactions are layered on top in [`crate::reaction`].

use crate::particle::Particle;
use glam::Vec2;

/// Coefficient of restitution for particle-particle collisions.
pub const RESTITUTION: f32 = 1.0;

/// Fraction of the penetration depth removed per resolution.
pub const POSITION_CORRECTION: f32 = 0.2;

/// Advance a particle by `dt` and reflect it off the walls of `[0, bounds]`.
///
/// A particle crossing a wall is clamped so its edge touches the wall and the
/// matching velocity component is negated. No energy is lost.
pub fn integrate(particle: &mut Particle, dt: f32, bounds: Vec2) {
    particle.position += particle.velocity * dt;

    let r = particle.radius;
    for axis in 0..2 {
        let max = bounds[axis] - r;
        if particle.position[axis] < r {
            particle.position[axis] = r;
            particle.velocity[axis] = -particle.velocity[axis];
        } else if particle.position[axis] > max {
            particle.position[axis] = max;
            particle.velocity[axis] = -particle.velocity[axis];
        }
    }
}

/// Center distance is below the sum of radii.
#[inline]
pub fn overlaps(a: &Particle, b: &Particle) -> bool {
    let reach = a.radius + b.radius;
    a.position.distance_squared(b.position) < reach * reach
}

/// Resolve an elastic collision between two overlapping particles.
///
/// Returns `false` without touching either particle when they are already
/// moving apart along the contact normal. Otherwise applies the impulse and
/// pushes the pair apart by a fraction of the overlap, split by inverse mass.
pub fn resolve_collision(a: &mut Particle, b: &mut Particle) -> bool {
    let delta = b.position - a.position;
    let normal = delta.normalize_or_zero();

    let relative = b.velocity - a.velocity;
    let along_normal = relative.dot(normal);
    if along_normal >= 0.0 {
        return false;
    }

    let inv_a = 1.0 / a.mass;
    let inv_b = 1.0 / b.mass;
    let inv_sum = inv_a + inv_b;

    let impulse = -(1.0 + RESTITUTION) * along_normal / inv_sum;
    a.velocity -= normal * impulse * inv_a;
    b.velocity += normal * impulse * inv_b;

    let penetration = (a.radius + b.radius - delta.length()).max(0.0);
    let correction = normal * (POSITION_CORRECTION * penetration / inv_sum);
    a.position -= correction * inv_a;
    b.position += correction * inv_b;

    true
}

/// Sum of kinetic energies.
pub fn total_kinetic_energy(particles: &[Particle]) -> f32 {
    particles.iter().map(Particle::kinetic_energy).sum()
}

/// Sum of `m·v`.
pub fn total_momentum(particles: &[Particle]) -> Vec2 {
    particles.iter().map(|p| p.velocity * p.mass).sum()
}
