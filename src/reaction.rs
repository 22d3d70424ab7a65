//! Reaction (A + B → AB) and dissociation (AB → A + B).
//!
//! Neither pass mutates the particle list while scanning it. Merges and
//! splits are queued in a [`PendingChanges`] log and applied once the scan is
//! over, so indices seen during the scan stay valid throughout.

use crate::params::ReactionParams;
use crate::particle::{Particle, ParticleScale, Species};
use crate::physics;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Removals and insertions collected during a scan.
#[derive(Debug, Default)]
pub struct PendingChanges {
    removals: Vec<usize>,
    insertions: Vec<Particle>,
}

impl PendingChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `index` is already scheduled for removal.
    pub fn is_removed(&self, index: usize) -> bool {
        self.removals.contains(&index)
    }

    /// Schedule a removal. Duplicate indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if !self.is_removed(index) {
            self.removals.push(index);
        }
    }

    /// Schedule a new particle to be appended.
    pub fn insert(&mut self, particle: Particle) {
        self.insertions.push(particle);
    }

    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.insertions.is_empty()
    }

    /// Apply the log: removals highest index first, then appends in the order
    /// they were queued.
    pub fn apply(mut self, particles: &mut Vec<Particle>) {
        self.removals.sort_unstable_by(|a, b| b.cmp(a));
        for index in self.removals {
            if index < particles.len() {
                particles.remove(index);
            }
        }
        particles.extend(self.insertions);
    }
}

/// Outcome of one collision scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    /// Pairs whose impulse was applied.
    pub collisions: usize,
    /// A/B pairs merged into AB.
    pub reactions: usize,
}

/// Merge an A and a B into one AB at their midpoint, moving with their mean
/// velocity.
pub fn merge(first: &Particle, second: &Particle, scale: &ParticleScale) -> Particle {
    Particle::new(
        Species::AB,
        (first.position + second.position) * 0.5,
        (first.velocity + second.velocity) * 0.5,
        scale,
    )
}

/// Split an AB into an A and a B separated by the unit vector at `angle`.
pub fn split(molecule: &Particle, angle: f32, scale: &ParticleScale) -> [Particle; 2] {
    let kick = Vec2::from_angle(angle);
    [
        Particle::new(Species::A, molecule.position, molecule.velocity + kick, scale),
        Particle::new(Species::B, molecule.position, molecule.velocity - kick, scale),
    ]
}

/// Check every pair, resolve elastic collisions and roll for reactions.
///
/// Pairs are visited `i` ascending, then `j > i` ascending. A particle
/// consumed by an earlier merge in the same scan no longer exists: it neither
/// collides nor reacts again. Every remaining overlapping A/B pair gets its
/// own draw.
pub fn collide_and_react<R: Rng + ?Sized>(
    particles: &mut [Particle],
    params: &ReactionParams,
    scale: &ParticleScale,
    rng: &mut R,
    pending: &mut PendingChanges,
) -> CollisionOutcome {
    let probability = params.reaction_probability();
    let mut outcome = CollisionOutcome::default();

    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            if pending.is_removed(i) {
                break;
            }
            if pending.is_removed(j) || !physics::overlaps(&particles[i], &particles[j]) {
                continue;
            }

            let (head, tail) = particles.split_at_mut(j);
            let (first, second) = (&mut head[i], &mut tail[0]);
            if physics::resolve_collision(first, second) {
                outcome.collisions += 1;
            }

            if !first.species.can_react_with(second.species) {
                continue;
            }
            if rng.gen::<f32>() >= probability {
                continue;
            }

            tracing::trace!(i, j, "A + B -> AB");
            pending.insert(merge(first, second, scale));
            pending.remove(j);
            pending.remove(i);
            outcome.reactions += 1;
        }
    }

    outcome
}

/// Roll for dissociation of every AB particle, highest index first.
///
/// Returns the number of molecules split.
pub fn dissociate<R: Rng + ?Sized>(
    particles: &[Particle],
    params: &ReactionParams,
    scale: &ParticleScale,
    rng: &mut R,
    pending: &mut PendingChanges,
) -> usize {
    let probability = params.break_probability();
    let mut broken = 0;

    for (index, molecule) in particles.iter().enumerate().rev() {
        if molecule.species != Species::AB || pending.is_removed(index) {
            continue;
        }
        if rng.gen::<f32>() >= probability {
            continue;
        }

        let angle = rng.gen_range(0.0..TAU);
        tracing::trace!(index, angle, "AB -> A + B");
        pending.remove(index);
        for child in split(molecule, angle, scale) {
            pending.insert(child);
        }
        broken += 1;
    }

    broken
}
