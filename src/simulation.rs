//! The simulation context and its per-tick state transition.
//!
//! [`Simulation`] owns every piece of mutable state: parameters, particles,
//! the running flag, the population history and the RNG. One call to
//! [`Simulation::step`] performs a full tick:
//!
//! 1. integrate motion and bounce off the walls
//! 2. detect overlapping pairs, resolve collisions, roll for reactions
//! 3. roll for dissociation of every AB
//! 4. record the population
//!
//! Drawing is done elsewhere from a [`Snapshot`].

use crate::config::SimConfig;
use crate::controls::{Control, ControlEffect};
use crate::energy::EnergyProfile;
use crate::history::{GraphSeries, PopulationHistory};
use crate::params::{ParamKind, ReactionParams};
use crate::particle::{Particle, Population};
use crate::physics;
use crate::reaction::{self, PendingChanges};
use crate::spawn::SpawnContext;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Events counted during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub collisions: usize,
    pub reactions: usize,
    pub dissociations: usize,
}

/// Read-only copy of what the renderers need.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub particles: Vec<Particle>,
    pub population: Population,
    pub bounds: Vec2,
}

/// A running A + B ⇌ AB simulation.
pub struct Simulation {
    config: SimConfig,
    params: ReactionParams,
    particles: Vec<Particle>,
    history: PopulationHistory,
    running: bool,
    tick: u64,
    rng: SmallRng,
}

impl Simulation {
    /// Create a simulation and spawn its initial population.
    ///
    /// The configuration is assumed valid; see [`SimConfig::validate`].
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let mut sim = Self {
            params: config.params,
            particles: Vec::new(),
            history: PopulationHistory::new(config.history_length),
            running: false,
            tick: 0,
            rng,
            config,
        };
        sim.respawn();
        sim
    }

    /// Start from an explicit particle list instead of a random one.
    pub fn with_particles(mut self, particles: Vec<Particle>) -> Self {
        self.particles = particles;
        self.history.clear();
        self
    }

    /// Respawn the initial population and clear the history. Parameters and
    /// the running flag are kept.
    pub fn reset(&mut self) {
        self.respawn();
        tracing::debug!(
            a = self.config.initial_a,
            b = self.config.initial_b,
            "simulation reset"
        );
    }

    fn respawn(&mut self) {
        let mut ctx = SpawnContext::new(
            self.config.bounds(),
            self.config.scale(),
            self.config.initial_speed,
            &mut self.rng,
        );
        self.particles = ctx.population(self.config.initial_a, self.config.initial_b);
        self.history.clear();
        self.tick = 0;
    }

    /// Run one tick of length `dt` (1.0 is one frame-sized step).
    pub fn step(&mut self, dt: f32) -> TickReport {
        let bounds = self.config.bounds();
        let scale = self.config.scale();

        for particle in &mut self.particles {
            physics::integrate(particle, dt, bounds);
        }

        let mut pending = PendingChanges::new();
        let outcome = reaction::collide_and_react(
            &mut self.particles,
            &self.params,
            &scale,
            &mut self.rng,
            &mut pending,
        );
        pending.apply(&mut self.particles);

        let mut pending = PendingChanges::new();
        let dissociations = reaction::dissociate(
            &self.particles,
            &self.params,
            &scale,
            &mut self.rng,
            &mut pending,
        );
        pending.apply(&mut self.particles);

        self.history.record(self.counts());
        self.tick += 1;

        TickReport {
            collisions: outcome.collisions,
            reactions: outcome.reactions,
            dissociations,
        }
    }

    /// Step only while running.
    pub fn advance(&mut self, dt: f32) -> Option<TickReport> {
        if self.running {
            Some(self.step(dt))
        } else {
            None
        }
    }

    /// Apply a user control.
    pub fn apply(&mut self, control: Control) -> ControlEffect {
        match control {
            Control::Set(kind, value) => self.set_param(kind, value),
            Control::ToggleRunning => self.toggle_running(),
            Control::Reset => self.reset(),
        }
        ControlEffect::for_control(&control)
    }

    /// Set one parameter, clamped to its slider range.
    pub fn set_param(&mut self, kind: ParamKind, value: f32) {
        self.params.set(kind, value);
    }

    pub fn set_temperature(&mut self, value: f32) {
        self.set_param(ParamKind::Temperature, value);
    }

    pub fn set_activation_energy(&mut self, value: f32) {
        self.set_param(ParamKind::ActivationEnergy, value);
    }

    pub fn set_reactant_energy(&mut self, value: f32) {
        self.set_param(ParamKind::ReactantEnergy, value);
    }

    pub fn set_product_energy(&mut self, value: f32) {
        self.set_param(ParamKind::ProductEnergy, value);
    }

    pub fn params(&self) -> &ReactionParams {
        &self.params
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn history(&self) -> &PopulationHistory {
        &self.history
    }

    /// Ticks since the last reset.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Current count of each species.
    pub fn counts(&self) -> Population {
        Population::count(&self.particles)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            particles: self.particles.clone(),
            population: self.counts(),
            bounds: self.config.bounds(),
        }
    }

    /// Smoothed graph lines for the population view.
    pub fn graph_series(&self) -> GraphSeries {
        self.history.graph_series(&self.config.graph())
    }

    /// Energy diagram for the current parameters.
    pub fn energy_profile(&self) -> EnergyProfile {
        EnergyProfile::from(&self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::{ParticleScale, Species};

    fn seeded() -> SimConfig {
        SimConfig {
            seed: Some(1234),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_spawns_initial_population() {
        let sim = Simulation::new(seeded());
        assert_eq!(sim.counts(), Population { a: 40, b: 40, ab: 0 });
        assert!(!sim.is_running());
        assert!(sim.history().is_empty());
    }

    #[test]
    fn test_advance_only_while_running() {
        let mut sim = Simulation::new(seeded());
        assert!(sim.advance(1.0).is_none());
        assert_eq!(sim.tick(), 0);

        sim.apply(Control::ToggleRunning);
        assert!(sim.advance(1.0).is_some());
        assert_eq!(sim.tick(), 1);
        assert_eq!(sim.history().len(), 1);
    }

    #[test]
    fn test_step_conserves_mass_units() {
        let mut sim = Simulation::new(SimConfig {
            width: 200.0,
            height: 200.0,
            params: ReactionParams {
                temperature: 1000.0,
                activation_energy: 5.0,
                ..Default::default()
            },
            ..seeded()
        });
        let start = sim.counts().mass_units();

        let mut reactions = 0;
        for _ in 0..500 {
            reactions += sim.step(1.0).reactions;
            assert_eq!(sim.counts().mass_units(), start);
        }
        assert!(reactions > 0);
    }

    #[test]
    fn test_reset_keeps_params_and_clears_history() {
        let mut sim = Simulation::new(seeded());
        sim.set_temperature(700.0);
        sim.set_running(true);
        for _ in 0..10 {
            sim.step(1.0);
        }

        let effect = sim.apply(Control::Reset);
        assert!(effect.redraw_state);
        assert_eq!(sim.params().temperature, 700.0);
        assert!(sim.is_running());
        assert!(sim.history().is_empty());
        assert_eq!(sim.tick(), 0);
        assert_eq!(sim.counts(), Population { a: 40, b: 40, ab: 0 });
    }

    #[test]
    fn test_slider_effects() {
        let mut sim = Simulation::new(seeded());
        assert!(!sim.apply(Control::Set(ParamKind::Temperature, 500.0)).redraw_energy_profile);
        assert!(sim.apply(Control::Set(ParamKind::ActivationEnergy, 10.0)).redraw_energy_profile);
        assert_eq!(sim.energy_profile().peak_energy(), 30.0);
    }

    #[test]
    fn test_with_particles_replaces_population() {
        let scale = ParticleScale::default();
        let sim = Simulation::new(seeded()).with_particles(vec![Particle::new(
            Species::AB,
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            &scale,
        )]);
        assert_eq!(sim.counts(), Population { a: 0, b: 0, ab: 1 });
        assert_eq!(sim.snapshot().particles.len(), 1);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = || {
            let mut sim = Simulation::new(seeded());
            for _ in 0..200 {
                sim.step(1.0);
            }
            sim.snapshot()
        };
        assert_eq!(run(), run());
    }
}
