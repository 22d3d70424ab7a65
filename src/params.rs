//! Thermodynamic knobs and the probabilities derived from them.
//!
//! The four parameters map one-to-one onto the sliders of the viewer. All
//! energies are in arbitrary units; temperature is in kelvin.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Lower bound on the per-tick dissociation probability.
pub const MIN_BREAK_PROBABILITY: f32 = 0.001;

/// Which tunable parameter a control refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKind {
    Temperature,
    ActivationEnergy,
    ReactantEnergy,
    ProductEnergy,
}

impl ParamKind {
    /// All parameters in slider order.
    pub const ALL: [ParamKind; 4] = [
        ParamKind::Temperature,
        ParamKind::ActivationEnergy,
        ParamKind::ReactantEnergy,
        ParamKind::ProductEnergy,
    ];

    /// Slider label.
    pub fn label(self) -> &'static str {
        match self {
            ParamKind::Temperature => "Temperature (K)",
            ParamKind::ActivationEnergy => "Activation energy",
            ParamKind::ReactantEnergy => "Reactant energy (A + B)",
            ParamKind::ProductEnergy => "Product energy (AB)",
        }
    }

    /// Valid slider range.
    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            ParamKind::Temperature => 0.0..=1000.0,
            ParamKind::ActivationEnergy
            | ParamKind::ReactantEnergy
            | ParamKind::ProductEnergy => 0.0..=100.0,
        }
    }

    /// Initial slider position.
    pub fn default_value(self) -> f32 {
        ReactionParams::default().get(self)
    }

    /// Whether a change to this parameter alters the energy diagram.
    pub fn affects_energy_profile(self) -> bool {
        !matches!(self, ParamKind::Temperature)
    }

    /// Clamp `value` into this parameter's range.
    pub fn clamp(self, value: f32) -> f32 {
        let range = self.range();
        value.clamp(*range.start(), *range.end())
    }
}

/// The four user-tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionParams {
    pub temperature: f32,
    pub activation_energy: f32,
    pub reactant_energy: f32,
    pub product_energy: f32,
}

impl Default for ReactionParams {
    fn default() -> Self {
        Self {
            temperature: 300.0,
            activation_energy: 50.0,
            reactant_energy: 20.0,
            product_energy: 10.0,
        }
    }
}

impl ReactionParams {
    /// Read one parameter.
    pub fn get(&self, kind: ParamKind) -> f32 {
        match kind {
            ParamKind::Temperature => self.temperature,
            ParamKind::ActivationEnergy => self.activation_energy,
            ParamKind::ReactantEnergy => self.reactant_energy,
            ParamKind::ProductEnergy => self.product_energy,
        }
    }

    /// Write one parameter, clamped to its slider range.
    pub fn set(&mut self, kind: ParamKind, value: f32) {
        let value = kind.clamp(value);
        match kind {
            ParamKind::Temperature => self.temperature = value,
            ParamKind::ActivationEnergy => self.activation_energy = value,
            ParamKind::ReactantEnergy => self.reactant_energy = value,
            ParamKind::ProductEnergy => self.product_energy = value,
        }
    }

    /// Probability that a colliding A/B pair merges this tick:
    /// `exp(-Ea / (T / 10))`.
    ///
    /// At `T = 0` the exponent is `-inf` (no reaction) unless the barrier is
    /// also zero, where `0/0` is taken as a barrier-free collision.
    pub fn reaction_probability(&self) -> f32 {
        let exponent = -self.activation_energy / (self.temperature / 10.0);
        if exponent.is_nan() {
            return 1.0;
        }
        exponent.exp()
    }

    /// `(reactant - product + 50) / 100`.
    pub fn stability(&self) -> f32 {
        (self.reactant_energy - self.product_energy + 50.0) / 100.0
    }

    /// `T / 1000`.
    pub fn thermal_energy(&self) -> f32 {
        self.temperature / 1000.0
    }

    /// Probability that an AB particle splits this tick. Never below
    /// [`MIN_BREAK_PROBABILITY`].
    pub fn break_probability(&self) -> f32 {
        let raw = self.thermal_energy() * 0.05 * (1.0 - self.stability());
        raw.max(MIN_BREAK_PROBABILITY)
    }

    /// Height of the transition state on the energy diagram.
    pub fn transition_energy(&self) -> f32 {
        self.reactant_energy + self.activation_energy
    }

    /// True when every parameter lies inside its slider range.
    pub fn in_range(&self) -> bool {
        ParamKind::ALL
            .iter()
            .all(|&kind| kind.range().contains(&self.get(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_probability_formula() {
        let params = ReactionParams {
            temperature: 300.0,
            activation_energy: 50.0,
            ..Default::default()
        };
        let expected = (-50.0f32 / 30.0).exp();
        assert!((params.reaction_probability() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_reaction_probability_at_zero_temperature() {
        let mut params = ReactionParams::default();
        params.temperature = 0.0;
        assert_eq!(params.reaction_probability(), 0.0);

        params.activation_energy = 0.0;
        assert_eq!(params.reaction_probability(), 1.0);
    }

    #[test]
    fn test_break_probability_value() {
        let params = ReactionParams {
            temperature: 300.0,
            activation_energy: 50.0,
            reactant_energy: 20.0,
            product_energy: 10.0,
        };
        // stability 0.6, thermal 0.3 -> 0.3 * 0.05 * 0.4
        assert!((params.break_probability() - 0.006).abs() < 1e-6);
    }

    #[test]
    fn test_break_probability_floor() {
        for &temperature in &[0.0, 1.0, 300.0, 1000.0] {
            for &reactant in &[0.0, 50.0, 100.0] {
                for &product in &[0.0, 50.0, 100.0] {
                    let params = ReactionParams {
                        temperature,
                        activation_energy: 50.0,
                        reactant_energy: reactant,
                        product_energy: product,
                    };
                    assert!(params.break_probability() >= MIN_BREAK_PROBABILITY);
                }
            }
        }

        let cold = ReactionParams {
            temperature: 0.0,
            ..Default::default()
        };
        assert_eq!(cold.break_probability(), MIN_BREAK_PROBABILITY);
    }

    #[test]
    fn test_set_clamps_to_range() {
        let mut params = ReactionParams::default();
        params.set(ParamKind::Temperature, 5000.0);
        assert_eq!(params.temperature, 1000.0);

        params.set(ParamKind::ProductEnergy, -3.0);
        assert_eq!(params.product_energy, 0.0);
        assert!(params.in_range());
    }

    #[test]
    fn test_only_energies_affect_profile() {
        assert!(!ParamKind::Temperature.affects_energy_profile());
        assert!(ParamKind::ActivationEnergy.affects_energy_profile());
        assert!(ParamKind::ReactantEnergy.affects_energy_profile());
        assert!(ParamKind::ProductEnergy.affects_energy_profile());
    }
}
