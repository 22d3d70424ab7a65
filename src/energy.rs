//! Static energy-profile diagram.
//!
//! Two flat plateaus (reactants on the left, product on the right) joined by
//! a pair of cubic curves that meet at the transition state, which sits
//! `activation` above the reactant level.

use crate::params::ReactionParams;
use glam::Vec2;

/// Energy range the vertical axis always covers, so small barriers don't fill
/// the whole diagram.
pub const MIN_ENERGY_SCALE: f32 = 200.0;

/// Fraction of the surface kept free around the diagram.
const MARGIN: f32 = 0.1;

/// Inputs of the diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyProfile {
    pub reactant: f32,
    pub product: f32,
    pub activation: f32,
}

/// One cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub from: Vec2,
    pub ctrl1: Vec2,
    pub ctrl2: Vec2,
    pub to: Vec2,
}

impl CubicSegment {
    /// Point at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.from * (u * u * u)
            + self.ctrl1 * (3.0 * u * u * t)
            + self.ctrl2 * (3.0 * u * t * t)
            + self.to * (t * t * t)
    }
}

/// The diagram in surface coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileLayout {
    pub reactant_plateau: [Vec2; 2],
    pub product_plateau: [Vec2; 2],
    pub rise: CubicSegment,
    pub fall: CubicSegment,
    pub peak: Vec2,
}

impl EnergyProfile {
    pub fn new(reactant: f32, product: f32, activation: f32) -> Self {
        Self {
            reactant,
            product,
            activation,
        }
    }

    /// Energy of the transition state.
    pub fn peak_energy(&self) -> f32 {
        self.reactant + self.activation
    }

    /// Energy mapped to the top margin.
    pub fn energy_scale(&self) -> f32 {
        MIN_ENERGY_SCALE
            .max(self.peak_energy())
            .max(self.product)
    }

    /// Lay the diagram out on a surface of `size`.
    pub fn layout(&self, size: Vec2) -> ProfileLayout {
        let top = size.y * MARGIN;
        let bottom = size.y * (1.0 - MARGIN);
        let scale = self.energy_scale();
        let y_of = |energy: f32| bottom - (energy / scale) * (bottom - top);
        let x_at = |fraction: f32| size.x * fraction;

        let reactant_y = y_of(self.reactant);
        let product_y = y_of(self.product);
        let peak = Vec2::new(x_at(0.5), y_of(self.peak_energy()));

        let reactant_end = Vec2::new(x_at(0.3), reactant_y);
        let product_start = Vec2::new(x_at(0.7), product_y);

        ProfileLayout {
            reactant_plateau: [Vec2::new(x_at(0.1), reactant_y), reactant_end],
            product_plateau: [product_start, Vec2::new(x_at(0.9), product_y)],
            rise: CubicSegment {
                from: reactant_end,
                ctrl1: Vec2::new(x_at(0.4), reactant_y),
                ctrl2: Vec2::new(x_at(0.4), peak.y),
                to: peak,
            },
            fall: CubicSegment {
                from: peak,
                ctrl1: Vec2::new(x_at(0.6), peak.y),
                ctrl2: Vec2::new(x_at(0.6), product_y),
                to: product_start,
            },
            peak,
        }
    }
}

impl From<&ReactionParams> for EnergyProfile {
    fn from(params: &ReactionParams) -> Self {
        Self::new(
            params.reactant_energy,
            params.product_energy,
            params.activation_energy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Vec2 = Vec2::new(500.0, 300.0);

    #[test]
    fn test_peak_is_reactant_plus_activation() {
        let profile = EnergyProfile::new(20.0, 10.0, 50.0);
        assert_eq!(profile.peak_energy(), 70.0);

        let layout = profile.layout(SIZE);
        let bottom = SIZE.y * 0.9;
        let span = SIZE.y * 0.8;
        assert!((layout.peak.y - (bottom - 70.0 / 200.0 * span)).abs() < 1e-4);
        assert_eq!(layout.peak.x, 250.0);
    }

    #[test]
    fn test_curves_join_plateaus() {
        let layout = EnergyProfile::new(40.0, 5.0, 30.0).layout(SIZE);

        assert_eq!(layout.rise.from, layout.reactant_plateau[1]);
        assert_eq!(layout.rise.to, layout.peak);
        assert_eq!(layout.fall.from, layout.peak);
        assert_eq!(layout.fall.to, layout.product_plateau[0]);
        assert_eq!(layout.rise.point_at(0.0), layout.rise.from);
        assert!((layout.fall.point_at(1.0) - layout.fall.to).length() < 1e-4);
    }

    #[test]
    fn test_higher_energy_is_drawn_higher() {
        let layout = EnergyProfile::new(20.0, 60.0, 10.0).layout(SIZE);
        assert!(layout.product_plateau[0].y < layout.reactant_plateau[0].y);
        assert!(layout.peak.y < layout.reactant_plateau[0].y);
    }

    #[test]
    fn test_scale_grows_with_tall_barrier() {
        let profile = EnergyProfile::new(100.0, 0.0, 150.0);
        assert_eq!(profile.energy_scale(), 250.0);
        let layout = profile.layout(SIZE);
        assert!((layout.peak.y - SIZE.y * 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_from_params() {
        let params = ReactionParams::default();
        let profile = EnergyProfile::from(&params);
        assert_eq!(profile.peak_energy(), params.transition_energy());
    }
}
