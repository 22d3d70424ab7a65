//! Energy-profile diagram.

use super::{Surface, Theme};
use crate::energy::EnergyProfile;

/// Draw the reactant and product plateaus joined through the transition
/// state.
pub fn draw_energy_profile(surface: &mut dyn Surface, profile: &EnergyProfile, theme: &Theme) {
    surface.clear(theme.background);

    let size = surface.size();
    let layout = profile.layout(size);
    let stroke = theme.profile;

    surface.polyline(&layout.reactant_plateau, stroke);
    surface.cubic_bezier(
        layout.rise.from,
        layout.rise.ctrl1,
        layout.rise.ctrl2,
        layout.rise.to,
        stroke,
    );
    surface.cubic_bezier(
        layout.fall.from,
        layout.fall.ctrl1,
        layout.fall.ctrl2,
        layout.fall.to,
        stroke,
    );
    surface.polyline(&layout.product_plateau, stroke);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;
    use glam::Vec2;

    #[test]
    fn test_two_plateaus_two_curves() {
        let mut surface = RecordingSurface::new(Vec2::new(400.0, 200.0));
        draw_energy_profile(&mut surface, &EnergyProfile::new(20.0, 10.0, 50.0), &Theme::default());

        assert_eq!(surface.polylines().count(), 2);
        assert_eq!(surface.bezier_count(), 2);
    }

    #[test]
    fn test_redraw_after_resize_follows_new_size() {
        let profile = EnergyProfile::new(20.0, 10.0, 50.0);
        let mut surface = RecordingSurface::new(Vec2::new(400.0, 200.0));
        draw_energy_profile(&mut surface, &profile, &Theme::default());
        let before: Vec<Vec2> = surface.polylines().next().map(|(p, _)| p.to_vec()).unwrap_or_default();

        surface.resize(Vec2::new(800.0, 200.0));
        draw_energy_profile(&mut surface, &profile, &Theme::default());
        let after: Vec<Vec2> = surface.polylines().next().map(|(p, _)| p.to_vec()).unwrap_or_default();

        assert_eq!(after[0].x, before[0].x * 2.0);
        assert_eq!(after[0].y, before[0].y);
    }
}
