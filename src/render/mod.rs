//! Drawing against an abstract surface.
//!
//! The simulation never talks to a GUI toolkit. Anything that can clear
//! itself, fill circles and stroke polylines and cubic curves implements
//! [`Surface`]; the draw functions in this module are pure functions of their
//! inputs and can be pointed at a window, an image or a [`RecordingSurface`].

mod graph;
mod profile;

pub use graph::draw_population_graph;
pub use profile::draw_energy_profile;

use crate::simulation::Snapshot;
use glam::{Vec2, Vec3};

/// Line style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    /// RGB, 0.0-1.0.
    pub color: Vec3,
}

impl Stroke {
    pub const fn new(width: f32, color: Vec3) -> Self {
        Self { width, color }
    }
}

/// Minimal drawing capability the renderers need.
pub trait Surface {
    /// Drawable area in surface units.
    fn size(&self) -> Vec2;

    /// Fill the whole surface.
    fn clear(&mut self, color: Vec3);

    /// Filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec3);

    /// Connected line through `points`.
    fn polyline(&mut self, points: &[Vec2], stroke: Stroke);

    /// Cubic Bézier curve.
    fn cubic_bezier(&mut self, from: Vec2, ctrl1: Vec2, ctrl2: Vec2, to: Vec2, stroke: Stroke);
}

/// Colours and line widths shared by the three views.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Vec3,
    pub axis: Stroke,
    pub graph_line_width: f32,
    pub profile: Stroke,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Vec3::new(0.97, 0.97, 0.97),
            axis: Stroke::new(1.0, Vec3::splat(0.6)),
            graph_line_width: 2.0,
            profile: Stroke::new(2.5, Vec3::new(0.17, 0.24, 0.31)),
        }
    }
}

/// Draw every particle, mapping world bounds onto the surface.
pub fn draw_particles(surface: &mut dyn Surface, snapshot: &Snapshot, theme: &Theme) {
    surface.clear(theme.background);

    let size = surface.size();
    if snapshot.bounds.x <= 0.0 || snapshot.bounds.y <= 0.0 {
        return;
    }
    let scale = size / snapshot.bounds;
    let radius_scale = scale.min_element();

    for particle in &snapshot.particles {
        surface.fill_circle(
            particle.position * scale,
            particle.radius * radius_scale,
            particle.species.color(),
        );
    }
}

/// A single recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Vec3),
    Circle {
        center: Vec2,
        radius: f32,
        color: Vec3,
    },
    Polyline {
        points: Vec<Vec2>,
        stroke: Stroke,
    },
    Bezier {
        from: Vec2,
        ctrl1: Vec2,
        ctrl2: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    size: Vec2,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    /// All recorded circles as `(center, radius, color)`.
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Vec3)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    /// All recorded polylines.
    pub fn polylines(&self) -> impl Iterator<Item = (&[Vec2], Stroke)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { points, stroke } => Some((points.as_slice(), *stroke)),
            _ => None,
        })
    }

    /// Number of recorded Bézier curves.
    pub fn bezier_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Bezier { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, color: Vec3) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec3) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn cubic_bezier(&mut self, from: Vec2, ctrl1: Vec2, ctrl2: Vec2, to: Vec2, stroke: Stroke) {
        self.commands.push(DrawCommand::Bezier {
            from,
            ctrl1,
            ctrl2,
            to,
            stroke,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::{Particle, ParticleScale, Population, Species};

    #[test]
    fn test_draw_particles_scales_to_surface() {
        let scale = ParticleScale::default();
        let particles = vec![
            Particle::new(Species::A, Vec2::new(100.0, 50.0), Vec2::ZERO, &scale),
            Particle::new(Species::AB, Vec2::new(300.0, 150.0), Vec2::ZERO, &scale),
        ];
        let snapshot = Snapshot {
            population: Population::count(&particles),
            particles,
            bounds: Vec2::new(400.0, 200.0),
        };

        let mut surface = RecordingSurface::new(Vec2::new(200.0, 100.0));
        draw_particles(&mut surface, &snapshot, &Theme::default());

        assert!(matches!(surface.commands[0], DrawCommand::Clear(_)));
        let circles: Vec<_> = surface.circles().collect();
        assert_eq!(circles.len(), 2);
        assert_eq!(circles[0].0, Vec2::new(50.0, 25.0));
        assert!((circles[0].1 - 3.0).abs() < 1e-5);
        assert_eq!(circles[1].2, Species::AB.color());
    }
}
