//! Rolling population graph.

use super::{Stroke, Surface, Theme};
use crate::history::GraphSeries;
use crate::particle::Species;
use glam::Vec2;

/// Draw the three smoothed population lines.
///
/// All lines share one vertical scale (`series.max_value` maps to the top
/// edge). Horizontal spacing is computed against `series.min_points` so a
/// short history doesn't get stretched across the full width.
pub fn draw_population_graph(surface: &mut dyn Surface, series: &GraphSeries, theme: &Theme) {
    surface.clear(theme.background);

    let size = surface.size();
    surface.polyline(
        &[Vec2::new(0.0, 0.0), Vec2::new(0.0, size.y), Vec2::new(size.x, size.y)],
        theme.axis,
    );

    if series.max_value <= 0.0 {
        return;
    }
    let spacing = series.spacing(size.x);

    for species in Species::ALL {
        let line = series.line(species);
        if line.len() < 2 {
            continue;
        }
        let points: Vec<Vec2> = line
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                Vec2::new(
                    i as f32 * spacing,
                    size.y - (value / series.max_value) * size.y,
                )
            })
            .collect();
        surface.polyline(
            &points,
            Stroke::new(theme.graph_line_width, species.color()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;

    fn series(a: Vec<f32>) -> GraphSeries {
        GraphSeries {
            b: a.iter().map(|v| v / 2.0).collect(),
            ab: vec![0.0; a.len()],
            a,
            max_value: 40.0,
            min_points: 5,
        }
    }

    #[test]
    fn test_lines_scaled_to_shared_max() {
        let mut surface = RecordingSurface::new(Vec2::new(100.0, 80.0));
        draw_population_graph(&mut surface, &series(vec![40.0, 20.0, 0.0]), &Theme::default());

        // Axis plus one line per species.
        let lines: Vec<_> = surface.polylines().collect();
        assert_eq!(lines.len(), 4);

        let a = lines[1].0;
        assert_eq!(a.len(), 3);
        assert_eq!(a[0], Vec2::new(0.0, 0.0));
        assert_eq!(a[1], Vec2::new(25.0, 40.0));
        assert_eq!(a[2], Vec2::new(50.0, 80.0));
        assert_eq!(lines[1].1.color, Species::A.color());
    }

    #[test]
    fn test_single_point_lines_are_skipped() {
        let mut surface = RecordingSurface::new(Vec2::new(100.0, 80.0));
        draw_population_graph(&mut surface, &series(vec![10.0]), &Theme::default());
        assert_eq!(surface.polylines().count(), 1);
    }
}
