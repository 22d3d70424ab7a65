//! [`Surface`] backed by an egui painter.

use eframe::egui::{self, epaint::CubicBezierShape};
use equilibrium::render::{Stroke, Surface};
use glam::{Vec2, Vec3};

/// Convert an RGB colour in 0.0-1.0 to egui's 8-bit colour.
pub fn color32(color: Vec3) -> egui::Color32 {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    egui::Color32::from_rgb(c.x as u8, c.y as u8, c.z as u8)
}

fn stroke(stroke: Stroke) -> egui::Stroke {
    egui::Stroke::new(stroke.width, color32(stroke.color))
}

/// Paints into one rectangle of an egui layer. Surface coordinates start at
/// the rectangle's top-left corner.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, point: Vec2) -> egui::Pos2 {
        self.rect.min + egui::vec2(point.x, point.y)
    }
}

impl Surface for EguiSurface<'_> {
    fn size(&self) -> Vec2 {
        Vec2::new(self.rect.width(), self.rect.height())
    }

    fn clear(&mut self, color: Vec3) {
        self.painter.rect_filled(self.rect, 0.0, color32(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec3) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color32(color));
    }

    fn polyline(&mut self, points: &[Vec2], style: Stroke) {
        if points.len() < 2 {
            return;
        }
        let points: Vec<egui::Pos2> = points.iter().map(|&p| self.to_screen(p)).collect();
        self.painter.add(egui::Shape::line(points, stroke(style)));
    }

    fn cubic_bezier(&mut self, from: Vec2, ctrl1: Vec2, ctrl2: Vec2, to: Vec2, style: Stroke) {
        let points = [
            self.to_screen(from),
            self.to_screen(ctrl1),
            self.to_screen(ctrl2),
            self.to_screen(to),
        ];
        self.painter.add(CubicBezierShape::from_points_stroke(
            points,
            false,
            egui::Color32::TRANSPARENT,
            stroke(style),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color32_conversion() {
        assert_eq!(color32(Vec3::ONE), egui::Color32::WHITE);
        assert_eq!(color32(Vec3::ZERO), egui::Color32::BLACK);
        assert_eq!(color32(Vec3::new(2.0, -1.0, 0.5)), egui::Color32::from_rgb(255, 0, 128));
    }
}
