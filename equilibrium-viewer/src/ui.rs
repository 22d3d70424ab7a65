//! UI panels: controls on the side, the three views in the centre.

use crate::painter::{color32, EguiSurface};
use eframe::egui;
use equilibrium::render::{draw_energy_profile, draw_particles, draw_population_graph, Theme};
use equilibrium::{Control, ControlEffect, ParamKind, Simulation, Species, Time};

/// Fraction of the central area's height given to the particle view.
const PARTICLE_VIEW_SHARE: f32 = 0.6;

/// Sliders, start/pause, reset, playback speed and the live counts.
///
/// Returns what needs redrawing because of controls touched this frame.
pub fn render_controls_panel(ui: &mut egui::Ui, sim: &mut Simulation, time: &mut Time) -> ControlEffect {
    let mut effect = ControlEffect::default();
    let mut apply = |sim: &mut Simulation, control: Control| {
        let result = sim.apply(control);
        effect.redraw_energy_profile |= result.redraw_energy_profile;
        effect.redraw_state |= result.redraw_state;
    };

    ui.heading("Parameters");
    for kind in ParamKind::ALL {
        let mut value = sim.params().get(kind);
        if ui
            .add(egui::Slider::new(&mut value, kind.range()).text(kind.label()))
            .changed()
        {
            apply(sim, Control::Set(kind, value));
        }
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let label = if sim.is_running() { "Pause" } else { "Start" };
        if ui.button(label).clicked() {
            apply(sim, Control::ToggleRunning);
        }
        if ui.button("Reset").clicked() {
            apply(sim, Control::Reset);
        }
    });
    let mut speed = time.time_scale();
    if ui
        .add(egui::Slider::new(&mut speed, 0.25..=4.0).text("Speed").suffix("x"))
        .changed()
    {
        time.set_time_scale(speed);
    }
    ui.label(
        egui::RichText::new("Space: start/pause   R: reset")
            .small()
            .weak(),
    );

    ui.separator();
    ui.heading("Population");
    let counts = sim.counts();
    for species in Species::ALL {
        ui.label(
            egui::RichText::new(format!("{}: {}", species.label(), counts.get(species)))
                .color(color32(species.color()))
                .strong(),
        );
    }

    ui.separator();
    let params = sim.params();
    ui.label(format!("P(react) per collision: {:.4}", params.reaction_probability()));
    ui.label(format!("P(break) per tick: {:.4}", params.break_probability()));
    ui.label(
        egui::RichText::new(format!(
            "Tick {}   {:.1} s   {:.0} fps",
            sim.tick(),
            time.elapsed(),
            time.fps()
        ))
        .weak(),
    );

    effect
}

/// Keyboard shortcuts, mirrored from the buttons.
pub fn handle_shortcuts(ctx: &egui::Context, sim: &mut Simulation) -> ControlEffect {
    let (toggle, reset) = ctx.input(|i| (i.key_pressed(egui::Key::Space), i.key_pressed(egui::Key::R)));
    let mut effect = ControlEffect::default();
    if toggle {
        effect = sim.apply(Control::ToggleRunning);
    }
    if reset {
        effect = sim.apply(Control::Reset);
    }
    effect
}

/// Particle view on top; population graph and energy diagram side by side
/// underneath.
pub fn render_views(ui: &mut egui::Ui, sim: &Simulation, theme: &Theme) {
    let available = ui.available_rect_before_wrap();
    let split_y = available.top() + available.height() * PARTICLE_VIEW_SHARE;
    let gap = 8.0;

    let particle_rect = egui::Rect::from_min_max(
        available.min,
        egui::pos2(available.right(), split_y - gap * 0.5),
    );
    let lower = egui::Rect::from_min_max(egui::pos2(available.left(), split_y + gap * 0.5), available.max);
    let graph_rect = egui::Rect::from_min_max(
        lower.min,
        egui::pos2(lower.center().x - gap * 0.5, lower.bottom()),
    );
    let profile_rect = egui::Rect::from_min_max(
        egui::pos2(lower.center().x + gap * 0.5, lower.top()),
        lower.max,
    );

    let painter = ui.painter();
    draw_particles(&mut EguiSurface::new(painter, particle_rect), &sim.snapshot(), theme);
    draw_population_graph(&mut EguiSurface::new(painter, graph_rect), &sim.graph_series(), theme);
    draw_energy_profile(&mut EguiSurface::new(painter, profile_rect), &sim.energy_profile(), theme);

    ui.allocate_rect(available, egui::Sense::hover());
}
