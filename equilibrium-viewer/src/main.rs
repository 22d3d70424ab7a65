//! Equilibrium Viewer - interactive window for the A + B ⇌ AB simulation
//!
//! Sliders and buttons on the right; particles, population graph and energy
//! diagram in the centre.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use equilibrium::prelude::*;
use equilibrium_viewer::ui::{handle_shortcuts, render_controls_panel, render_views};
use equilibrium_viewer::{init_tracing, load_config, ParamOverrides};

#[derive(Parser, Debug)]
#[command(
    name = "equilibrium-viewer",
    version,
    about = "Interactive A + B <=> AB particle simulation"
)]
struct Cli {
    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(flatten)]
    overrides: ParamOverrides,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.overrides.apply(load_config(cli.config.as_deref())?)?;
    tracing::info!(
        a = config.initial_a,
        b = config.initial_b,
        seed = ?config.seed,
        "starting viewer"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Equilibrium"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Equilibrium",
        options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}

struct ViewerApp {
    simulation: Simulation,
    time: Time,
    step: FixedStep,
    theme: Theme,
}

impl ViewerApp {
    fn new(config: SimConfig) -> Self {
        let step = FixedStep::new(config.tick_rate, config.max_ticks_per_frame);
        Self {
            simulation: Simulation::new(config),
            time: Time::new(),
            step,
            theme: Theme::default(),
        }
    }

    fn on_effect(&mut self, effect: ControlEffect) {
        if effect.redraw_energy_profile {
            let profile = self.simulation.energy_profile();
            tracing::debug!(
                reactant = profile.reactant,
                product = profile.product,
                peak = profile.peak_energy(),
                "energy profile changed"
            );
        }
        if effect.redraw_state {
            self.step.reset();
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.time.set_paused(!self.simulation.is_running());
        self.time.update();

        let effect = handle_shortcuts(ctx, &mut self.simulation);
        self.on_effect(effect);

        if self.time.is_paused() {
            self.step.reset();
        } else {
            for _ in 0..self.step.ticks_for(self.time.delta()) {
                let Some(report) = self.simulation.advance(1.0) else {
                    break;
                };
                if report.reactions > 0 || report.dissociations > 0 {
                    tracing::trace!(
                        tick = self.simulation.tick(),
                        reactions = report.reactions,
                        dissociations = report.dissociations,
                        "tick"
                    );
                }
            }
        }

        let effect = egui::SidePanel::right("controls")
            .min_width(280.0)
            .show(ctx, |ui| render_controls_panel(ui, &mut self.simulation, &mut self.time))
            .inner;
        self.on_effect(effect);

        egui::CentralPanel::default().show(ctx, |ui| {
            render_views(ui, &self.simulation, &self.theme);
        });

        if self.simulation.is_running() {
            ctx.request_repaint();
        }
    }
}
