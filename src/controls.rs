//! User controls: four sliders and two buttons.
//!
//! Front ends translate their widgets into [`Control`] values and hand them
//! to [`Simulation::apply`](crate::Simulation::apply). Reading the current
//! slider value goes through [`ParamKind`] and
//! [`Simulation::params`](crate::Simulation::params).

use crate::params::ParamKind;

/// A single user action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Control {
    /// Move a slider.
    Set(ParamKind, f32),
    /// Start/pause button.
    ToggleRunning,
    /// Reset button.
    Reset,
}

/// What a front end has to redraw after a control was applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlEffect {
    /// The energy-profile diagram is stale.
    pub redraw_energy_profile: bool,
    /// Particles and graph changed without a tick (reset).
    pub redraw_state: bool,
}

impl ControlEffect {
    pub(crate) fn for_control(control: &Control) -> Self {
        match control {
            Control::Set(kind, _) => Self {
                redraw_energy_profile: kind.affects_energy_profile(),
                redraw_state: false,
            },
            Control::ToggleRunning => Self::default(),
            Control::Reset => Self {
                redraw_energy_profile: false,
                redraw_state: true,
            },
        }
    }
}
