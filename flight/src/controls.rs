use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Logical airplane actions as bound by the host's input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Throttle,
    Brake,
    WheelBrake,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::Throttle,
        Action::Brake,
        Action::WheelBrake,
        Action::PitchUp,
        Action::PitchDown,
        Action::YawLeft,
        Action::YawRight,
        Action::RollLeft,
        Action::RollRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Throttle => "throttle",
            Action::Brake => "brake",
            Action::WheelBrake => "wheel_brake",
            Action::PitchUp => "pitch_up",
            Action::PitchDown => "pitch_down",
            Action::YawLeft => "yaw_left",
            Action::YawRight => "yaw_right",
            Action::RollLeft => "roll_left",
            Action::RollRight => "roll_right",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown airplane action `{0}`")]
pub struct ActionParseError(pub String);

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| ActionParseError(s.to_string()))
    }
}

/// Anything that can answer "is this action held right now".
pub trait ActionSource {
    fn is_pressed(&self, action: Action) -> bool;
}

/// Snapshot of the pilot's controls for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlInputState {
    pub throttle: bool,
    pub brake: bool,
    pub wheel_brake: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    /// A controlling pilot is seated.
    pub piloted: bool,
}

impl ControlInputState {
    /// Reads every action from `source`.
    pub fn sample(source: &impl ActionSource, piloted: bool) -> Self {
        let mut state = Self {
            piloted,
            ..Self::default()
        };
        for action in Action::ALL {
            state.set(action, source.is_pressed(action));
        }
        state
    }

    pub fn from_actions(actions: impl IntoIterator<Item = Action>, piloted: bool) -> Self {
        let mut state = Self {
            piloted,
            ..Self::default()
        };
        for action in actions {
            state.set(action, true);
        }
        state
    }

    pub fn set(&mut self, action: Action, pressed: bool) {
        *self.flag_mut(action) = pressed;
    }

    fn flag_mut(&mut self, action: Action) -> &mut bool {
        match action {
            Action::Throttle => &mut self.throttle,
            Action::Brake => &mut self.brake,
            Action::WheelBrake => &mut self.wheel_brake,
            Action::PitchUp => &mut self.pitch_up,
            Action::PitchDown => &mut self.pitch_down,
            Action::YawLeft => &mut self.yaw_left,
            Action::YawRight => &mut self.yaw_right,
            Action::RollLeft => &mut self.roll_left,
            Action::RollRight => &mut self.roll_right,
        }
    }
}

impl ActionSource for ControlInputState {
    fn is_pressed(&self, action: Action) -> bool {
        match action {
            Action::Throttle => self.throttle,
            Action::Brake => self.brake,
            Action::WheelBrake => self.wheel_brake,
            Action::PitchUp => self.pitch_up,
            Action::PitchDown => self.pitch_down,
            Action::YawLeft => self.yaw_left,
            Action::YawRight => self.yaw_right,
            Action::RollLeft => self.roll_left,
            Action::RollRight => self.roll_right,
        }
    }
}

/// Target for an opposed input pair: `+amplitude` for the positive side only,
/// `-amplitude` for the negative side only, 0 when both or neither are held.
pub fn opposed_pair_target(positive: bool, negative: bool, amplitude: f32) -> f32 {
    match (positive, negative) {
        (true, false) => amplitude,
        (false, true) => -amplitude,
        _ => 0.0,
    }
}
