use bevy::prelude::*;
use flight::ControlInputState;
use tracing::debug;

use crate::config::ScriptPhase;

/// Current control snapshot shared by every airplane in the sim.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PilotInput(pub ControlInputState);

#[derive(Resource, Debug, Clone, Default)]
pub struct InputScript {
    phases: Vec<ScriptPhase>,
}

impl InputScript {
    pub fn new(mut phases: Vec<ScriptPhase>) -> Self {
        phases.sort_by(|a, b| a.start.total_cmp(&b.start));
        Self { phases }
    }

    /// Input of the latest phase that has started; nobody seated before the
    /// first phase.
    pub fn input_at(&self, elapsed: f32) -> ControlInputState {
        self.phases
            .iter()
            .rev()
            .find(|p| p.start <= elapsed)
            .map(|p| ControlInputState::from_actions(p.actions.iter().copied(), p.piloted))
            .unwrap_or_default()
    }
}

pub fn apply_script(time: Res<Time>, script: Res<InputScript>, mut input: ResMut<PilotInput>) {
    let next = script.input_at(time.elapsed_secs());
    if next != input.0 {
        debug!(elapsed = time.elapsed_secs(), ?next, "Pilot input changed");
        input.0 = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight::Action;

    #[test]
    fn latest_started_phase_wins() {
        let script = InputScript::new(vec![
            ScriptPhase {
                start: 5.0,
                piloted: false,
                actions: vec![],
            },
            ScriptPhase {
                start: 1.0,
                piloted: true,
                actions: vec![Action::Throttle],
            },
        ]);
        assert_eq!(script.input_at(0.5), ControlInputState::default());
        let climbing = script.input_at(1.0);
        assert!(climbing.piloted && climbing.throttle);
        assert!(!script.input_at(7.0).piloted);
    }
}
