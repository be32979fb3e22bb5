mod util;
mod types;
mod terms;
mod dynamics;

pub use types::{BodyState, FlightStepDebug, PreStepContext};
pub use terms::ThrustMode;
pub use dynamics::FlightForceModel;
