pub mod config;
pub mod knob_controller;

pub use config::{Config, KnobConfig};
pub use knob_controller::knob::{KnobError, McuKnob, StateChange};
pub use knob_controller::light_mode::LightMode;
