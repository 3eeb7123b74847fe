use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::trace;

use crate::config::KnobConfig;
use crate::knob_controller::feedback_handle::KnobFeedbackHandle;
use crate::knob_controller::light_mode::LightMode;
use crate::knob_controller::midi_message::MidiMessage;
use crate::knob_controller::midi_pattern::encoder_pattern::{RelativeEncoderPattern, RingDisplay};
use crate::knob_controller::midi_pattern::MidiPattern;
use crate::knob_controller::{MidiMessageReceiver, ReceivingState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateChange {
    Value { old_value: i32, new_value: i32 },
    LightMode { old_value: LightMode, new_value: LightMode },
}

#[derive(Error, Debug)]
pub enum KnobError {
    #[error("invalid knob range: min_value {min} must be below max_value {max}")]
    InvalidRange { min: i32, max: i32 },
}

/// One bounded rotary encoder of an MCU surface. Relative steps move the
/// value inside `[min_value, max_value]`; every accepted change redraws
/// the led ring and is broadcast to subscribers.
pub struct McuKnob {
    pattern: RelativeEncoderPattern,
    min_value: i32,
    max_value: i32,
    value: i32,
    light_mode: LightMode,
    feedback_handle: KnobFeedbackHandle,
}

impl McuKnob {
    pub fn new(config: KnobConfig, feedback_handle: KnobFeedbackHandle) -> Result<Self, KnobError> {
        let min_value = config.min_value.unwrap_or(0);
        let max_value = config.max_value.unwrap_or(100);
        if min_value >= max_value {
            return Err(KnobError::InvalidRange {
                min: min_value,
                max: max_value,
            });
        }

        let mut knob = Self {
            pattern: RelativeEncoderPattern::new(config.control),
            min_value,
            max_value,
            value: min_value,
            light_mode: config.light_mode.unwrap_or_default(),
            feedback_handle,
        };
        knob.set_value(config.value.unwrap_or(50));
        if knob.value == knob.min_value {
            // initial value clamped to the minimum, so the setter was a
            // no-op; the ring still has to be drawn once
            knob.refresh();
        }
        Ok(knob)
    }

    pub fn control(&self) -> u8 {
        self.pattern.control()
    }

    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    /// value goes from min_value to max_value, inclusive.
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        let new_value = value.clamp(self.min_value, self.max_value);
        let old_value = self.value;
        if old_value != new_value {
            self.value = new_value;
            self.refresh();
            self.emit(StateChange::Value {
                old_value,
                new_value,
            });
        }
    }

    pub fn light_mode(&self) -> LightMode {
        self.light_mode
    }

    pub fn set_light_mode(&mut self, new_value: LightMode) {
        let old_value = self.light_mode;
        if old_value != new_value {
            self.light_mode = new_value;
            self.refresh();
            self.emit(StateChange::LightMode {
                old_value,
                new_value,
            });
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.feedback_handle.subscribe()
    }

    fn refresh(&self) {
        let normalized =
            (self.value - self.min_value) as f64 / (self.max_value - self.min_value) as f64;
        let leds = (normalized * self.light_mode.led_scale()) as u8 + 1;
        let message = self.pattern.create_output_message_from_state(&RingDisplay {
            mode: self.light_mode,
            leds,
        });
        let _ = self.feedback_handle.midi.send(message);
    }

    fn emit(&self, change: StateChange) {
        let _ = self.feedback_handle.state_changed.send(change);
    }
}

#[async_trait]
impl MidiMessageReceiver for McuKnob {
    async fn receive_midi_message(&mut self, message: MidiMessage) -> ReceivingState {
        match self.pattern.resolve_value_from_input(&message) {
            Ok(increment) => {
                trace!(increment, "relative encoder step");
                self.set_value(self.value + increment);
                ReceivingState::Consumed
            }
            Err(()) => ReceivingState::Pass,
        }
    }
}
