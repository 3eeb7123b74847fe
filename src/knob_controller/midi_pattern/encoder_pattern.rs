use crate::knob_controller::light_mode::LightMode;
use crate::knob_controller::midi_message::MidiMessage;
use crate::knob_controller::midi_pattern::MidiPattern;

const ENCODER_SIGN_BIT: u8 = 0x40;
const ENCODER_MAGNITUDE_MASK: u8 = 0x3f;

/// Ring feedback goes to the controller number 0x20 above the encoder's.
const RING_CONTROLLER_OFFSET: u8 = 0x20;

/// Wire mapping of one MCU rotary encoder: relative sign-magnitude steps
/// in, ring display states out.
pub struct RelativeEncoderPattern {
    control: u8,
}

pub struct RingDisplay {
    pub mode: LightMode,
    pub leds: u8,
}

impl RelativeEncoderPattern {
    pub fn new(control: u8) -> Self {
        Self { control }
    }

    pub fn control(&self) -> u8 {
        self.control
    }
}

impl MidiPattern for RelativeEncoderPattern {
    type Input = i32;
    type Output = RingDisplay;

    fn resolve_value_from_input(&self, message: &MidiMessage) -> Result<i32, ()> {
        if !message.is_control_change() || message.controller() != self.control {
            return Err(());
        }
        let value = message.value();
        let magnitude = (value & ENCODER_MAGNITUDE_MASK) as i32;
        if value & ENCODER_SIGN_BIT != 0 {
            Ok(-magnitude)
        } else {
            Ok(magnitude)
        }
    }

    fn create_output_message_from_state(&self, state: &RingDisplay) -> MidiMessage {
        MidiMessage::control_change(
            RING_CONTROLLER_OFFSET + self.control,
            state.mode.base_offset() + state.leds,
        )
    }
}
