pub mod encoder_pattern;

use crate::knob_controller::midi_message::MidiMessage;

pub trait MidiPattern {
    type Input;
    type Output;
    fn resolve_value_from_input(&self, message: &MidiMessage) -> Result<Self::Input, ()>;
    fn create_output_message_from_state(&self, state: &Self::Output) -> MidiMessage;
}
