pub mod binding;
pub mod feedback_handle;
pub mod knob;
pub mod light_mode;
pub mod midi_message;
pub mod midi_pattern;
pub mod transport;

use async_trait::async_trait;

use crate::knob_controller::midi_message::MidiMessage;

#[derive(PartialEq, Eq, Debug)]
pub enum ReceivingState {
    Consumed,
    Pass,
}

#[async_trait]
pub trait MidiMessageReceiver {
    async fn receive_midi_message(&mut self, message: MidiMessage) -> ReceivingState;
}
