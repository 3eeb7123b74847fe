use tokio::sync::broadcast;
use tokio::sync::mpsc::UnboundedSender;

use crate::knob_controller::knob::StateChange;
use crate::knob_controller::midi_message::MidiMessage;

/// Outbound half of a knob: ring updates towards the device and state
/// changes towards local subscribers.
#[derive(Clone)]
pub struct KnobFeedbackHandle {
    pub midi: UnboundedSender<MidiMessage>,
    pub state_changed: broadcast::Sender<StateChange>,
}

impl KnobFeedbackHandle {
    pub fn new(midi: UnboundedSender<MidiMessage>) -> Self {
        let (state_changed, _) = broadcast::channel(16);
        Self {
            midi,
            state_changed,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.state_changed.subscribe()
    }
}
