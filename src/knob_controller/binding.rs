use std::error::Error;
use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::config::KnobConfig;
use crate::knob_controller::feedback_handle::KnobFeedbackHandle;
use crate::knob_controller::knob::{McuKnob, StateChange};
use crate::knob_controller::midi_message::MidiMessage;
use crate::knob_controller::transport::TransportChannels;
use crate::knob_controller::MidiMessageReceiver;

/// Owns one knob's subscription to a transport's input stream. Dropping
/// the binding detaches the knob from the stream.
pub struct KnobBinding {
    feedback_handle: KnobFeedbackHandle,
    input_process_task: JoinHandle<()>,
    knob_mutex: Arc<Mutex<McuKnob>>,
}

impl KnobBinding {
    pub fn new(config: KnobConfig, channels: TransportChannels) -> Result<Self, Box<dyn Error>> {
        let feedback_handle = KnobFeedbackHandle::new(channels.sender);
        let knob = McuKnob::new(config, feedback_handle.clone())?;
        let knob_mutex = Arc::new(Mutex::new(knob));
        let input_process_task = tokio::spawn(Self::process_all_midi_inputs(
            channels.receiver,
            knob_mutex.clone(),
        ));

        Ok(Self {
            feedback_handle,
            input_process_task,
            knob_mutex,
        })
    }

    /// Shared handle for direct mutation, e.g. switching the light mode.
    pub fn knob(&self) -> Arc<Mutex<McuKnob>> {
        self.knob_mutex.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.feedback_handle.subscribe()
    }

    async fn process_all_midi_inputs(
        mut source: UnboundedReceiver<MidiMessage>,
        knob_mutex: Arc<Mutex<McuKnob>>,
    ) {
        while let Some(message) = source.recv().await {
            let mut knob = knob_mutex.lock().await;
            let _state = knob.receive_midi_message(message).await;
        }
    }
}

impl Drop for KnobBinding {
    fn drop(&mut self) {
        self.input_process_task.abort();
    }
}
