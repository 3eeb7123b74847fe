use std::error::Error;
use std::future;

use futures_util::StreamExt;
use midir::{MidiIO, MidiInput, MidiInputConnection, MidiOutput, MidiOutputConnection};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::{debug, info};

use crate::knob_controller::midi_message::MidiMessage;

/// Guard for one opened input/output port pair. Dropping it stops the
/// output forwarding task and closes the midir connections.
pub struct Transport {
    _midi_connection_rx: MidiInputConnection<()>,
    sender_task: JoinHandle<()>,
}

/// Channel pair a knob binding works against. In tests these can be plain
/// channels with no device behind them.
pub struct TransportChannels {
    pub sender: UnboundedSender<MidiMessage>,
    pub receiver: UnboundedReceiver<MidiMessage>,
}

impl Transport {
    pub fn new(
        in_port_name: &str,
        out_port_name: &str,
    ) -> Result<(Self, TransportChannels), Box<dyn Error>> {
        let mut midi_out = MidiOutput::new(&("McuKnob out ".to_owned() + out_port_name))?;
        let mut midi_in = MidiInput::new(&("McuKnob in ".to_owned() + in_port_name))?;
        let port_in = Self::find_midi_port(&mut midi_in, in_port_name)?;
        let port_out = Self::find_midi_port(&mut midi_out, out_port_name)?;

        let (midi_rx_sender, midi_rx_receiver) = unbounded_channel();

        let midi_connection_tx = midi_out.connect(&port_out, out_port_name)?;
        let midi_connection_rx = midi_in.connect(
            &port_in,
            in_port_name,
            move |_stamp, message, _| {
                if let Ok(message) = MidiMessage::from_slice(message) {
                    let _ = midi_rx_sender.send(message);
                }
            },
            (),
        )?;
        info!(in_port_name, out_port_name, "midi transport connected");

        let (midi_tx_sender, midi_tx_receiver) = unbounded_channel();
        let sender_task = tokio::spawn(Self::forward_tx_messages(
            midi_tx_receiver,
            midi_connection_tx,
        ));

        Ok((
            Self {
                _midi_connection_rx: midi_connection_rx,
                sender_task,
            },
            TransportChannels {
                sender: midi_tx_sender,
                receiver: midi_rx_receiver,
            },
        ))
    }

    fn find_midi_port<T: MidiIO>(midi: &mut T, port_name: &str) -> Result<T::Port, Box<dyn Error>> {
        for port in midi.ports() {
            if midi.port_name(&port)?.eq_ignore_ascii_case(port_name) {
                return Ok(port);
            }
        }
        Err("The midi port couldn't be found.")?
    }

    async fn forward_tx_messages(
        source: UnboundedReceiver<MidiMessage>,
        mut sink_connection: MidiOutputConnection,
    ) {
        let source_stream = UnboundedReceiverStream::new(source);
        source_stream
            .for_each(|message| {
                if sink_connection.send(&message.data).is_err() {
                    debug!("dropped outgoing midi message");
                }
                future::ready(())
            })
            .await;
    }
}

impl Drop for Transport {
    fn drop(&mut self) {
        self.sender_task.abort();
    }
}
