use std::error::Error;

use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mcu_knob::config::Config;
use mcu_knob::knob_controller::binding::KnobBinding;
use mcu_knob::knob_controller::transport::Transport;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = get_config()?;
    let (_transport, channels) =
        Transport::new(&config.midi_in_port_name, &config.midi_out_port_name)?;
    let binding = KnobBinding::new(config.knob, channels)?;
    let mut state_changes = binding.subscribe();

    info!("Knob bound, waiting for encoder input. Ctrl-c to exit.");
    loop {
        tokio::select! {
            change = state_changes.recv() => match change {
                Ok(change) => info!(?change, "knob state changed"),
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    Ok(())
}

fn get_config() -> Result<Config, Box<dyn Error>> {
    let config_file_name = String::from("mcu_knob.json");
    let result = Config::read_from_config(&config_file_name);

    let config = match result {
        Ok(c) => c,
        Err(err) => {
            warn!(
                "Error while reading config file {}: {}",
                config_file_name, err
            );
            Config::write_default_config_file(&config_file_name).unwrap_or(());
            Config::default()
        }
    };
    Ok(config)
}
