use std::{error::Error, fs, fs::File, io::Write};

use serde::{Deserialize, Serialize};

use crate::knob_controller::light_mode::LightMode;

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub midi_in_port_name: String,
    pub midi_out_port_name: String,
    pub knob: KnobConfig,
}

impl Config {
    pub fn default() -> Config {
        Config {
            midi_in_port_name: String::from("X-TOUCH MINI"),
            midi_out_port_name: String::from("X-TOUCH MINI"),
            knob: KnobConfig {
                control: 1,
                light_mode: None,
                min_value: None,
                max_value: None,
                value: None,
            },
        }
    }

    pub fn write_default_config_file(filename: &str) -> Result<(), Box<dyn Error>> {
        let default_config = Config::default();
        let serialized = serde_json::to_string(&default_config)?;

        let mut file = File::create(filename)?;
        file.write_all(serialized.as_bytes())?;
        Ok(())
    }

    pub fn read_from_config(file_name: &str) -> Result<Config, Box<dyn Error>> {
        let content = fs::read_to_string(file_name)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct KnobConfig {
    pub control: u8,
    pub light_mode: Option<LightMode>,
    pub min_value: Option<i32>,
    pub max_value: Option<i32>,
    pub value: Option<i32>,
}
