use serde::{Deserialize, Serialize};

/// Ring display modes of an MCU rotary encoder:
/// * `Single` - light a single led at the value
/// * `Trim` - light from the value to the top
/// * `Wrap` - light from the left edge up to the value
/// * `Spread` - light outward from the top down both sides
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LightMode {
    #[default]
    Single,
    Trim,
    Wrap,
    Spread,
}

impl LightMode {
    /// Base offset added to the led count in the outgoing ring message.
    pub fn base_offset(self) -> u8 {
        match self {
            LightMode::Single => 0x00,
            LightMode::Trim => 0x10,
            LightMode::Wrap => 0x20,
            LightMode::Spread => 0x30,
        }
    }

    /// Scale factor mapping a normalized value onto the ring. Kept just
    /// below the led count so truncation at the top of the range still
    /// lands on the last led.
    pub fn led_scale(self) -> f64 {
        match self {
            LightMode::Spread => 6.999999,
            _ => 10.999999,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_offsets_match_mcu_ring_commands() {
        assert_eq!(LightMode::Single.base_offset(), 0x00);
        assert_eq!(LightMode::Trim.base_offset(), 0x10);
        assert_eq!(LightMode::Wrap.base_offset(), 0x20);
        assert_eq!(LightMode::Spread.base_offset(), 0x30);
    }

    #[test]
    fn test_modes_deserialize_lowercase() {
        let mode: LightMode = serde_json::from_str(r#""wrap""#).unwrap();
        assert_eq!(mode, LightMode::Wrap);
    }
}
