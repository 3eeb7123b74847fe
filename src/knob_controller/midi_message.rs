use std::array::TryFromSliceError;

/// Status byte of a control change on channel 1, the channel MCU surfaces
/// use for encoder input and ring feedback.
pub const CONTROL_CHANGE_STATUS: u8 = 0xb0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MidiMessage {
    pub data: [u8; 3],
}

impl MidiMessage {
    pub fn from_slice(slice: &[u8]) -> Result<MidiMessage, TryFromSliceError> {
        Ok(MidiMessage {
            data: slice.try_into()?,
        })
    }

    pub fn control_change(controller: u8, value: u8) -> MidiMessage {
        MidiMessage {
            data: [CONTROL_CHANGE_STATUS, controller, value],
        }
    }

    pub fn is_control_change(&self) -> bool {
        self.data[0] == CONTROL_CHANGE_STATUS
    }

    pub fn controller(&self) -> u8 {
        self.data[1]
    }

    pub fn value(&self) -> u8 {
        self.data[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_requires_three_bytes() {
        assert!(MidiMessage::from_slice(&[0xb0, 0x01]).is_err());
        assert!(MidiMessage::from_slice(&[0xb0, 0x01, 0x02, 0x03]).is_err());
        let message = MidiMessage::from_slice(&[0xb0, 0x01, 0x02]).unwrap();
        assert_eq!(message.data, [0xb0, 0x01, 0x02]);
    }

    #[test]
    fn test_control_change_layout() {
        let message = MidiMessage::control_change(0x25, 0x06);
        assert!(message.is_control_change());
        assert_eq!(message.controller(), 0x25);
        assert_eq!(message.value(), 0x06);
    }
}
