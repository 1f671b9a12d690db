/*!
Stub audio unit: register file behind the `AudioUnit` surface.

Scope:
- Latches writes to $4000..=$4017 (except $4014, which the bus routes to the
  picture unit).
- $4015 write: channel enable mask (bits 0..4); $4015 read returns it.
- Every other register reads as 0. The controller ports $4016/$4017 read as 0
  (no input devices are attached).

This unit does not generate audio, advance a frame sequencer or raise IRQs.
*/

use crate::bus::AudioUnit;

const STATUS: u16 = 0x4015;
const ENABLE_MASK: u8 = 0b0001_1111;

#[derive(Clone, Debug)]
pub struct ApuRegisterFile {
    // Raw latch for $4000..=$4017 (24 bytes); the $4014 slot stays unused.
    regs: [u8; 0x18],
}

impl Default for ApuRegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl ApuRegisterFile {
    pub fn new() -> Self {
        Self { regs: [0; 0x18] }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Last value written at `addr` (0 outside $4000..=$4017).
    pub fn register(&self, addr: u16) -> u8 {
        if (0x4000..=0x4017).contains(&addr) {
            self.regs[(addr - 0x4000) as usize]
        } else {
            0
        }
    }

    /// Channel enable bits from the last $4015 write.
    pub fn enabled_mask(&self) -> u8 {
        self.register(STATUS) & ENABLE_MASK
    }
}

impl AudioUnit for ApuRegisterFile {
    fn read_register(&mut self, addr: u16) -> u8 {
        match addr {
            STATUS => self.enabled_mask(),
            _ => 0,
        }
    }

    fn write_register(&mut self, addr: u16, value: u8) {
        if !(0x4000..=0x4017).contains(&addr) || addr == 0x4014 {
            return;
        }
        self.regs[(addr - 0x4000) as usize] = value;
    }
}
