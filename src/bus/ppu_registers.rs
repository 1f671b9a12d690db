#![doc = r#"
PPU registers handler

Purpose
- Entry point for CPU-visible picture-unit register access (0x2000-0x3FFF).
- Applies stride-8 mirroring, then forwards to the `PictureUnit` surface.

Notes
- Only STATUS ($2002), OAMDATA ($2004) and DATA ($2007) are readable. Reads of
  the write-only registers return 0 without touching the peripheral.
- STATUS is read-only; writes to it are dropped here.
"#]

use crate::bus::Bus;
use crate::bus::interfaces::PpuRegister;

/// Handler for CPU-visible PPU register reads/writes.
pub struct PpuRegisters;

impl PpuRegisters {
    /// Read from a CPU-visible PPU register address (0x2000..=0x3FFF).
    pub fn read(bus: &mut Bus<'_>, addr: u16) -> u8 {
        let reg = PpuRegister::from_address(addr);
        if reg.is_readable() {
            bus.ppu.read_register(reg)
        } else {
            0
        }
    }

    /// Write to a CPU-visible PPU register address (0x2000..=0x3FFF).
    pub fn write(bus: &mut Bus<'_>, addr: u16, value: u8) {
        let reg = PpuRegister::from_address(addr);
        if reg.is_writable() {
            bus.ppu.write_register(reg, value);
        }
    }
}
