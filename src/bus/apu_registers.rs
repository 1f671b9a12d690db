/*!
APU / I/O registers handler

Addressing overview (CPU):
- 0x4000–0x4013: APU channel registers
- 0x4014: OAM DMA trigger (picture unit, not APU)
- 0x4015: APU status (read) / channel enables (write)
- 0x4016: Controller 1 strobe/read
- 0x4017: APU frame counter (write) / Controller 2 read

Everything except 0x4014 goes to the `AudioUnit` surface, which owns the
per-register semantics (including the I/O ports). 0x4014 reads return 0; a write
reads the 256-byte source page through the bus and hands it to the picture unit.
*/

use log::trace;

use crate::bus::Bus;
use crate::bus::cpu_interface::cpu_read;

pub const OAM_DMA: u16 = 0x4014;

pub struct ApuRegisters;

impl ApuRegisters {
    #[inline]
    pub fn read(bus: &mut Bus<'_>, addr: u16) -> u8 {
        match addr {
            OAM_DMA => 0,
            _ => bus.apu.read_register(addr),
        }
    }

    #[inline]
    pub fn write(bus: &mut Bus<'_>, addr: u16, value: u8) {
        match addr {
            OAM_DMA => start_oam_dma(bus, value),
            _ => bus.apu.write_register(addr, value),
        }
    }
}

/// Copy $XX00-$XXFF through the CPU bus and forward it to the picture unit.
fn start_oam_dma(bus: &mut Bus<'_>, page: u8) {
    trace!("OAM DMA from page {:#04X}", page);
    let base = u16::from(page) << 8;
    let mut data = [0u8; 256];
    for (i, slot) in data.iter_mut().enumerate() {
        *slot = cpu_read(bus, base | i as u16);
    }
    bus.ppu.oam_dma(page, &data);
}
