/*!
CPU interface dispatcher

Purpose
- Centralize CPU-visible address decoding and delegate to RAM, register
  surfaces, or banked program storage.

Address map (ranges half-open):
- $0000-$2000: 2 KiB internal RAM, mirrored every $0800
- $2000-$4000: PPU registers, mirrored every 8 bytes
- $4000-$4018: APU / I/O registers ($4014 = OAM DMA)
- $4018-$4020: Disabled test registers (read 0, writes ignored)
- $4020-$6000: Expansion area (read 0, writes ignored)
- $6000-$8000: Cartridge static RAM (not backed: read 0, writes ignored)
- $8000-$10000: Cartridge PRG, offset = bank * page_size + (addr - $8000)
*/

use crate::bus::Bus;
use crate::bus::apu_registers::ApuRegisters;
use crate::bus::ppu_registers::PpuRegisters;

/// CPU-visible read from the unified address space.
pub fn cpu_read(bus: &mut Bus<'_>, addr: u16) -> u8 {
    match addr {
        0x0000..=0x1FFF => bus.ram.read(addr),
        0x2000..=0x3FFF => PpuRegisters::read(bus, addr),
        0x4000..=0x4017 => ApuRegisters::read(bus, addr),
        0x4018..=0x401F => 0,
        0x4020..=0x5FFF => 0,
        0x6000..=0x7FFF => 0,
        0x8000..=0xFFFF => {
            let offset = bus.cartridge.window_offset(bus.bank, addr);
            bus.cartridge.read_program_byte(offset)
        }
    }
}

/// CPU-visible write to the unified address space.
pub fn cpu_write(bus: &mut Bus<'_>, addr: u16, value: u8) {
    match addr {
        0x0000..=0x1FFF => bus.ram.write(addr, value),
        0x2000..=0x3FFF => PpuRegisters::write(bus, addr, value),
        0x4000..=0x4017 => ApuRegisters::write(bus, addr, value),
        // Test registers, expansion area, unbacked SRAM, and PRG are read-only here.
        0x4018..=0xFFFF => {}
    }
}

/// Little-endian word read (low byte at `addr`, high at `addr + 1`, wrapping at $FFFF).
pub fn cpu_read_word(bus: &mut Bus<'_>, addr: u16) -> u16 {
    let lo = cpu_read(bus, addr);
    let hi = cpu_read(bus, addr.wrapping_add(1));
    u16::from_le_bytes([lo, hi])
}
