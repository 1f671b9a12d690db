/*!
addressing.rs - 6502 addressing modes and operand resolution.

Overview
========
- `AddressingMode` names the thirteen 6502 operand forms.
- `resolve` consumes the operand bytes at PC and yields an `Operand`: nothing,
  the accumulator, an immediate byte, a branch displacement, or an effective
  address together with whether index addition crossed a page.
- Low-level helpers cover instruction-stream fetch, zero-page pointer reads
  (high byte wraps inside page zero) and the JMP (indirect) page-wrap quirk.

Byte order
==========
Every 16-bit operand is little-endian: the first byte fetched from the
instruction stream is the low byte. `fetch_word`, `read_word_zp` and
`read_word_indirect_bug` assemble words with `u16::from_le_bytes` so the order
is stated once.

Resolution never applies cycle penalties. The `page_crossed` bit is reported
and the dispatcher decides whether the instruction pays for it.
*/

use crate::bus::Bus;
use crate::cpu::cycles::crosses_page;
use crate::cpu::regs::CpuRegs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    /// JMP only.
    Indirect,
    /// (zp,X)
    IndexedIndirect,
    /// (zp),Y
    IndirectIndexed,
    Relative,
}

impl AddressingMode {
    /// Operand bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed
            | AddressingMode::Relative => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// A resolved operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    None,
    Accumulator,
    Immediate(u8),
    Relative(i8),
    Address { addr: u16, page_crossed: bool },
}

impl Operand {
    #[inline]
    fn at(addr: u16) -> Self {
        Operand::Address {
            addr,
            page_crossed: false,
        }
    }

    /// Effective address, if the operand has one.
    pub fn address(self) -> Option<u16> {
        match self {
            Operand::Address { addr, .. } => Some(addr),
            _ => None,
        }
    }

    pub fn page_crossed(self) -> bool {
        matches!(
            self,
            Operand::Address {
                page_crossed: true,
                ..
            }
        )
    }
}

/// Consume the operand bytes for `mode` and resolve them.
pub(crate) fn resolve<C: CpuRegs>(mode: AddressingMode, cpu: &mut C, bus: &mut Bus<'_>) -> Operand {
    match mode {
        AddressingMode::Implied => Operand::None,
        AddressingMode::Accumulator => Operand::Accumulator,
        AddressingMode::Immediate => Operand::Immediate(fetch_byte(cpu, bus)),
        AddressingMode::Relative => Operand::Relative(fetch_byte(cpu, bus) as i8),
        AddressingMode::ZeroPage => Operand::at(addr_zp(cpu, bus)),
        AddressingMode::ZeroPageX => Operand::at(addr_zp_x(cpu, bus)),
        AddressingMode::ZeroPageY => Operand::at(addr_zp_y(cpu, bus)),
        AddressingMode::Absolute => Operand::at(addr_abs(cpu, bus)),
        AddressingMode::AbsoluteX => {
            let (addr, page_crossed) = addr_abs_x(cpu, bus);
            Operand::Address { addr, page_crossed }
        }
        AddressingMode::AbsoluteY => {
            let (addr, page_crossed) = addr_abs_y(cpu, bus);
            Operand::Address { addr, page_crossed }
        }
        AddressingMode::Indirect => {
            let ptr = fetch_word(cpu, bus);
            Operand::at(read_word_indirect_bug(bus, ptr))
        }
        AddressingMode::IndexedIndirect => Operand::at(addr_ind_x(cpu, bus)),
        AddressingMode::IndirectIndexed => {
            let (addr, page_crossed) = addr_ind_y(cpu, bus);
            Operand::Address { addr, page_crossed }
        }
    }
}

// -------------------------
// Instruction stream fetch
// -------------------------

/// Fetch next byte from the instruction stream, incrementing PC.
pub(crate) fn fetch_byte<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) -> u8 {
    let v = bus.read(cpu.pc());
    cpu.advance_pc_one();
    v
}

/// Fetch next little-endian word (low, then high), incrementing PC twice.
pub(crate) fn fetch_word<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) -> u16 {
    let lo = fetch_byte(cpu, bus);
    let hi = fetch_byte(cpu, bus);
    u16::from_le_bytes([lo, hi])
}

// -------------------------
// Effective address helpers
// -------------------------

#[inline]
fn addr_zp<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) -> u16 {
    u16::from(fetch_byte(cpu, bus))
}

/// Index addition wraps inside page zero.
#[inline]
fn addr_zp_x<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) -> u16 {
    u16::from(fetch_byte(cpu, bus).wrapping_add(cpu.x()))
}

#[inline]
fn addr_zp_y<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) -> u16 {
    u16::from(fetch_byte(cpu, bus).wrapping_add(cpu.y()))
}

#[inline]
fn addr_abs<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) -> u16 {
    fetch_word(cpu, bus)
}

#[inline]
fn addr_abs_x<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) -> (u16, bool) {
    let base = fetch_word(cpu, bus);
    let addr = base.wrapping_add(u16::from(cpu.x()));
    (addr, crosses_page(base, addr))
}

#[inline]
fn addr_abs_y<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) -> (u16, bool) {
    let base = fetch_word(cpu, bus);
    let addr = base.wrapping_add(u16::from(cpu.y()));
    (addr, crosses_page(base, addr))
}

/// (zp,X): pointer lives at (operand + X) mod 256.
#[inline]
fn addr_ind_x<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) -> u16 {
    let zp = fetch_byte(cpu, bus).wrapping_add(cpu.x());
    read_word_zp(bus, zp)
}

/// (zp),Y: pointer lives at operand; Y is added to the pointer value.
#[inline]
fn addr_ind_y<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) -> (u16, bool) {
    let zp = fetch_byte(cpu, bus);
    let base = read_word_zp(bus, zp);
    let addr = base.wrapping_add(u16::from(cpu.y()));
    (addr, crosses_page(base, addr))
}

// -------------------------
// Low-level word helpers
// -------------------------

/// Read a little-endian pointer from zero page; the high byte wraps to $00
/// when `base` is $FF.
#[inline]
pub(crate) fn read_word_zp(bus: &mut Bus<'_>, base: u8) -> u16 {
    let lo = bus.read(u16::from(base));
    let hi = bus.read(u16::from(base.wrapping_add(1)));
    u16::from_le_bytes([lo, hi])
}

/// JMP (indirect) hardware bug: when the vector's low byte sits at $xxFF the
/// high byte is fetched from $xx00 of the same page.
#[inline]
pub(crate) fn read_word_indirect_bug(bus: &mut Bus<'_>, addr: u16) -> u16 {
    let lo = bus.read(addr);
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = bus.read(hi_addr);
    u16::from_le_bytes([lo, hi])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::CpuState;
    use crate::test_utils::Rig;

    #[test]
    fn fetch_word_is_low_byte_first() {
        let mut rig = Rig::new(&[0x34, 0x12]);
        let mut bus = rig.bus();
        let mut cpu = CpuState::new();
        cpu.set_pc(0x8000);
        assert_eq!(fetch_word(&mut cpu, &mut bus), 0x1234);
        assert_eq!(cpu.pc(), 0x8002);
    }

    #[test]
    fn zero_page_x_wraps_inside_page_zero() {
        let mut rig = Rig::new(&[0xFF]);
        let mut bus = rig.bus();
        let mut cpu = CpuState::new();
        cpu.set_pc(0x8000);
        cpu.set_x(2);
        let op = resolve(AddressingMode::ZeroPageX, &mut cpu, &mut bus);
        assert_eq!(op.address(), Some(0x0001));
    }

    #[test]
    fn abs_x_page_cross_detection() {
        let mut rig = Rig::new(&[0xF5, 0x80]);
        let mut bus = rig.bus();
        let mut cpu = CpuState::new();
        cpu.set_pc(0x8000);
        cpu.set_x(0x10);
        let op = resolve(AddressingMode::AbsoluteX, &mut cpu, &mut bus);
        assert_eq!(op.address(), Some(0x8105));
        assert!(op.page_crossed());
    }

    #[test]
    fn abs_x_uses_full_16_bit_sum() {
        let mut rig = Rig::new(&[0xFF, 0xFF]);
        let mut bus = rig.bus();
        let mut cpu = CpuState::new();
        cpu.set_pc(0x8000);
        cpu.set_x(0x01);
        let op = resolve(AddressingMode::AbsoluteX, &mut cpu, &mut bus);
        assert_eq!(op.address(), Some(0x0000));
    }

    #[test]
    fn indexed_indirect_dereferences_zero_page_pointer() {
        let mut rig = Rig::new(&[0x20]);
        let mut bus = rig.bus();
        bus.write(0x0024, 0x74);
        bus.write(0x0025, 0x20);
        let mut cpu = CpuState::new();
        cpu.set_pc(0x8000);
        cpu.set_x(0x04);
        let op = resolve(AddressingMode::IndexedIndirect, &mut cpu, &mut bus);
        assert_eq!(op.address(), Some(0x2074));
        assert!(!op.page_crossed());
    }

    #[test]
    fn indexed_indirect_pointer_wraps() {
        // operand $FE + X=1 => pointer at $FF, high byte from $00
        let mut rig = Rig::new(&[0xFE]);
        let mut bus = rig.bus();
        bus.write(0x00FF, 0x00);
        bus.write(0x0000, 0x03);
        bus.write(0x0100, 0x7F);
        let mut cpu = CpuState::new();
        cpu.set_pc(0x8000);
        cpu.set_x(0x01);
        let op = resolve(AddressingMode::IndexedIndirect, &mut cpu, &mut bus);
        assert_eq!(op.address(), Some(0x0300));
    }

    #[test]
    fn indirect_indexed_adds_y_to_pointer() {
        let mut rig = Rig::new(&[0x86]);
        let mut bus = rig.bus();
        bus.write(0x0086, 0xFF);
        bus.write(0x0087, 0x04);
        let mut cpu = CpuState::new();
        cpu.set_pc(0x8000);
        cpu.set_y(0x01);
        let op = resolve(AddressingMode::IndirectIndexed, &mut cpu, &mut bus);
        assert_eq!(op.address(), Some(0x0500));
        assert!(op.page_crossed());
    }

    #[test]
    fn indirect_jmp_bug() {
        let mut rig = Rig::new(&[0xEA]);
        let mut bus = rig.bus();
        bus.write(0x02FF, 0x34);
        bus.write(0x0200, 0x12);
        bus.write(0x0300, 0x99);
        assert_eq!(read_word_indirect_bug(&mut bus, 0x02FF), 0x1234);
    }

    #[test]
    fn operand_lengths() {
        assert_eq!(AddressingMode::Implied.operand_len(), 0);
        assert_eq!(AddressingMode::Relative.operand_len(), 1);
        assert_eq!(AddressingMode::Indirect.operand_len(), 2);
    }
}
