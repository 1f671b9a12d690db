/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, stack, RMW)

Purpose
=======
Centralize side-effect logic for instructions so the dispatcher families stay
thin: they pick a helper and hand it the resolved operand.

Scope (crate-visible)
---------------------
Operand access:
    read_operand, write_operand, modify_operand

Stack helpers:
    push, pop, push_word, pop_word, push_status_with_break
    php, plp, pha, pla

Core ALU / register transfer:
    lda/ldx/ldy, tax/tay/txa/tya, tsx/txs
    and/ora/eor/bit
    inx/iny/dex/dey
    adc/sbc (binary only), compare

Shifts / rotates / INC / DEC:
    pure `u8 -> u8` transforms applied through `modify_operand`, which covers
    both the accumulator form and the memory read-modify-write form.

Branches:
    branch

All helpers are generic over `CpuRegs`; only the helpers that touch memory
take a `&mut Bus`.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::cycles::branch_cycles;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{BREAK, CARRY, NEGATIVE, OVERFLOW, STACK_PAGE, UNUSED, ZERO};

// ---------------------------------------------------------------------------
// Operand access
// ---------------------------------------------------------------------------

/// Value of a read operand: the immediate byte, the accumulator, or memory at
/// the effective address.
#[inline]
pub(crate) fn read_operand<C: CpuRegs>(cpu: &C, bus: &mut Bus<'_>, operand: Operand) -> u8 {
    match operand {
        Operand::Immediate(v) => v,
        Operand::Accumulator => cpu.a(),
        Operand::Address { addr, .. } => bus.read(addr),
        Operand::None | Operand::Relative(_) => 0,
    }
}

/// Store to the effective address. Operands without an address are ignored.
#[inline]
pub(crate) fn write_operand(bus: &mut Bus<'_>, operand: Operand, value: u8) {
    if let Some(addr) = operand.address() {
        bus.write(addr, value);
    }
}

/// Apply `transform` to the accumulator or to memory, then update Z/N.
///
/// Memory follows the hardware read-modify-write sequence:
/// read -> write old value back -> write new value.
pub(crate) fn modify_operand<C: CpuRegs, F>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand, transform: F) -> u8
where
    F: FnOnce(&mut C, u8) -> u8,
{
    let result = match operand {
        Operand::Accumulator => {
            let old = cpu.a();
            let newv = transform(cpu, old);
            cpu.set_a(newv);
            newv
        }
        Operand::Address { addr, .. } => rmw_memory(cpu, bus, addr, transform),
        Operand::None | Operand::Immediate(_) | Operand::Relative(_) => return 0,
    };
    cpu.update_zn(result);
    result
}

/// Canonical 6502 RMW sequence. Returns the final value.
pub(crate) fn rmw_memory<C: CpuRegs, F>(cpu: &mut C, bus: &mut Bus<'_>, addr: u16, transform: F) -> u8
where
    F: FnOnce(&mut C, u8) -> u8,
{
    let old = bus.read(addr);
    bus.write(addr, old);
    let newv = transform(cpu, old);
    bus.write(addr, newv);
    newv
}

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn push<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, v: u8) {
    let sp = cpu.sp();
    bus.write(STACK_PAGE | u16::from(sp), v);
    cpu.set_sp(sp.wrapping_sub(1));
}

#[inline]
pub(crate) fn pop<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) -> u8 {
    let sp = cpu.sp().wrapping_add(1);
    cpu.set_sp(sp);
    bus.read(STACK_PAGE | u16::from(sp))
}

/// High byte first, so the low byte ends up at the lower stack address.
#[inline]
pub(crate) fn push_word<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, v: u16) {
    let [lo, hi] = v.to_le_bytes();
    push(cpu, bus, hi);
    push(cpu, bus, lo);
}

#[inline]
pub(crate) fn pop_word<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) -> u16 {
    let lo = pop(cpu, bus);
    let hi = pop(cpu, bus);
    u16::from_le_bytes([lo, hi])
}

/// Push P with control over Break flag semantics (BRK/PHP vs IRQ/NMI).
pub(crate) fn push_status_with_break<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, set_break: bool) {
    let v = cpu.compose_status_for_push(set_break);
    push(cpu, bus, v);
}

/// Status as restored by PLP / RTI: B ignored, bit 5 forced.
#[inline]
pub(crate) fn pulled_status(v: u8) -> u8 {
    (v | UNUSED) & !BREAK
}

#[inline]
pub(crate) fn php<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) {
    push_status_with_break(cpu, bus, true);
}

#[inline]
pub(crate) fn plp<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) {
    let v = pop(cpu, bus);
    cpu.set_status(pulled_status(v));
}

#[inline]
pub(crate) fn pha<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) {
    let a = cpu.a();
    push(cpu, bus, a);
}

#[inline]
pub(crate) fn pla<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) {
    let val = pop(cpu, bus);
    lda(cpu, val);
}

// ---------------------------------------------------------------------------
// Loads / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    ldx(cpu, cpu.a());
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    ldy(cpu, cpu.a());
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    lda(cpu, cpu.x());
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    lda(cpu, cpu.y());
}

#[inline]
pub(crate) fn tsx<C: CpuRegs>(cpu: &mut C) {
    ldx(cpu, cpu.sp());
}

/// TXS leaves the flags alone.
#[inline]
pub(crate) fn txs<C: CpuRegs>(cpu: &mut C) {
    cpu.set_sp(cpu.x());
}

// ---------------------------------------------------------------------------
// Logical / Bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    lda(cpu, cpu.a() & v);
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    lda(cpu, cpu.a() | v);
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    lda(cpu, cpu.a() ^ v);
}

/// Z from A & M; N and V copied from bits 7 and 6 of M.
#[inline]
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.assign_flag(ZERO, (cpu.a() & v) == 0);
    cpu.assign_flag(NEGATIVE, (v & 0x80) != 0);
    cpu.assign_flag(OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// Increment / Decrement (register)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx<C: CpuRegs>(cpu: &mut C) {
    ldx(cpu, cpu.x().wrapping_add(1));
}

#[inline]
pub(crate) fn iny<C: CpuRegs>(cpu: &mut C) {
    ldy(cpu, cpu.y().wrapping_add(1));
}

#[inline]
pub(crate) fn dex<C: CpuRegs>(cpu: &mut C) {
    ldx(cpu, cpu.x().wrapping_sub(1));
}

#[inline]
pub(crate) fn dey<C: CpuRegs>(cpu: &mut C) {
    ldy(cpu, cpu.y().wrapping_sub(1));
}

// ---------------------------------------------------------------------------
// Shift / rotate / INC / DEC transforms (used with `modify_operand`)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl<C: CpuRegs>(cpu: &mut C, old: u8) -> u8 {
    cpu.update_carry((old & 0x80) != 0);
    old << 1
}

#[inline]
pub(crate) fn lsr<C: CpuRegs>(cpu: &mut C, old: u8) -> u8 {
    cpu.update_carry((old & 0x01) != 0);
    old >> 1
}

#[inline]
pub(crate) fn rol<C: CpuRegs>(cpu: &mut C, old: u8) -> u8 {
    let carry_in = u8::from(cpu.is_flag_set(CARRY));
    cpu.update_carry((old & 0x80) != 0);
    (old << 1) | carry_in
}

#[inline]
pub(crate) fn ror<C: CpuRegs>(cpu: &mut C, old: u8) -> u8 {
    let carry_in = if cpu.is_flag_set(CARRY) { 0x80 } else { 0 };
    cpu.update_carry((old & 0x01) != 0);
    (old >> 1) | carry_in
}

#[inline]
pub(crate) fn inc<C: CpuRegs>(_cpu: &mut C, old: u8) -> u8 {
    old.wrapping_add(1)
}

#[inline]
pub(crate) fn dec<C: CpuRegs>(_cpu: &mut C, old: u8) -> u8 {
    old.wrapping_sub(1)
}

// ---------------------------------------------------------------------------
// ADC / SBC (binary only; the D flag has no effect)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let carry_in = u16::from(cpu.is_flag_set(CARRY));
    let sum16 = u16::from(a) + u16::from(v) + carry_in;
    let result = sum16 as u8;

    cpu.update_carry(sum16 > 0xFF);
    // Signed overflow: operands share a sign that the result does not.
    cpu.update_overflow(((!(a ^ v)) & (a ^ result) & 0x80) != 0);
    lda(cpu, result);
}

#[inline]
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8) {
    adc(cpu, v ^ 0xFF);
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn compare<C: CpuRegs>(cpu: &mut C, reg: u8, v: u8) {
    cpu.update_carry(reg >= v);
    cpu.update_zn(reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Branch
// ---------------------------------------------------------------------------

/// Apply a relative branch if `take`; returns the extra cycles (0, 1 or 2).
/// PC already points past the displacement byte.
pub(crate) fn branch<C: CpuRegs>(cpu: &mut C, offset: i8, take: bool) -> u8 {
    let from = cpu.pc();
    if !take {
        return 0;
    }
    let to = from.wrapping_add_signed(i16::from(offset));
    cpu.set_pc(to);
    branch_cycles(true, from, to)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
