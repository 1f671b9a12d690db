/*!
misc.rs - Transfers / Stack / Flag / register INC-DEC family

Transfers:
  TAX (0xAA), TAY (0xA8), TXA (0x8A), TYA (0x98), TSX (0xBA), TXS (0x9A)

Stack:
  PHA (0x48), PLA (0x68), PHP (0x08), PLP (0x28)

Flag operations:
  CLC (0x18), SEC (0x38),
  CLI (0x58), SEI (0x78),
  CLD (0xD8), SED (0xF8),
  CLV (0xB8)

Register increment / decrement:
  INX (0xE8), INY (0xC8), DEX (0xCA), DEY (0x88)

All fixed cost, implied addressing.
*/

use crate::bus::Bus;
use crate::cpu::execute;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW};

pub(crate) use crate::cpu::execute::{dex, dey, inx, iny, tax, tay, tsx, txa, txs, tya};

pub(crate) fn pha<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) {
    execute::pha(cpu, bus);
}

pub(crate) fn php<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) {
    execute::php(cpu, bus);
}

pub(crate) fn pla<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) {
    execute::pla(cpu, bus);
}

pub(crate) fn plp<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) {
    execute::plp(cpu, bus);
}

pub(crate) fn clc<C: CpuRegs>(cpu: &mut C) {
    cpu.assign_flag(CARRY, false);
}

pub(crate) fn sec<C: CpuRegs>(cpu: &mut C) {
    cpu.assign_flag(CARRY, true);
}

pub(crate) fn cli<C: CpuRegs>(cpu: &mut C) {
    cpu.assign_flag(IRQ_DISABLE, false);
}

pub(crate) fn sei<C: CpuRegs>(cpu: &mut C) {
    cpu.assign_flag(IRQ_DISABLE, true);
}

pub(crate) fn cld<C: CpuRegs>(cpu: &mut C) {
    cpu.assign_flag(DECIMAL, false);
}

pub(crate) fn sed<C: CpuRegs>(cpu: &mut C) {
    cpu.assign_flag(DECIMAL, true);
}

pub(crate) fn clv<C: CpuRegs>(cpu: &mut C) {
    cpu.assign_flag(OVERFLOW, false);
}
