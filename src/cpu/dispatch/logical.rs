/*!
logical.rs - AND / ORA / EOR / BIT

AND, ORA and EOR combine the operand into A and set Z/N. BIT only touches
flags: Z from A & M, N and V copied from bits 7 and 6 of M.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{self, read_operand};
use crate::cpu::regs::CpuRegs;

pub(crate) fn and<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::and(cpu, v);
}

pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::ora(cpu, v);
}

pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::eor(cpu, v);
}

pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::bit(cpu, v);
}
