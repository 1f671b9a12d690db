/*!
load_store.rs - Load / Store opcode family

Loads (set Z/N flags; indexed reads may pay a page-cross cycle):
    LDA: A9, A5, B5, AD, BD*, B9*, A1, B1*
    LDX: A2, A6, B6, AE, BE*
    LDY: A0, A4, B4, AC, BC*

Stores (no flags changed, fixed cost):
    STA: 85, 95, 8D, 9D, 99, 81, 91
    STX: 86, 96, 8E
    STY: 84, 94, 8C

(*) The penalty is applied by the orchestrator from the table entry.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{self, read_operand, write_operand};
use crate::cpu::regs::CpuRegs;

pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::lda(cpu, v);
}

pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::ldx(cpu, v);
}

pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::ldy(cpu, v);
}

pub(crate) fn sta<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    write_operand(bus, operand, cpu.a());
}

pub(crate) fn stx<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    write_operand(bus, operand, cpu.x());
}

pub(crate) fn sty<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    write_operand(bus, operand, cpu.y());
}
