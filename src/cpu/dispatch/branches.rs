/*!
branches.rs - Relative branches (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Cycle Rules
===========
Base cost: 2 cycles.
If branch is taken: +1 cycle.
If branch is taken and target crosses a page boundary: +2 total (vs base).

Each handler returns the extra cycles; the displacement was already fetched
by operand resolution, so PC points at the following instruction.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::branch;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};

#[inline]
fn branch_if<C: CpuRegs>(cpu: &mut C, operand: Operand, take: bool) -> u8 {
    match operand {
        Operand::Relative(offset) => branch(cpu, offset, take),
        _ => 0,
    }
}

pub(crate) fn bpl<C: CpuRegs>(cpu: &mut C, operand: Operand) -> u8 {
    let take = !cpu.is_flag_set(NEGATIVE);
    branch_if(cpu, operand, take)
}

pub(crate) fn bmi<C: CpuRegs>(cpu: &mut C, operand: Operand) -> u8 {
    let take = cpu.is_flag_set(NEGATIVE);
    branch_if(cpu, operand, take)
}

pub(crate) fn bvc<C: CpuRegs>(cpu: &mut C, operand: Operand) -> u8 {
    let take = !cpu.is_flag_set(OVERFLOW);
    branch_if(cpu, operand, take)
}

pub(crate) fn bvs<C: CpuRegs>(cpu: &mut C, operand: Operand) -> u8 {
    let take = cpu.is_flag_set(OVERFLOW);
    branch_if(cpu, operand, take)
}

pub(crate) fn bcc<C: CpuRegs>(cpu: &mut C, operand: Operand) -> u8 {
    let take = !cpu.is_flag_set(CARRY);
    branch_if(cpu, operand, take)
}

pub(crate) fn bcs<C: CpuRegs>(cpu: &mut C, operand: Operand) -> u8 {
    let take = cpu.is_flag_set(CARRY);
    branch_if(cpu, operand, take)
}

pub(crate) fn bne<C: CpuRegs>(cpu: &mut C, operand: Operand) -> u8 {
    let take = !cpu.is_flag_set(ZERO);
    branch_if(cpu, operand, take)
}

pub(crate) fn beq<C: CpuRegs>(cpu: &mut C, operand: Operand) -> u8 {
    let take = cpu.is_flag_set(ZERO);
    branch_if(cpu, operand, take)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{with_cpu, with_cpu_at};

    #[test]
    fn branch_not_taken_base_cycles() {
        // BCS +2 (carry clear after reset)
        with_cpu(&[0xB0, 0x02, 0xEA], |cpu, bus| {
            assert_eq!(cpu.step(bus).unwrap(), 2);
            assert_eq!(cpu.pc(), 0x8002);
        });
    }

    #[test]
    fn branch_taken_same_page() {
        // BCC +2 ; NOP ; NOP ; NOP
        with_cpu(&[0x90, 0x02, 0xEA, 0xEA, 0xEA], |cpu, bus| {
            assert_eq!(cpu.step(bus).unwrap(), 3);
            assert_eq!(cpu.pc(), 0x8004);
        });
    }

    #[test]
    fn branch_backwards() {
        // LDX #$02 ; DEX ; BNE -3
        with_cpu(&[0xA2, 0x02, 0xCA, 0xD0, 0xFD], |cpu, bus| {
            cpu.step(bus).unwrap();
            cpu.step(bus).unwrap();
            assert_eq!(cpu.step(bus).unwrap(), 3);
            assert_eq!(cpu.pc(), 0x8002);
            cpu.step(bus).unwrap();
            assert_eq!(cpu.x(), 0);
            assert_eq!(cpu.step(bus).unwrap(), 2);
            assert_eq!(cpu.pc(), 0x8005);
        });
    }

    #[test]
    fn branch_taken_page_cross() {
        // At $80FC: BNE +$04 -> next PC $80FE, target $8102
        with_cpu_at(0x80FC, &[0xD0, 0x04], |cpu, bus| {
            assert_eq!(cpu.step(bus).unwrap(), 4);
            assert_eq!(cpu.pc(), 0x8102);
        });
    }

    #[test]
    fn overflow_and_negative_branches() {
        // LDA #$80 ; BMI +1 ; NOP ; BVS +1 ; BVC +0
        with_cpu(&[0xA9, 0x80, 0x30, 0x01, 0xEA, 0x70, 0x01, 0x50, 0x00], |cpu, bus| {
            cpu.step(bus).unwrap();
            assert_eq!(cpu.step(bus).unwrap(), 3);
            assert_eq!(cpu.pc(), 0x8005);
            // V clear: BVS falls through
            assert_eq!(cpu.step(bus).unwrap(), 2);
            assert_eq!(cpu.pc(), 0x8007);
            // BVC +0 taken, same page
            assert_eq!(cpu.step(bus).unwrap(), 3);
            assert_eq!(cpu.pc(), 0x8009);
        });
    }
}
