/*!
control_flow.rs - JMP / JSR / RTS / RTI / BRK

  JMP abs        (0x4C)
  JMP (ind)      (0x6C)  (page-wrap quirk applied during operand resolution)
  JSR abs        (0x20)
  RTS            (0x60)
  RTI            (0x40)
  BRK            (0x00)

Behavior Details
================
- JSR pushes (PC - 1), high byte first; RTS pulls it and adds 1.
- RTI pulls status (B ignored, bit 5 forced) then PC, with no +1.
- BRK skips its padding byte, pushes that PC and status with B set, sets I
  and loads PC from $FFFE/$FFFF. Execution continues in the handler.
*/

use log::debug;

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{plp, pop_word, push_status_with_break, push_word};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{IRQ_DISABLE, IRQ_VECTOR};

pub(crate) fn jmp<C: CpuRegs>(cpu: &mut C, operand: Operand) {
    if let Some(target) = operand.address() {
        cpu.set_pc(target);
    }
}

pub(crate) fn jsr<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    let Some(target) = operand.address() else {
        return;
    };
    // After operand fetch PC points to next instruction; push (PC - 1)
    let ret = cpu.pc().wrapping_sub(1);
    push_word(cpu, bus, ret);
    cpu.set_pc(target);
}

pub(crate) fn rts<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) {
    let ret = pop_word(cpu, bus);
    cpu.set_pc(ret.wrapping_add(1));
}

pub(crate) fn rti<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) {
    plp(cpu, bus);
    let pc = pop_word(cpu, bus);
    cpu.set_pc(pc);
}

pub(crate) fn brk<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) {
    cpu.advance_pc_one();
    let ret = cpu.pc();
    debug!("BRK, return address {:#06X}", ret);
    push_word(cpu, bus, ret);
    push_status_with_break(cpu, bus, true);
    cpu.assign_flag(IRQ_DISABLE, true);
    let target = bus.read_word(IRQ_VECTOR);
    cpu.set_pc(target);
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{BREAK, UNUSED};
    use crate::test_utils::{IRQ_HANDLER, with_cpu};

    #[test]
    fn jmp_absolute() {
        with_cpu(&[0x4C, 0x34, 0x92], |cpu, bus| {
            assert_eq!(cpu.step(bus).unwrap(), 3);
            assert_eq!(cpu.pc(), 0x9234);
        });
    }

    #[test]
    fn jmp_indirect_page_wrap_quirk() {
        // JMP ($02FF): low from $02FF, high from $0200
        with_cpu(&[0x6C, 0xFF, 0x02], |cpu, bus| {
            bus.write(0x02FF, 0x00);
            bus.write(0x0200, 0x90);
            bus.write(0x0300, 0x80);
            assert_eq!(cpu.step(bus).unwrap(), 5);
            assert_eq!(cpu.pc(), 0x9000);
        });
    }

    #[test]
    fn jsr_rts_round_trip() {
        // $8000: JSR $8005 ; NOP ; NOP ; $8005: RTS
        with_cpu(&[0x20, 0x05, 0x80, 0xEA, 0xEA, 0x60], |cpu, bus| {
            assert_eq!(cpu.step(bus).unwrap(), 6);
            assert_eq!(cpu.pc(), 0x8005);
            // Return address - 1 = $8002, high byte pushed first
            assert_eq!(bus.read(0x01FD), 0x80);
            assert_eq!(bus.read(0x01FC), 0x02);
            assert_eq!(cpu.step(bus).unwrap(), 6);
            assert_eq!(cpu.pc(), 0x8003);
            assert_eq!(cpu.sp(), 0xFD);
        });
    }

    #[test]
    fn brk_pushes_pc_plus_two_and_break() {
        with_cpu(&[0x00, 0xEA], |cpu, bus| {
            let sp = cpu.sp();
            assert_eq!(cpu.step(bus).unwrap(), 7);
            assert_eq!(cpu.pc(), IRQ_HANDLER);
            assert!(cpu.state().irq_disable());
            assert_eq!(cpu.sp(), sp.wrapping_sub(3));
            assert_eq!(bus.read(0x01FD), 0x80);
            assert_eq!(bus.read(0x01FC), 0x02);
            let pushed = bus.read(0x01FB);
            assert_ne!(pushed & BREAK, 0);
            assert_ne!(pushed & UNUSED, 0);
        });
    }

    #[test]
    fn brk_then_rti_resumes_after_padding() {
        // CLI ; BRK ; pad ; NOP. RTI is run from RAM.
        with_cpu(&[0x58, 0x00, 0xFF, 0xEA], |cpu, bus| {
            cpu.step(bus).unwrap();
            cpu.step(bus).unwrap();
            assert_eq!(cpu.pc(), IRQ_HANDLER);
            cpu.state_mut().set_pc(0x0400);
            bus.write(0x0400, 0x40);
            assert_eq!(cpu.step(bus).unwrap(), 6);
            assert_eq!(cpu.pc(), 0x8003);
            // I was clear when BRK pushed status
            assert!(!cpu.state().irq_disable());
            assert!(!cpu.state().break_flag());
        });
    }
}
