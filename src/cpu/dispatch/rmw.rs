/*!
rmw.rs - Shift / rotate / INC / DEC family

Covered Opcodes
---------------
Shifts / Rotates
  ASL: 0x0A (A), 0x06 (zp), 0x16 (zp,X), 0x0E (abs), 0x1E (abs,X)
  LSR: 0x4A (A), 0x46 (zp), 0x56 (zp,X), 0x4E (abs), 0x5E (abs,X)
  ROL: 0x2A (A), 0x26 (zp), 0x36 (zp,X), 0x2E (abs), 0x3E (abs,X)
  ROR: 0x6A (A), 0x66 (zp), 0x76 (zp,X), 0x6E (abs), 0x7E (abs,X)

Memory Increment / Decrement
  INC: 0xE6 (zp), 0xF6 (zp,X), 0xEE (abs), 0xFE (abs,X)
  DEC: 0xC6 (zp), 0xD6 (zp,X), 0xCE (abs), 0xDE (abs,X)

Memory forms do read -> dummy write (old value) -> write (new value) through
`execute::modify_operand`. Absolute,X forms never pay a page-cross cycle.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{self, modify_operand};
use crate::cpu::regs::CpuRegs;

pub(crate) fn asl<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    modify_operand(cpu, bus, operand, execute::asl);
}

pub(crate) fn lsr<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    modify_operand(cpu, bus, operand, execute::lsr);
}

pub(crate) fn rol<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    modify_operand(cpu, bus, operand, execute::rol);
}

pub(crate) fn ror<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    modify_operand(cpu, bus, operand, execute::ror);
}

pub(crate) fn inc<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    modify_operand(cpu, bus, operand, execute::inc);
}

pub(crate) fn dec<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    modify_operand(cpu, bus, operand, execute::dec);
}

#[cfg(test)]
mod tests {
    use crate::test_utils::with_cpu;

    #[test]
    fn asl_accumulator() {
        // LDA #$81 ; ASL A
        with_cpu(&[0xA9, 0x81, 0x0A], |cpu, bus| {
            cpu.step(bus).unwrap();
            assert_eq!(cpu.step(bus).unwrap(), 2);
            assert_eq!(cpu.a(), 0x02);
            assert!(cpu.state().carry());
            assert!(!cpu.state().negative());
        });
    }

    #[test]
    fn lsr_zero_page_to_zero() {
        // LSR $10
        with_cpu(&[0x46, 0x10], |cpu, bus| {
            bus.write(0x0010, 0x01);
            assert_eq!(cpu.step(bus).unwrap(), 5);
            assert_eq!(bus.read(0x0010), 0x00);
            assert!(cpu.state().carry());
            assert!(cpu.state().zero());
        });
    }

    #[test]
    fn ror_absolute_carries_in() {
        // SEC ; ROR $0300
        with_cpu(&[0x38, 0x6E, 0x00, 0x03], |cpu, bus| {
            bus.write(0x0300, 0x02);
            cpu.step(bus).unwrap();
            assert_eq!(cpu.step(bus).unwrap(), 6);
            assert_eq!(bus.read(0x0300), 0x81);
            assert!(!cpu.state().carry());
            assert!(cpu.state().negative());
        });
    }

    #[test]
    fn inc_abs_x_fixed_cost_across_page() {
        // LDX #$01 ; INC $02FF,X
        with_cpu(&[0xA2, 0x01, 0xFE, 0xFF, 0x02], |cpu, bus| {
            bus.write(0x0300, 0xFF);
            cpu.step(bus).unwrap();
            assert_eq!(cpu.step(bus).unwrap(), 7);
            assert_eq!(bus.read(0x0300), 0x00);
            assert!(cpu.state().zero());
        });
    }

    #[test]
    fn dec_zero_page_x() {
        // LDX #$01 ; DEC $FF,X -> $00
        with_cpu(&[0xA2, 0x01, 0xD6, 0xFF], |cpu, bus| {
            bus.write(0x0000, 0x00);
            cpu.step(bus).unwrap();
            assert_eq!(cpu.step(bus).unwrap(), 6);
            assert_eq!(bus.read(0x0000), 0xFF);
            assert!(cpu.state().negative());
        });
    }
}
