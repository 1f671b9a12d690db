/*!
compare.rs - CMP / CPX / CPY

C = register >= operand (unsigned); Z/N from the wrapped difference. The
register itself is not modified.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{compare, read_operand};
use crate::cpu::regs::CpuRegs;

pub(crate) fn cmp<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    compare(cpu, cpu.a(), v);
}

pub(crate) fn cpx<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    compare(cpu, cpu.x(), v);
}

pub(crate) fn cpy<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    compare(cpu, cpu.y(), v);
}

#[cfg(test)]
mod tests {
    use crate::test_utils::with_cpu;

    #[test]
    fn cmp_equal_greater_less() {
        // LDA #$40 ; CMP #$40 ; CMP #$30 ; CMP #$50
        with_cpu(&[0xA9, 0x40, 0xC9, 0x40, 0xC9, 0x30, 0xC9, 0x50], |cpu, bus| {
            cpu.step(bus).unwrap();

            cpu.step(bus).unwrap();
            assert!(cpu.state().zero() && cpu.state().carry());

            cpu.step(bus).unwrap();
            assert!(!cpu.state().zero() && cpu.state().carry());

            cpu.step(bus).unwrap();
            assert!(!cpu.state().carry());
            assert!(cpu.state().negative());
            assert_eq!(cpu.a(), 0x40);
        });
    }

    #[test]
    fn cpx_cpy_memory() {
        // LDX #$10 ; LDY #$20 ; CPX $00 ; CPY $0001
        with_cpu(&[0xA2, 0x10, 0xA0, 0x20, 0xE4, 0x00, 0xCC, 0x01, 0x00], |cpu, bus| {
            bus.write(0x0000, 0x10);
            bus.write(0x0001, 0x21);
            cpu.step(bus).unwrap();
            cpu.step(bus).unwrap();
            assert_eq!(cpu.step(bus).unwrap(), 3);
            assert!(cpu.state().zero());
            assert_eq!(cpu.step(bus).unwrap(), 4);
            assert!(!cpu.state().carry());
            assert!(cpu.state().negative());
        });
    }
}
