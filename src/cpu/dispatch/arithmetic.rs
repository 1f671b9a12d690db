/*!
arithmetic.rs - ADC / SBC

Binary arithmetic only: the D flag is stored and pushed but never changes the
result. SBC is ADC of the operand's one's complement, so C acts as an
inverted borrow.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{self, read_operand};
use crate::cpu::regs::CpuRegs;

pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::adc(cpu, v);
}

pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::sbc(cpu, v);
}

#[cfg(test)]
mod tests {
    use crate::test_utils::with_cpu;

    #[test]
    fn adc_signed_overflow() {
        // CLC ; LDA #$50 ; ADC #$50
        with_cpu(&[0x18, 0xA9, 0x50, 0x69, 0x50], |cpu, bus| {
            for _ in 0..3 {
                cpu.step(bus).unwrap();
            }
            let s = cpu.state();
            assert_eq!(s.a(), 0xA0);
            assert!(s.negative());
            assert!(s.overflow());
            assert!(!s.carry());
            assert!(!s.zero());
        });
    }

    #[test]
    fn adc_carry_out_to_zero() {
        // CLC ; LDA #$FF ; ADC #$01
        with_cpu(&[0x18, 0xA9, 0xFF, 0x69, 0x01], |cpu, bus| {
            for _ in 0..3 {
                cpu.step(bus).unwrap();
            }
            let s = cpu.state();
            assert_eq!(s.a(), 0x00);
            assert!(s.carry());
            assert!(s.zero());
            assert!(!s.negative());
            assert!(!s.overflow());
        });
    }

    #[test]
    fn adc_uses_carry_in() {
        // SEC ; LDA #$01 ; ADC $10
        with_cpu(&[0x38, 0xA9, 0x01, 0x65, 0x10], |cpu, bus| {
            bus.write(0x0010, 0x01);
            cpu.step(bus).unwrap();
            cpu.step(bus).unwrap();
            assert_eq!(cpu.step(bus).unwrap(), 3);
            assert_eq!(cpu.a(), 0x03);
        });
    }

    #[test]
    fn decimal_mode_is_ignored() {
        // SED ; CLC ; LDA #$19 ; ADC #$01
        with_cpu(&[0xF8, 0x18, 0xA9, 0x19, 0x69, 0x01], |cpu, bus| {
            for _ in 0..4 {
                cpu.step(bus).unwrap();
            }
            assert!(cpu.state().decimal());
            assert_eq!(cpu.a(), 0x1A);
        });
    }

    #[test]
    fn sbc_borrow_and_overflow() {
        // SEC ; LDA #$80 ; SBC #$01
        with_cpu(&[0x38, 0xA9, 0x80, 0xE9, 0x01], |cpu, bus| {
            for _ in 0..3 {
                cpu.step(bus).unwrap();
            }
            let s = cpu.state();
            assert_eq!(s.a(), 0x7F);
            assert!(s.carry());
            assert!(s.overflow());
            assert!(!s.negative());
        });
    }

    #[test]
    fn sbc_without_carry_subtracts_one_more() {
        // CLC ; LDA #$05 ; SBC #$02
        with_cpu(&[0x18, 0xA9, 0x05, 0xE9, 0x02], |cpu, bus| {
            for _ in 0..3 {
                cpu.step(bus).unwrap();
            }
            assert_eq!(cpu.a(), 0x02);
            assert!(cpu.state().carry());
        });
    }
}
