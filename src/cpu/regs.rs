/*!
regs.rs - CpuRegs trait: the register + flag surface used by instruction
semantics and dispatch.

The trait deliberately leaves out bus access, stack and instruction fetch.
Those stay explicit at call sites via `&mut Bus` so handlers never hold a
borrow of the bus through the register file.

Implemented by `CpuState`. Execution helpers are written as
`fn op<C: CpuRegs>(cpu: &mut C, ...)` so they can be unit tested against a
bare state without a bus.
*/

use crate::cpu::state::{BREAK, CARRY, CpuState, NEGATIVE, OVERFLOW, UNUSED, ZERO};

pub trait CpuRegs {
    // ---------------------------------------------------------------------
    // Read accessors
    // ---------------------------------------------------------------------
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn sp(&self) -> u8;
    fn pc(&self) -> u16;
    fn status(&self) -> u8;

    // ---------------------------------------------------------------------
    // Mutators
    // ---------------------------------------------------------------------
    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_sp(&mut self, v: u8);
    fn set_pc(&mut self, v: u16);
    /// Must keep bit 5 set.
    fn set_status(&mut self, v: u8);

    /// Advance PC by `delta` (wrapping at 16 bits).
    fn advance_pc(&mut self, delta: u16);

    #[inline]
    fn advance_pc_one(&mut self) {
        self.advance_pc(1);
    }

    // ---------------------------------------------------------------------
    // Flag operations
    // ---------------------------------------------------------------------

    fn is_flag_set(&self, mask: u8) -> bool;

    fn assign_flag(&mut self, mask: u8, value: bool);

    /// ZERO = (result == 0), NEGATIVE = bit 7 of result.
    #[inline]
    fn update_zn(&mut self, result: u8) {
        self.assign_flag(ZERO, result == 0);
        self.assign_flag(NEGATIVE, (result & 0x80) != 0);
    }

    #[inline]
    fn update_carry(&mut self, carry: bool) {
        self.assign_flag(CARRY, carry);
    }

    #[inline]
    fn update_overflow(&mut self, overflow: bool) {
        self.assign_flag(OVERFLOW, overflow);
    }

    /// Status byte as pushed on the stack.
    /// - UNUSED forced set
    /// - BREAK set for PHP/BRK, clear for IRQ/NMI
    #[inline]
    fn compose_status_for_push(&self, set_break: bool) -> u8 {
        let v = self.status() | UNUSED;
        if set_break { v | BREAK } else { v & !BREAK }
    }
}

impl CpuRegs for CpuState {
    #[inline]
    fn a(&self) -> u8 {
        CpuState::a(self)
    }
    #[inline]
    fn x(&self) -> u8 {
        CpuState::x(self)
    }
    #[inline]
    fn y(&self) -> u8 {
        CpuState::y(self)
    }
    #[inline]
    fn sp(&self) -> u8 {
        CpuState::sp(self)
    }
    #[inline]
    fn pc(&self) -> u16 {
        CpuState::pc(self)
    }
    #[inline]
    fn status(&self) -> u8 {
        CpuState::status(self)
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        CpuState::set_a(self, v);
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        CpuState::set_x(self, v);
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        CpuState::set_y(self, v);
    }
    #[inline]
    fn set_sp(&mut self, v: u8) {
        CpuState::set_sp(self, v);
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        CpuState::set_pc(self, v);
    }
    #[inline]
    fn set_status(&mut self, v: u8) {
        CpuState::set_status(self, v);
    }

    #[inline]
    fn advance_pc(&mut self, delta: u16) {
        CpuState::advance_pc(self, delta);
    }

    #[inline]
    fn is_flag_set(&self, mask: u8) -> bool {
        CpuState::is_flag_set(self, mask)
    }

    #[inline]
    fn assign_flag(&mut self, mask: u8, value: bool) {
        CpuState::assign_flag(self, mask, value);
    }
}
