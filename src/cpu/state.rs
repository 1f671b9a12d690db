/*!
state.rs - 6502 architectural state (registers + flags) and inline helpers.

Overview
========
`CpuState` owns every architecturally visible register. It excludes bus logic,
decode/dispatch and cycle accounting; those live in `dispatch`, `addressing`,
`cycles` and `bus`.

Invariant: bit 5 of the status register is hardwired high. Every path that
writes the status byte (`set_status`, `assign_flag`, `clear_flag_bit`) keeps it
set.

6502 Status Register Bit Layout
===============================
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED (always reads as 1)
  B = BREAK (set in the pushed copy by PHP/BRK; clear for IRQ/NMI)
  D = DECIMAL (stored and pushed, but ADC/SBC ignore it on the NES CPU)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY
*/

/// Processor status flag bit masks.
pub const CARRY: u8 = 0b0000_0001;
pub const ZERO: u8 = 0b0000_0010;
pub const IRQ_DISABLE: u8 = 0b0000_0100;
pub const DECIMAL: u8 = 0b0000_1000;
pub const BREAK: u8 = 0b0001_0000;
pub const UNUSED: u8 = 0b0010_0000;
pub const OVERFLOW: u8 = 0b0100_0000;
pub const NEGATIVE: u8 = 0b1000_0000;

/// Status pattern after power-on / reset: I, B and the unused bit.
pub const RESET_STATUS: u8 = IRQ_DISABLE | BREAK | UNUSED;

/// Stack pointer after power-on / reset.
pub const RESET_SP: u8 = 0xFD;

/// Base address of the stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Interrupt vector locations (little-endian words).
pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    status: u8,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: RESET_SP,
            pc: 0x0000,
            status: RESET_STATUS,
        }
    }
}

impl CpuState {
    // ---------------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------------

    /// Power-on state with PC = 0 (the caller loads the entry point).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a state from raw register values. Bit 5 is forced high.
    pub fn from_raw(a: u8, x: u8, y: u8, sp: u8, pc: u16, status: u8) -> Self {
        Self {
            a,
            x,
            y,
            sp,
            pc,
            status: status | UNUSED,
        }
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------
    #[inline]
    pub fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    pub fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    pub fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    pub fn status(&self) -> u8 {
        self.status
    }

    // ---------------------------------------------------------------------
    // Mutators
    // ---------------------------------------------------------------------
    #[inline]
    pub fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    pub fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    pub fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    pub fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    pub fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    /// Replace the status byte; bit 5 stays set.
    #[inline]
    pub fn set_status(&mut self, v: u8) {
        self.status = v | UNUSED;
    }

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }

    // ---------------------------------------------------------------------
    // Flag Operations
    // ---------------------------------------------------------------------

    #[inline]
    pub fn is_flag_set(&self, mask: u8) -> bool {
        (self.status & mask) != 0
    }

    #[inline]
    pub fn set_flag_bit(&mut self, mask: u8) {
        self.status |= mask;
    }

    #[inline]
    pub fn clear_flag_bit(&mut self, mask: u8) {
        self.status = (self.status & !mask) | UNUSED;
    }

    #[inline]
    pub fn assign_flag(&mut self, mask: u8, value: bool) {
        if value {
            self.set_flag_bit(mask);
        } else {
            self.clear_flag_bit(mask);
        }
    }

    #[inline]
    pub fn carry(&self) -> bool {
        self.is_flag_set(CARRY)
    }
    #[inline]
    pub fn zero(&self) -> bool {
        self.is_flag_set(ZERO)
    }
    #[inline]
    pub fn irq_disable(&self) -> bool {
        self.is_flag_set(IRQ_DISABLE)
    }
    #[inline]
    pub fn decimal(&self) -> bool {
        self.is_flag_set(DECIMAL)
    }
    #[inline]
    pub fn break_flag(&self) -> bool {
        self.is_flag_set(BREAK)
    }
    #[inline]
    pub fn overflow(&self) -> bool {
        self.is_flag_set(OVERFLOW)
    }
    #[inline]
    pub fn negative(&self) -> bool {
        self.is_flag_set(NEGATIVE)
    }

    // ---------------------------------------------------------------------
    // Reset
    // ---------------------------------------------------------------------

    /// Return registers to the reset pattern and start at `entry`.
    pub fn reset_to(&mut self, entry: u16) {
        *self = Self::default();
        self.pc = entry;
    }
}
