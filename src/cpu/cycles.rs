/*!
cycles.rs - Dynamic cycle adjustments for the 6502 CPU core.

Base cycle counts live in the opcode table (`table.rs`). This module only
knows the rules that add cycles at run time:

  - Read instructions using Absolute,X / Absolute,Y / (zp),Y pay +1 when the
    index addition crosses a page. Stores and read-modify-write instructions
    have fixed cost; the table marks which entries pay.
  - Taken branches pay +1, and +1 more when the target lies on a different
    page than the instruction following the branch.
  - Interrupt entry (NMI / IRQ) is a lump sum of 7 cycles.
*/

/// Cycles charged for NMI / IRQ entry.
pub(crate) const INTERRUPT_CYCLES: u8 = 7;

/// True when `a` and `b` live on different 256-byte pages.
#[inline]
pub(crate) fn crosses_page(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Extra cycle owed by a read instruction whose operand crossed a page.
#[inline]
pub(crate) fn page_penalty(applies: bool, crossed: bool) -> u8 {
    u8::from(applies && crossed)
}

/// Extra cycles for a branch: 0 when not taken, 1 when taken on the same
/// page, 2 when the target is on another page.
#[inline]
pub(crate) fn branch_cycles(taken: bool, from: u16, to: u16) -> u8 {
    match (taken, crosses_page(from, to)) {
        (false, _) => 0,
        (true, false) => 1,
        (true, true) => 2,
    }
}
