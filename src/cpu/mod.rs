/*!
cpu::mod - Public façade for the 6502 CPU core.

```text
    state.rs        - Architectural state (registers, flags) + reset pattern.
    regs.rs         - `CpuRegs` trait the execution helpers are generic over.
    addressing.rs   - Addressing modes and operand resolution.
    table.rs        - Static 256-entry opcode decode table.
    cycles.rs       - Page-cross / branch / interrupt cycle rules.
    execute.rs      - Instruction semantic helpers (ALU, stack, RMW, branch).
    dispatch/       - Single-step orchestrator and opcode family handlers.
    core/           - `Cpu` façade owning `CpuState` and its `CoreConfig`.
```

Usage:
```no_run
use rp2a03::{Bus, CartridgeImage, Cpu};
use rp2a03::apu::ApuRegisterFile;
use rp2a03::ppu::PpuRegisterFile;

# fn demo(cart: &CartridgeImage) -> rp2a03::Result<()> {
let (mut ppu, mut apu) = (PpuRegisterFile::new(), ApuRegisterFile::new());
let mut bus = Bus::new(cart, &mut ppu, &mut apu);
let mut cpu = Cpu::new();
cpu.reset(&mut bus)?;
cpu.step(&mut bus)?;
# Ok(())
# }
```
*/

pub mod addressing;
pub mod core;
pub mod cycles;
pub(crate) mod dispatch;
pub(crate) mod execute;
pub mod regs;
pub mod state;
pub mod table;

pub use crate::cpu::addressing::{AddressingMode, Operand};
pub use crate::cpu::core::Cpu;
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
pub use crate::cpu::table::{Instruction, Operation, decode};
