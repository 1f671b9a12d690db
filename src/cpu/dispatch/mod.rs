/*!
dispatch - Orchestrator for a single 6502 CPU step (interrupts / decode / execute)

Overview
========
Coordinates a single CPU instruction step:
1. Services a pending NMI, then a maskable IRQ (line asserted and I clear).
   Interrupt entry is the whole step: 7 cycles, no opcode fetched.
2. Peeks the opcode at PC and decodes it through the static table. An
   undefined opcode fails with `CoreError::IllegalOpcode` before PC or any
   register moves.
3. Advances PC past the opcode, resolves the addressing mode and runs the
   operation through its family module.
4. Adds base cycles, the read page-cross penalty and branch extras, charges
   them to the bus cycle counter and returns the total.

Families
========
- load_store:   LDA LDX LDY STA STX STY
- logical:      AND ORA EOR BIT
- arithmetic:   ADC SBC
- compare:      CMP CPX CPY
- branches:     BPL BMI BVC BVS BCC BCS BNE BEQ
- rmw:          ASL LSR ROL ROR INC DEC
- control_flow: JMP JSR RTS RTI BRK
- misc:         transfers, stack, flag set/clear, register INC/DEC, NOP

`execute` matches `Operation` exhaustively, so adding an operation without a
handler does not compile.
*/

use log::{debug, trace, warn};

use crate::bus::Bus;
use crate::cpu::addressing::{Operand, resolve};
use crate::cpu::cycles::{INTERRUPT_CYCLES, page_penalty};
use crate::cpu::execute::{push_status_with_break, push_word};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{IRQ_DISABLE, IRQ_VECTOR, NMI_VECTOR};
use crate::cpu::table::{Operation, decode};
use crate::error::{CoreError, Result};

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

/// Execute one CPU step and return the cycles it consumed.
pub(crate) fn step<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>) -> Result<u8> {
    // 1. Non-maskable interrupt
    if bus.take_nmi() {
        debug!("NMI entry from PC {:#06X}", cpu.pc());
        service_interrupt(cpu, bus, NMI_VECTOR);
        bus.add_cycles(INTERRUPT_CYCLES);
        return Ok(INTERRUPT_CYCLES);
    }

    // 2. Maskable IRQ (level, gated by I)
    if bus.irq_line() && !cpu.is_flag_set(IRQ_DISABLE) {
        debug!("IRQ entry from PC {:#06X}", cpu.pc());
        service_interrupt(cpu, bus, IRQ_VECTOR);
        bus.add_cycles(INTERRUPT_CYCLES);
        return Ok(INTERRUPT_CYCLES);
    }

    // 3. Peek and decode; nothing has moved yet
    let pc = cpu.pc();
    let opcode = bus.read(pc);
    let Some(instruction) = decode(opcode) else {
        warn!("illegal opcode {:#04X} at PC {:#06X}", opcode, pc);
        return Err(CoreError::IllegalOpcode { opcode, pc });
    };

    // 4. Fetch operand and execute
    cpu.advance_pc_one();
    let operand = resolve(instruction.mode, cpu, bus);
    trace!(
        "{:04X}  {:02X}  {} {:?}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
        pc,
        opcode,
        instruction.operation,
        operand,
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.status(),
        cpu.sp()
    );
    let extra = execute(instruction.operation, operand, cpu, bus);

    let cycles = instruction.cycles
        + page_penalty(instruction.page_penalty, operand.page_crossed())
        + extra;
    bus.add_cycles(cycles);
    Ok(cycles)
}

/// Run one decoded operation. Returns the extra cycles owed by branches.
fn execute<C: CpuRegs>(op: Operation, operand: Operand, cpu: &mut C, bus: &mut Bus<'_>) -> u8 {
    use Operation::*;

    let mut extra = 0;
    match op {
        Lda => load_store::lda(cpu, bus, operand),
        Ldx => load_store::ldx(cpu, bus, operand),
        Ldy => load_store::ldy(cpu, bus, operand),
        Sta => load_store::sta(cpu, bus, operand),
        Stx => load_store::stx(cpu, bus, operand),
        Sty => load_store::sty(cpu, bus, operand),

        And => logical::and(cpu, bus, operand),
        Ora => logical::ora(cpu, bus, operand),
        Eor => logical::eor(cpu, bus, operand),
        Bit => logical::bit(cpu, bus, operand),

        Adc => arithmetic::adc(cpu, bus, operand),
        Sbc => arithmetic::sbc(cpu, bus, operand),

        Cmp => compare::cmp(cpu, bus, operand),
        Cpx => compare::cpx(cpu, bus, operand),
        Cpy => compare::cpy(cpu, bus, operand),

        Bpl => extra = branches::bpl(cpu, operand),
        Bmi => extra = branches::bmi(cpu, operand),
        Bvc => extra = branches::bvc(cpu, operand),
        Bvs => extra = branches::bvs(cpu, operand),
        Bcc => extra = branches::bcc(cpu, operand),
        Bcs => extra = branches::bcs(cpu, operand),
        Bne => extra = branches::bne(cpu, operand),
        Beq => extra = branches::beq(cpu, operand),

        Asl => rmw::asl(cpu, bus, operand),
        Lsr => rmw::lsr(cpu, bus, operand),
        Rol => rmw::rol(cpu, bus, operand),
        Ror => rmw::ror(cpu, bus, operand),
        Inc => rmw::inc(cpu, bus, operand),
        Dec => rmw::dec(cpu, bus, operand),

        Jmp => control_flow::jmp(cpu, operand),
        Jsr => control_flow::jsr(cpu, bus, operand),
        Rts => control_flow::rts(cpu, bus),
        Rti => control_flow::rti(cpu, bus),
        Brk => control_flow::brk(cpu, bus),

        Tax => misc::tax(cpu),
        Tay => misc::tay(cpu),
        Tsx => misc::tsx(cpu),
        Txa => misc::txa(cpu),
        Txs => misc::txs(cpu),
        Tya => misc::tya(cpu),
        Pha => misc::pha(cpu, bus),
        Php => misc::php(cpu, bus),
        Pla => misc::pla(cpu, bus),
        Plp => misc::plp(cpu, bus),
        Inx => misc::inx(cpu),
        Iny => misc::iny(cpu),
        Dex => misc::dex(cpu),
        Dey => misc::dey(cpu),
        Clc => misc::clc(cpu),
        Sec => misc::sec(cpu),
        Cli => misc::cli(cpu),
        Sei => misc::sei(cpu),
        Clv => misc::clv(cpu),
        Cld => misc::cld(cpu),
        Sed => misc::sed(cpu),
        Nop => {}
    }
    extra
}

/// Common interrupt entry sequence (push PC, status with Break=0; set I;
/// load vector).
pub(crate) fn service_interrupt<C: CpuRegs>(cpu: &mut C, bus: &mut Bus<'_>, vector_addr: u16) {
    let current_pc = cpu.pc();
    push_word(cpu, bus, current_pc);
    push_status_with_break(cpu, bus, false);
    cpu.assign_flag(IRQ_DISABLE, true);
    let new_pc = bus.read_word(vector_addr);
    cpu.set_pc(new_pc);
}
