/*!
table.rs - Static opcode decode table.

Each of the 256 opcode bytes maps to `Option<Instruction>`. `Some` entries are
the 151 documented 6502 opcodes; `None` entries are illegal on this core and
make `step` fail before touching any state.

An `Instruction` carries:
- `operation`: what to do (exhaustively matched by the dispatcher)
- `mode`: how to find the operand
- `cycles`: base cycle count
- `page_penalty`: whether a page-crossing index adds one cycle (reads only)
*/

use crate::cpu::addressing::AddressingMode;

/// The 56 documented 6502 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Operation {
    pub const fn mnemonic(self) -> &'static str {
        use Operation::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub operation: Operation,
    pub mode: AddressingMode,
    pub cycles: u8,
    pub page_penalty: bool,
}

/// Look up an opcode byte.
#[inline]
pub fn decode(opcode: u8) -> Option<Instruction> {
    OPCODES[opcode as usize]
}

pub static OPCODES: [Option<Instruction>; 256] = build_table();

const fn fixed(operation: Operation, mode: AddressingMode, cycles: u8) -> Option<Instruction> {
    Some(Instruction {
        operation,
        mode,
        cycles,
        page_penalty: false,
    })
}

/// Entry that pays +1 when its indexed operand crosses a page.
const fn read(operation: Operation, mode: AddressingMode, cycles: u8) -> Option<Instruction> {
    Some(Instruction {
        operation,
        mode,
        cycles,
        page_penalty: true,
    })
}

const fn build_table() -> [Option<Instruction>; 256] {
    use AddressingMode::*;
    use Operation::*;

    let mut t: [Option<Instruction>; 256] = [None; 256];

    // Loads
    t[0xA9] = fixed(Lda, Immediate, 2);
    t[0xA5] = fixed(Lda, ZeroPage, 3);
    t[0xB5] = fixed(Lda, ZeroPageX, 4);
    t[0xAD] = fixed(Lda, Absolute, 4);
    t[0xBD] = read(Lda, AbsoluteX, 4);
    t[0xB9] = read(Lda, AbsoluteY, 4);
    t[0xA1] = fixed(Lda, IndexedIndirect, 6);
    t[0xB1] = read(Lda, IndirectIndexed, 5);

    t[0xA2] = fixed(Ldx, Immediate, 2);
    t[0xA6] = fixed(Ldx, ZeroPage, 3);
    t[0xB6] = fixed(Ldx, ZeroPageY, 4);
    t[0xAE] = fixed(Ldx, Absolute, 4);
    t[0xBE] = read(Ldx, AbsoluteY, 4);

    t[0xA0] = fixed(Ldy, Immediate, 2);
    t[0xA4] = fixed(Ldy, ZeroPage, 3);
    t[0xB4] = fixed(Ldy, ZeroPageX, 4);
    t[0xAC] = fixed(Ldy, Absolute, 4);
    t[0xBC] = read(Ldy, AbsoluteX, 4);

    // Stores
    t[0x85] = fixed(Sta, ZeroPage, 3);
    t[0x95] = fixed(Sta, ZeroPageX, 4);
    t[0x8D] = fixed(Sta, Absolute, 4);
    t[0x9D] = fixed(Sta, AbsoluteX, 5);
    t[0x99] = fixed(Sta, AbsoluteY, 5);
    t[0x81] = fixed(Sta, IndexedIndirect, 6);
    t[0x91] = fixed(Sta, IndirectIndexed, 6);

    t[0x86] = fixed(Stx, ZeroPage, 3);
    t[0x96] = fixed(Stx, ZeroPageY, 4);
    t[0x8E] = fixed(Stx, Absolute, 4);

    t[0x84] = fixed(Sty, ZeroPage, 3);
    t[0x94] = fixed(Sty, ZeroPageX, 4);
    t[0x8C] = fixed(Sty, Absolute, 4);

    // Transfers
    t[0xAA] = fixed(Tax, Implied, 2);
    t[0xA8] = fixed(Tay, Implied, 2);
    t[0xBA] = fixed(Tsx, Implied, 2);
    t[0x8A] = fixed(Txa, Implied, 2);
    t[0x9A] = fixed(Txs, Implied, 2);
    t[0x98] = fixed(Tya, Implied, 2);

    // Stack
    t[0x48] = fixed(Pha, Implied, 3);
    t[0x08] = fixed(Php, Implied, 3);
    t[0x68] = fixed(Pla, Implied, 4);
    t[0x28] = fixed(Plp, Implied, 4);

    // Logical
    t[0x29] = fixed(And, Immediate, 2);
    t[0x25] = fixed(And, ZeroPage, 3);
    t[0x35] = fixed(And, ZeroPageX, 4);
    t[0x2D] = fixed(And, Absolute, 4);
    t[0x3D] = read(And, AbsoluteX, 4);
    t[0x39] = read(And, AbsoluteY, 4);
    t[0x21] = fixed(And, IndexedIndirect, 6);
    t[0x31] = read(And, IndirectIndexed, 5);

    t[0x09] = fixed(Ora, Immediate, 2);
    t[0x05] = fixed(Ora, ZeroPage, 3);
    t[0x15] = fixed(Ora, ZeroPageX, 4);
    t[0x0D] = fixed(Ora, Absolute, 4);
    t[0x1D] = read(Ora, AbsoluteX, 4);
    t[0x19] = read(Ora, AbsoluteY, 4);
    t[0x01] = fixed(Ora, IndexedIndirect, 6);
    t[0x11] = read(Ora, IndirectIndexed, 5);

    t[0x49] = fixed(Eor, Immediate, 2);
    t[0x45] = fixed(Eor, ZeroPage, 3);
    t[0x55] = fixed(Eor, ZeroPageX, 4);
    t[0x4D] = fixed(Eor, Absolute, 4);
    t[0x5D] = read(Eor, AbsoluteX, 4);
    t[0x59] = read(Eor, AbsoluteY, 4);
    t[0x41] = fixed(Eor, IndexedIndirect, 6);
    t[0x51] = read(Eor, IndirectIndexed, 5);

    t[0x24] = fixed(Bit, ZeroPage, 3);
    t[0x2C] = fixed(Bit, Absolute, 4);

    // Arithmetic
    t[0x69] = fixed(Adc, Immediate, 2);
    t[0x65] = fixed(Adc, ZeroPage, 3);
    t[0x75] = fixed(Adc, ZeroPageX, 4);
    t[0x6D] = fixed(Adc, Absolute, 4);
    t[0x7D] = read(Adc, AbsoluteX, 4);
    t[0x79] = read(Adc, AbsoluteY, 4);
    t[0x61] = fixed(Adc, IndexedIndirect, 6);
    t[0x71] = read(Adc, IndirectIndexed, 5);

    t[0xE9] = fixed(Sbc, Immediate, 2);
    t[0xE5] = fixed(Sbc, ZeroPage, 3);
    t[0xF5] = fixed(Sbc, ZeroPageX, 4);
    t[0xED] = fixed(Sbc, Absolute, 4);
    t[0xFD] = read(Sbc, AbsoluteX, 4);
    t[0xF9] = read(Sbc, AbsoluteY, 4);
    t[0xE1] = fixed(Sbc, IndexedIndirect, 6);
    t[0xF1] = read(Sbc, IndirectIndexed, 5);

    // Compare
    t[0xC9] = fixed(Cmp, Immediate, 2);
    t[0xC5] = fixed(Cmp, ZeroPage, 3);
    t[0xD5] = fixed(Cmp, ZeroPageX, 4);
    t[0xCD] = fixed(Cmp, Absolute, 4);
    t[0xDD] = read(Cmp, AbsoluteX, 4);
    t[0xD9] = read(Cmp, AbsoluteY, 4);
    t[0xC1] = fixed(Cmp, IndexedIndirect, 6);
    t[0xD1] = read(Cmp, IndirectIndexed, 5);

    t[0xE0] = fixed(Cpx, Immediate, 2);
    t[0xE4] = fixed(Cpx, ZeroPage, 3);
    t[0xEC] = fixed(Cpx, Absolute, 4);

    t[0xC0] = fixed(Cpy, Immediate, 2);
    t[0xC4] = fixed(Cpy, ZeroPage, 3);
    t[0xCC] = fixed(Cpy, Absolute, 4);

    // Increment / decrement
    t[0xE6] = fixed(Inc, ZeroPage, 5);
    t[0xF6] = fixed(Inc, ZeroPageX, 6);
    t[0xEE] = fixed(Inc, Absolute, 6);
    t[0xFE] = fixed(Inc, AbsoluteX, 7);

    t[0xC6] = fixed(Dec, ZeroPage, 5);
    t[0xD6] = fixed(Dec, ZeroPageX, 6);
    t[0xCE] = fixed(Dec, Absolute, 6);
    t[0xDE] = fixed(Dec, AbsoluteX, 7);

    t[0xE8] = fixed(Inx, Implied, 2);
    t[0xC8] = fixed(Iny, Implied, 2);
    t[0xCA] = fixed(Dex, Implied, 2);
    t[0x88] = fixed(Dey, Implied, 2);

    // Shifts / rotates
    t[0x0A] = fixed(Asl, Accumulator, 2);
    t[0x06] = fixed(Asl, ZeroPage, 5);
    t[0x16] = fixed(Asl, ZeroPageX, 6);
    t[0x0E] = fixed(Asl, Absolute, 6);
    t[0x1E] = fixed(Asl, AbsoluteX, 7);

    t[0x4A] = fixed(Lsr, Accumulator, 2);
    t[0x46] = fixed(Lsr, ZeroPage, 5);
    t[0x56] = fixed(Lsr, ZeroPageX, 6);
    t[0x4E] = fixed(Lsr, Absolute, 6);
    t[0x5E] = fixed(Lsr, AbsoluteX, 7);

    t[0x2A] = fixed(Rol, Accumulator, 2);
    t[0x26] = fixed(Rol, ZeroPage, 5);
    t[0x36] = fixed(Rol, ZeroPageX, 6);
    t[0x2E] = fixed(Rol, Absolute, 6);
    t[0x3E] = fixed(Rol, AbsoluteX, 7);

    t[0x6A] = fixed(Ror, Accumulator, 2);
    t[0x66] = fixed(Ror, ZeroPage, 5);
    t[0x76] = fixed(Ror, ZeroPageX, 6);
    t[0x6E] = fixed(Ror, Absolute, 6);
    t[0x7E] = fixed(Ror, AbsoluteX, 7);

    // Control flow
    t[0x4C] = fixed(Jmp, Absolute, 3);
    t[0x6C] = fixed(Jmp, Indirect, 5);
    t[0x20] = fixed(Jsr, Absolute, 6);
    t[0x60] = fixed(Rts, Implied, 6);
    t[0x40] = fixed(Rti, Implied, 6);
    t[0x00] = fixed(Brk, Implied, 7);

    // Branches
    t[0x10] = fixed(Bpl, Relative, 2);
    t[0x30] = fixed(Bmi, Relative, 2);
    t[0x50] = fixed(Bvc, Relative, 2);
    t[0x70] = fixed(Bvs, Relative, 2);
    t[0x90] = fixed(Bcc, Relative, 2);
    t[0xB0] = fixed(Bcs, Relative, 2);
    t[0xD0] = fixed(Bne, Relative, 2);
    t[0xF0] = fixed(Beq, Relative, 2);

    // Flags
    t[0x18] = fixed(Clc, Implied, 2);
    t[0x38] = fixed(Sec, Implied, 2);
    t[0x58] = fixed(Cli, Implied, 2);
    t[0x78] = fixed(Sei, Implied, 2);
    t[0xB8] = fixed(Clv, Implied, 2);
    t[0xD8] = fixed(Cld, Implied, 2);
    t[0xF8] = fixed(Sed, Implied, 2);

    t[0xEA] = fixed(Nop, Implied, 2);

    t
}
