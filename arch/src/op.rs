use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum OpKind {
    // Instructions
    MOV,
    OR,
    MUL,
    JS,
    JP,

    // Data
    DB,
    DW,

    // Directives
    ORG,
    SEGMENT,
    ENDS,
    END,
}

impl OpKind {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Undefined Op: {s}")),
        }
    }
}

/// Operand shape of a mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// `op r/m8, r8`
    RegReg,
    /// `op r/m8`
    Reg,
    /// `op rel8`
    Rel,
    /// `op imm`
    Data,
    /// Assembler directive, never emits bytes.
    Directive,
}

impl OpKind {
    pub fn form(&self) -> Form {
        use OpKind::*;
        match self {
            MOV | OR => Form::RegReg,
            MUL => Form::Reg,
            JS | JP => Form::Rel,
            DB | DW => Form::Data,
            ORG | SEGMENT | ENDS | END => Form::Directive,
        }
    }

    /// Bytes reserved at the location counter.
    pub fn size(&self) -> u16 {
        use OpKind::*;
        match self {
            MOV | OR | MUL | JS | JP => 2,
            DB => 1,
            DW => 2,
            ORG | SEGMENT | ENDS | END => 0,
        }
    }
}

// ----------------------------------------------------------------------------

pub struct Opcode;

impl Opcode {
    pub const OR: u8 = 0x08;
    pub const JS: u8 = 0x78;
    pub const JP: u8 = 0x7A;
    pub const MOV: u8 = 0x88;
    pub const MUL: u8 = 0xF6;
}

/// `mod` field value for register-direct operands.
pub const MOD_REG: u8 = 0b11;

/// `/4` extension selecting MUL within the 0xF6 group.
pub const EXT_MUL: u8 = 4;

pub fn modrm(md: u8, reg: u8, rm: u8) -> u8 {
    ((md & 0b11) << 6) | ((reg & 0b111) << 3) | (rm & 0b111)
}
