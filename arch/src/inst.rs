use crate::{
    op::{modrm, Opcode, EXT_MUL, MOD_REG},
    reg::Reg,
};

use color_print::cformat;

/// Fully resolved statement, ready to be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst {
    /// dst, src
    MOV(Reg, Reg),
    /// dst, src
    OR(Reg, Reg),
    MUL(Reg),
    JS(i8),
    JP(i8),
    DB(u8),
    DW(u16),
}

impl Inst {
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Inst::MOV(rd, rs) => vec![Opcode::MOV, modrm(MOD_REG, rs.code(), rd.code())],
            Inst::OR(rd, rs) => vec![Opcode::OR, modrm(MOD_REG, rs.code(), rd.code())],
            Inst::MUL(rs) => vec![Opcode::MUL, modrm(MOD_REG, EXT_MUL, rs.code())],
            Inst::JS(rel) => vec![Opcode::JS, *rel as u8],
            Inst::JP(rel) => vec![Opcode::JP, *rel as u8],
            Inst::DB(val) => vec![*val],
            Inst::DW(val) => val.to_le_bytes().to_vec(),
        }
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        macro_rules! opfmt {
            ($name:expr, $a:expr, $b:expr) => {
                cformat!("<red>{:<4}</><blue>{:<4}{:<8}</>", $name, $a, $b)
            };
        }
        match self {
            Inst::MOV(rd, rs) => opfmt!("mov", format!("{rd},"), rs),
            Inst::OR(rd, rs) => opfmt!("or", format!("{rd},"), rs),
            Inst::MUL(rs) => opfmt!("mul", rs, ""),
            Inst::JS(rel) => opfmt!("js", "", cformat!("<yellow>{:+}</>", rel)),
            Inst::JP(rel) => opfmt!("jp", "", cformat!("<yellow>{:+}</>", rel)),
            Inst::DB(val) => opfmt!("db", "", cformat!("<yellow>0x{:02X}</>", val)),
            Inst::DW(val) => opfmt!("dw", "", cformat!("<yellow>0x{:04X}</>", val)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_inst {
        ($($name:ident: $inst:expr => $bytes:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = $inst;
                    assert_eq!(inst.to_bytes(), $bytes.to_vec());
                }
            )*
        }
    }

    test_inst! {
        test_mov_al_bl: Inst::MOV(Reg::AL, Reg::BL) => [0x88, 0xD8],
        test_mov_bh_ah: Inst::MOV(Reg::BH, Reg::AH) => [0x88, 0xE7],
        test_or_cl_dl: Inst::OR(Reg::CL, Reg::DL) => [0x08, 0xD1],
        test_mul_al: Inst::MUL(Reg::AL) => [0xF6, 0xE0],
        test_mul_dh: Inst::MUL(Reg::DH) => [0xF6, 0xE6],
        test_js_back: Inst::JS(-3) => [0x78, 0xFD],
        test_jp_fwd: Inst::JP(4) => [0x7A, 0x04],
        test_db: Inst::DB(0x05) => [0x05],
        test_dw: Inst::DW(0x1234) => [0x34, 0x12],
    }
}
