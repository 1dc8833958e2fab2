use arch::{
    inst::Inst,
    op::{Form, OpKind},
    reg::Reg,
};

use crate::{
    error::{Diag, Error},
    label::Labels,
    literal::parse_literal,
    parser::Line,
};

/// Resolves operands and generates code for every line, starting at `origin`.
///
/// Each line's `address` is overwritten with the counter seen here and its
/// `code` with the emitted bytes, so running this again on the same input
/// gives the same result.
pub fn encode(lines: &mut [Line], labels: &Labels, origin: u16) -> Vec<Diag> {
    let mut diags = vec![];
    let mut pc = origin;

    for line in lines.iter_mut() {
        let inst = match line.kind() {
            Some(Ok(kind)) => match kind.form() {
                Form::RegReg => {
                    let rd = reg(line, 0, &mut diags);
                    let rs = reg(line, 1, &mut diags);
                    Some(match kind {
                        OpKind::MOV => Inst::MOV(rd, rs),
                        _ => Inst::OR(rd, rs),
                    })
                }
                Form::Reg => Some(Inst::MUL(reg(line, 0, &mut diags))),
                Form::Rel => {
                    let rel = rel(line, labels, pc, &mut diags);
                    Some(match kind {
                        OpKind::JS => Inst::JS(rel),
                        _ => Inst::JP(rel),
                    })
                }
                Form::Data => match line.operand(0).and_then(|token| labels.resolve(token)) {
                    Ok(value) => Some(match kind {
                        OpKind::DB => Inst::DB(value as u8),
                        _ => Inst::DW(value),
                    }),
                    Err(err) => {
                        diags.push(Diag::error(line.no(), err));
                        None
                    }
                },
                Form::Directive => {
                    match kind {
                        // Already reported by address assignment
                        OpKind::ORG => {
                            if let Ok(value) = line.operand(0).and_then(parse_literal) {
                                pc = value as u16;
                            }
                        }
                        OpKind::SEGMENT => pc = 0,
                        _ => {}
                    }
                    None
                }
            },
            // Unknown mnemonics were reported by address assignment
            Some(Err(_)) | None => None,
        };

        line.address = pc;
        line.code = inst.as_ref().map(Inst::to_bytes).unwrap_or_default();
        line.inst = inst;
        pc = pc.wrapping_add(line.code.len() as u16);
    }

    diags
}

/// Register operand, AL when absent or unknown.
fn reg(line: &Line, idx: usize, diags: &mut Vec<Diag>) -> Reg {
    match line.operand(idx) {
        Ok(text) => match Reg::parse(text) {
            Ok(reg) => reg,
            Err(_) => {
                diags.push(Diag::warn(line.no(), Error::UnknownRegister(text.to_string())));
                Reg::AL
            }
        },
        Err(err) => {
            diags.push(Diag::error(line.no(), err));
            Reg::AL
        }
    }
}

/// Offset from the end of a two-byte branch at `pc`. Targets that cannot be
/// resolved count as address 0. Offsets are truncated to one byte.
fn rel(line: &Line, labels: &Labels, pc: u16, diags: &mut Vec<Diag>) -> i8 {
    let target = match line.operand(0).and_then(|token| labels.resolve(token)) {
        Ok(address) => address,
        Err(err) => {
            diags.push(Diag::error(line.no(), err));
            0
        }
    };
    let offset = target as i32 - (pc as i32 + 2);
    if i8::try_from(offset).is_err() {
        diags.push(Diag::warn(line.no(), Error::OffsetOutOfRange(offset)));
    }
    offset as i8
}
