use arch::op::OpKind;

use crate::{
    error::{Diag, Error},
    label::Labels,
    literal::parse_literal,
    parser::Line,
};

/// Result of address assignment.
#[derive(Debug)]
pub struct Located {
    pub lines: Vec<Line>,
    pub labels: Labels,
    /// Origin in effect at the end of the pass; code generation starts here.
    pub origin: u16,
    pub diags: Vec<Diag>,
}

pub fn assign_addresses(mut lines: Vec<Line>) -> Located {
    let mut labels = Labels::new();
    let mut diags = vec![];
    let mut pc: u16 = 0;
    let mut origin: u16 = 0;

    for line in lines.iter_mut() {
        let size = match line.kind() {
            None => 0,
            Some(Err(err)) => {
                diags.push(Diag::warn(line.no(), err));
                0
            }
            Some(Ok(OpKind::SEGMENT)) => {
                pc = 0;
                origin = 0;
                0
            }
            Some(Ok(OpKind::ORG)) => {
                match line.operand(0).and_then(parse_literal) {
                    Ok(value) => {
                        pc = value as u16;
                        origin = pc;
                    }
                    Err(err) => diags.push(Diag::error(line.no(), err)),
                }
                0
            }
            Some(Ok(kind)) => kind.size(),
        };

        line.address = pc;

        if let Some(label) = &line.label {
            if labels.define(label, pc, line.no()).is_some() {
                diags.push(Diag::warn(line.no(), Error::RedefinedLabel(label.clone())));
            }
        }

        pc = pc.wrapping_add(size);
    }

    Located {
        lines,
        labels,
        origin,
        diags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize;

    fn addresses(located: &Located) -> Vec<u16> {
        located.lines.iter().map(|line| line.address).collect()
    }

    #[test]
    fn test_sizes() {
        let located = assign_addresses(tokenize(&[
            "A: DB 1", "B: DW 2", "C: MOV AL,BL", "D: JS A", "E:", "", "F: END", "G: MUL CL",
        ]));
        assert_eq!(addresses(&located), vec![0, 1, 3, 5, 7, 7, 7, 7]);
        assert_eq!(located.labels.get_val("A"), Some(0));
        assert_eq!(located.labels.get_val("B"), Some(1));
        assert_eq!(located.labels.get_val("C"), Some(3));
        assert_eq!(located.labels.get_val("D"), Some(5));
        assert_eq!(located.labels.get_val("E"), Some(7));
        assert_eq!(located.labels.get_val("F"), Some(7));
        assert_eq!(located.labels.get_val("G"), Some(7));
        assert!(located.diags.is_empty());
    }

    #[test]
    fn test_org_and_segment() {
        let located = assign_addresses(tokenize(&[
            "ORG 100h", "X: DW 0", "SEGMENT", "Y: DB 0", "ORG 0x20", "Z: DB 0", "ENDS",
        ]));
        assert_eq!(
            addresses(&located),
            vec![0x100, 0x100, 0, 0, 0x20, 0x20, 0x21]
        );
        assert_eq!(located.labels.get_val("X"), Some(0x100));
        assert_eq!(located.labels.get_val("Y"), Some(0));
        assert_eq!(located.labels.get_val("Z"), Some(0x20));
        assert_eq!(located.origin, 0x20);
    }

    #[test]
    fn test_bad_org_keeps_counter() {
        let located = assign_addresses(tokenize(&["DB 1", "ORG 1G", "L: DB 2", "ORG"]));
        assert_eq!(addresses(&located), vec![0, 1, 1, 2]);
        assert_eq!(located.labels.get_val("L"), Some(1));
        assert_eq!(located.origin, 0);
        assert_eq!(located.diags.len(), 2);
        assert!(matches!(&located.diags[0].error, Error::InvalidLiteral(s) if s == "1G"));
        assert_eq!(located.diags[0].line, 2);
        assert!(matches!(&located.diags[1].error, Error::MissingOperand(s) if s == "ORG"));
    }

    #[test]
    fn test_unknown_mnemonic_reserves_nothing() {
        let located = assign_addresses(tokenize(&["NOP", "L: HLT", "DB 1"]));
        assert_eq!(addresses(&located), vec![0, 0, 0]);
        assert_eq!(located.labels.get_val("L"), Some(0));
        assert_eq!(located.diags.len(), 2);
        assert!(matches!(&located.diags[1].error, Error::UnknownMnemonic(s) if s == "HLT"));
    }

    #[test]
    fn test_redefined_label() {
        let located = assign_addresses(tokenize(&["L: DB 1", "L: DB 2"]));
        assert_eq!(located.labels.get_val("L"), Some(1));
        assert_eq!(located.diags.len(), 1);
        assert_eq!(located.diags[0].line, 2);
        assert!(matches!(&located.diags[0].error, Error::RedefinedLabel(s) if s == "L"));
    }

    #[test]
    fn test_forward_label_known_after_pass() {
        let located = assign_addresses(tokenize(&["JS AHEAD", "MOV AL,BL", "AHEAD: END"]));
        assert_eq!(located.labels.get_val("AHEAD"), Some(4));
    }
}
