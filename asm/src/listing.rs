use arch::op::OpKind;
use color_print::cformat;

use crate::parser::Line;

pub fn header() -> Vec<String> {
    let rule = "=".repeat(95);
    vec![
        rule.clone(),
        format!("[LINE]  LOC   MACHINE CODE     {:<10}{}", "LABEL", "SOURCE"),
        rule,
    ]
}

pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

impl Line {
    /// Lines that neither emitted code nor move the counter show no address.
    fn shows_address(&self) -> bool {
        !self.code.is_empty()
            || matches!(
                self.kind(),
                Some(Ok(OpKind::ORG | OpKind::SEGMENT | OpKind::DB | OpKind::DW))
            )
    }

    pub fn render(&self) -> String {
        let loc = if self.shows_address() {
            format!("{:04X}", self.address)
        } else {
            String::new()
        };
        let label = match &self.label {
            Some(label) => format!("{}:", label),
            None => String::new(),
        };
        format!(
            "[{:<3}]  {:<4}  {:<13}  {:<10}  {}",
            self.no(),
            loc,
            hex(&self.code),
            label,
            self.raw()
        )
    }

    pub fn cformat(&self) -> String {
        let pc = if self.shows_address() {
            cformat!("<green>{:04X}</>", self.address)
        } else {
            " ".repeat(4)
        };
        let stmt = match &self.inst {
            Some(inst) => inst.cformat(),
            None => " ".repeat(16),
        };
        format!(
            "| {:>4} | {} | {:<8} | {} | {}",
            self.no(),
            pc,
            hex(&self.code),
            stmt,
            self.raw()
        )
    }
}
