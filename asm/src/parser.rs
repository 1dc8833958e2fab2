use arch::{inst::Inst, op::OpKind};

use crate::error::Error;

// ----------------------------------------------------------------------------
// Line

/// One source line and everything the two passes learn about it.
#[derive(Debug, Clone, Default)]
pub struct Line {
    no: usize,
    raw: String,
    pub label: Option<String>,
    pub mnemonic: Option<String>,
    pub operand1: Option<String>,
    pub operand2: Option<String>,
    pub address: u16,
    pub code: Vec<u8>,
    pub inst: Option<Inst>,
}

impl Line {
    /// Splits `label: MNEMONIC op1, op2 ; comment`. Every field is optional.
    pub fn parse(no: usize, raw: &str) -> Self {
        let mut line = Line {
            no,
            raw: raw.to_string(),
            ..Default::default()
        };

        let code = match raw.split_once(';') {
            Some((code, _comment)) => code,
            None => raw,
        };

        let mut words = code.split_whitespace().peekable();
        if let Some(label) = words.next_if(|word| word.ends_with(':')) {
            let label = &label[..label.len() - 1];
            if !label.is_empty() {
                line.label = Some(label.to_string());
            }
        }

        line.mnemonic = words.next().map(str::to_ascii_uppercase);

        // One operand field; `AL, BL` is glued back into `AL,BL`.
        // Anything after it is ignored.
        let mut field = words.next().unwrap_or_default().to_string();
        if field.ends_with(',') {
            if let Some(next) = words.next() {
                field.push_str(next);
            }
        }

        let mut operands = field
            .split(',')
            .map(|s| Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string));
        line.operand1 = operands.next().flatten();
        line.operand2 = operands.next().flatten();

        line
    }

    pub fn no(&self) -> usize {
        self.no
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// `None` for blank and label-only lines.
    pub fn kind(&self) -> Option<Result<OpKind, Error>> {
        self.mnemonic.as_ref().map(|mnemonic| {
            OpKind::parse(mnemonic).map_err(|_| Error::UnknownMnemonic(mnemonic.clone()))
        })
    }

    /// Operand by 0-based position.
    pub fn operand(&self, idx: usize) -> Result<&str, Error> {
        let operand = match idx {
            0 => &self.operand1,
            1 => &self.operand2,
            _ => &None,
        };
        operand
            .as_deref()
            .ok_or_else(|| Error::MissingOperand(self.mnemonic.clone().unwrap_or_default()))
    }
}

pub fn tokenize<S: AsRef<str>>(source: &[S]) -> Vec<Line> {
    source
        .iter()
        .enumerate()
        .map(|(idx, raw)| Line::parse(idx + 1, raw.as_ref()))
        .collect()
}
