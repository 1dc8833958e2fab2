//! Two-pass assembler for a small 8086 subset.
//!
//! Source lines are tokenized, given addresses (pass 1, [`locate`]) and then
//! resolved and encoded (pass 2, [`encode`]). Nothing here touches the file
//! system; see the `x86asm` binary for that.

pub mod encode;
pub mod error;
pub mod label;
pub mod listing;
pub mod literal;
pub mod locate;
pub mod parser;

use error::Diag;
use label::Labels;
use parser::Line;

#[derive(Debug)]
pub struct Assembly {
    pub lines: Vec<Line>,
    pub labels: Labels,
    /// Pass 1 diagnostics followed by pass 2 diagnostics.
    pub diags: Vec<Diag>,
}

pub fn assemble<S: AsRef<str>>(source: &[S]) -> Assembly {
    let located = locate::assign_addresses(parser::tokenize(source));
    let mut lines = located.lines;
    let mut diags = located.diags;
    diags.extend(encode::encode(&mut lines, &located.labels, located.origin));
    Assembly {
        lines,
        labels: located.labels,
        diags,
    }
}

impl Assembly {
    /// Raw object byte stream.
    pub fn object(&self) -> Vec<u8> {
        self.lines.iter().flat_map(|line| line.code.iter().copied()).collect()
    }

    /// One upper-hex line per line that emitted code.
    pub fn object_hex(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter(|line| !line.code.is_empty())
            .map(|line| listing::hex(&line.code))
            .collect()
    }

    pub fn listing(&self) -> Vec<String> {
        let mut out = listing::header();
        out.extend(self.lines.iter().map(Line::render));
        out
    }

    pub fn messages(&self) -> Vec<String> {
        self.diags.iter().map(|diag| diag.to_string()).collect()
    }

    pub fn has_error(&self) -> bool {
        error::has_error(&self.diags)
    }
}
