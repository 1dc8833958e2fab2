use color_print::cprintln;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid literal: `{0}`")]
    InvalidLiteral(String),

    #[error("Undefined symbol: `{0}`")]
    UndefinedSymbol(String),

    #[error("More operands required by `{0}`")]
    MissingOperand(String),

    #[error("Unknown register: `{0}`, encoded as AL")]
    UnknownRegister(String),

    #[error("Unknown operation: `{0}`, no code generated")]
    UnknownMnemonic(String),

    #[error("Branch offset {0} does not fit in a byte, truncated")]
    OffsetOutOfRange(i32),

    #[error("Re-defined label: `{0}`, the value has been overridden")]
    RedefinedLabel(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to export symbols")]
    Export(#[from] serde_yaml::Error),
}

impl Error {
    /// Messages of the underlying sources, outermost first.
    pub fn causes(&self) -> Vec<String> {
        let mut causes = vec![];
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        causes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warn => write!(f, "warn"),
        }
    }
}

/// A diagnostic attached to a 1-based source line.
#[derive(Debug)]
pub struct Diag {
    pub line: usize,
    pub level: Level,
    pub error: Error,
}

impl Diag {
    pub fn error(line: usize, error: Error) -> Self {
        Diag {
            line,
            level: Level::Error,
            error,
        }
    }

    pub fn warn(line: usize, error: Error) -> Self {
        Diag {
            line,
            level: Level::Warn,
            error,
        }
    }

    /// Print with the file location and the offending source line.
    pub fn print(&self, file: &str, raw: &str) {
        match self.level {
            Level::Error => cprintln!("<red,bold>error</>: {}", self.error),
            Level::Warn => cprintln!("<yellow,bold>warn</>: {}", self.error),
        }
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, self.line);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", self.line, raw);
        cprintln!("      <blue>|</>");
    }
}

impl fmt::Display for Diag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.level, self.error)
    }
}

pub fn has_error(diags: &[Diag]) -> bool {
    diags.iter().any(|diag| diag.level == Level::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let diag = Diag::error(3, Error::UndefinedSymbol("UNKNOWN".to_string()));
        assert_eq!(diag.to_string(), "line 3: error: Undefined symbol: `UNKNOWN`");

        let diag = Diag::warn(7, Error::OffsetOutOfRange(-200));
        assert_eq!(
            diag.to_string(),
            "line 7: warn: Branch offset -200 does not fit in a byte, truncated"
        );
    }

    #[test]
    fn test_causes() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::FileOpen("program.asm".to_string(), io);
        assert_eq!(err.to_string(), "Failed to open file: program.asm");
        assert_eq!(err.causes(), vec!["no such file".to_string()]);
        assert!(Error::UndefinedSymbol("X".to_string()).causes().is_empty());
    }

    #[test]
    fn test_has_error() {
        let mut diags = vec![Diag::warn(1, Error::RedefinedLabel("L".to_string()))];
        assert!(!has_error(&diags));
        diags.push(Diag::error(2, Error::InvalidLiteral("1Z".to_string())));
        assert!(has_error(&diags));
    }
}
