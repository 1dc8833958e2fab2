use num_enum::IntoPrimitive;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// 8-bit general purpose registers, numbered as in the ModR/M `reg` field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Serialize,
    Deserialize,
    IntoPrimitive,
    EnumString,
    Display,
    Eq,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Reg {
    AL,
    CL,
    DL,
    BL,
    AH,
    CH,
    DH,
    BH,
}

impl Reg {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Unknown reg name: {s}")),
        }
    }

    pub fn code(self) -> u8 {
        self.into()
    }
}
