pub mod create;
pub mod execute;
pub mod quarantine;

pub use create::*;
pub use execute::*;
pub use quarantine::*;

use pinocchio::error::ProgramError;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Create = 0,
    Execute = 1,
    Quarantine = 2,
}

impl TryFrom<&u8> for Instruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(Instruction::Create),
            1 => Ok(Instruction::Execute),
            2 => Ok(Instruction::Quarantine),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}
