#![cfg_attr(not(test), no_std)]

use pinocchio::{
    AccountView,
    Address,
    ProgramResult,
    error::ProgramError,
    address,
    no_allocator,
    nostd_panic_handler,
    program_entrypoint
};

pub mod config;
pub mod derivation;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod transfer;
pub mod validation;

pub use config::KnownPrograms;
pub use errors::ForwardError;

use instructions::{
    CreateForwardInstruction,
    ExecuteInstruction,
    QuarantineInstruction,
    Instruction
};

address::declare_id!("9jDe81Kqxc21Sk72yAycw9KC4ojbr6Hxk5waTxzvH6bE");

program_entrypoint!(process_instruction);
no_allocator!();
nostd_panic_handler!();

pub fn process_instruction(
    program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {

    // Verify correct program ID
    if program_id != &crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    process(program_id, accounts, instruction_data, &KnownPrograms::MAINNET)
}

/// Decodes and runs one instruction against an explicit set of well-known
/// program identifiers.
pub fn process(
    program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
    programs: &KnownPrograms,
) -> ProgramResult {

    // Split discriminator from instruction data
    let (discriminator, data) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    match Instruction::try_from(discriminator)? {
        Instruction::Create => {
            let ix = CreateForwardInstruction::try_from((accounts, data))?;
            ix.handler(program_id, programs)
        }
        Instruction::Execute => {
            let ix = ExecuteInstruction::try_from((accounts, data))?;
            ix.handler(program_id, programs)
        }
        Instruction::Quarantine => {
            let ix = QuarantineInstruction::try_from((accounts, data))?;
            ix.handler(program_id, programs)
        }
    }
}
