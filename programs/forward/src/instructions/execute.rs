use pinocchio::{AccountView, Address, ProgramResult, error::ProgramError};

use crate::config::KnownPrograms;
use crate::errors::{require, ForwardError};
use crate::transfer::forward_assets;
use crate::validation::{check_writable, load_forward, TokenLegs};

// Account context for the Execute instruction
//
// [forward (w), destination (w), (payer, system, token, ata program, [mint, forward ata, destination ata]*)?]
//
// Anyone may execute; funds can only ever reach the stored destination.
pub struct ExecuteAccounts<'a> {
    pub forward: &'a AccountView,
    pub destination: &'a AccountView,
    pub tokens: Option<TokenLegs<'a>>,
}

impl<'a> TryFrom<&'a [AccountView]> for ExecuteAccounts<'a> {
    type Error = ProgramError;

    fn try_from(accounts: &'a [AccountView]) -> Result<Self, Self::Error> {
        let [forward, destination, trailing @ ..] = accounts else {
            return Err(ProgramError::NotEnoughAccountKeys);
        };

        let tokens = TokenLegs::parse(trailing)?;

        check_writable(forward, "Forward account is writable")?;
        check_writable(destination, "Destination is writable")?;

        Ok(Self {
            forward,
            destination,
            tokens,
        })
    }
}


pub struct ExecuteInstruction<'a> {
    pub accounts: ExecuteAccounts<'a>,
}

impl<'a> TryFrom<(&'a [AccountView], &'a [u8])> for ExecuteInstruction<'a> {
    type Error = ProgramError;

    fn try_from(
        (accounts, data): (&'a [AccountView], &'a [u8]),
    ) -> Result<Self, Self::Error> {
        if !data.is_empty() {
            return Err(ProgramError::InvalidInstructionData);
        }

        let accounts = ExecuteAccounts::try_from(accounts)?;

        Ok(Self { accounts })
    }
}


// INSTRUCTION HANDLER

impl<'a> ExecuteInstruction<'a> {

    pub fn handler(&self, program_id: &Address, programs: &KnownPrograms) -> ProgramResult {
        let forward = load_forward(self.accounts.forward, program_id)?;

        require(
            "Destination matches forward record",
            self.accounts.destination.address() == &forward.destination,
            ForwardError::InvalidDestination,
        )?;

        if let Some(tokens) = &self.accounts.tokens {
            tokens.validate(programs)?;
        }

        forward_assets(
            self.accounts.forward,
            &forward,
            self.accounts.destination,
            self.accounts.tokens.as_ref(),
            programs,
        )
    }
}
