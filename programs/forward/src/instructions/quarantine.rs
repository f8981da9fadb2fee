use pinocchio::{AccountView, Address, ProgramResult, error::ProgramError};
use pinocchio_log::log;

use crate::config::KnownPrograms;
use crate::errors::{require, ForwardError};
use crate::transfer::forward_assets;
use crate::validation::{check_writable, load_forward, TokenLegs};

// Account context for the Quarantine instruction
//
// Same shape as Execute with the stored authority appended to the fixed
// accounts; token targets are derived from the quarantine wallet.
pub struct QuarantineAccounts<'a> {
    pub forward: &'a AccountView,
    pub quarantine: &'a AccountView,
    // Must equal the record's authority and sign the transaction
    pub authority: &'a AccountView,
    pub tokens: Option<TokenLegs<'a>>,
}

impl<'a> TryFrom<&'a [AccountView]> for QuarantineAccounts<'a> {
    type Error = ProgramError;

    fn try_from(accounts: &'a [AccountView]) -> Result<Self, Self::Error> {
        let [forward, quarantine, authority, trailing @ ..] = accounts else {
            return Err(ProgramError::NotEnoughAccountKeys);
        };

        let tokens = TokenLegs::parse(trailing)?;

        check_writable(forward, "Forward account is writable")?;
        check_writable(quarantine, "Quarantine is writable")?;

        Ok(Self {
            forward,
            quarantine,
            authority,
            tokens,
        })
    }
}


pub struct QuarantineInstruction<'a> {
    pub accounts: QuarantineAccounts<'a>,
}

impl<'a> TryFrom<(&'a [AccountView], &'a [u8])> for QuarantineInstruction<'a> {
    type Error = ProgramError;

    fn try_from(
        (accounts, data): (&'a [AccountView], &'a [u8]),
    ) -> Result<Self, Self::Error> {
        if !data.is_empty() {
            return Err(ProgramError::InvalidInstructionData);
        }

        let accounts = QuarantineAccounts::try_from(accounts)?;

        Ok(Self { accounts })
    }
}


// INSTRUCTION HANDLER

impl<'a> QuarantineInstruction<'a> {

    pub fn handler(&self, program_id: &Address, programs: &KnownPrograms) -> ProgramResult {
        let forward = load_forward(self.accounts.forward, program_id)?;

        // A matching key that did not sign is as unauthorized as a wrong key
        require(
            "Authority signed and matches forward record",
            self.accounts.authority.is_signer() && self.accounts.authority.address() == &forward.authority,
            ForwardError::UnauthorizedQuarantine,
        )?;
        // Same code as a wrong destination on Execute
        require(
            "Quarantine matches forward record",
            self.accounts.quarantine.address() == &forward.quarantine,
            ForwardError::InvalidDestination,
        )?;

        if let Some(tokens) = &self.accounts.tokens {
            tokens.validate(programs)?;
        }

        log!("Quarantining forward {}", forward.id());

        forward_assets(
            self.accounts.forward,
            &forward,
            self.accounts.quarantine,
            self.accounts.tokens.as_ref(),
            programs,
        )
    }
}
