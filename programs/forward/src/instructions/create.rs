use pinocchio::{
    AccountView, Address, ProgramResult, cpi::Signer, error::ProgramError,
    sysvars::{Sysvar, rent::Rent}
};
use pinocchio_log::log;
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};

use crate::config::KnownPrograms;
use crate::derivation::forward_address;
use crate::errors::{require, ForwardError};
use crate::state::Forward;
use crate::validation::{check_program, check_routing_endpoint, check_signer, check_writable};


// Account context for the Create instruction
//
// The payer funds the new forward PDA and becomes its quarantine authority.
pub struct CreateForwardAccounts<'a> {
    // The forward PDA (will be created)
    pub forward: &'a AccountView,

    // Where Execute will send funds
    pub destination: &'a AccountView,

    // Where Quarantine will send funds
    pub quarantine: &'a AccountView,

    pub payer: &'a AccountView,
    pub system_program: &'a AccountView,
}

impl<'a> TryFrom<&'a [AccountView]> for CreateForwardAccounts<'a> {
    type Error = ProgramError;

    fn try_from(accounts: &'a [AccountView]) -> Result<Self, Self::Error> {
        let [forward, destination, quarantine, payer, system_program, ..] = accounts else {
            return Err(ProgramError::NotEnoughAccountKeys);
        };

        check_signer(payer, "Payer is signer")?;
        check_writable(payer, "Payer is writable")?;
        check_writable(forward, "Forward account is writable")?;

        Ok(Self {
            forward,
            destination,
            quarantine,
            payer,
            system_program,
        })
    }
}


// Instruction data for Create: `id: u32 (le)`, `bump: u8`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreateForwardData {
    pub id: u32,
    pub bump: u8,
}

impl CreateForwardData {
    pub const LEN: usize = 5;
}

impl<'a> TryFrom<&'a [u8]> for CreateForwardData {
    type Error = ProgramError;

    fn try_from(data: &'a [u8]) -> Result<Self, Self::Error> {
        let [id0, id1, id2, id3, bump] = <[u8; Self::LEN]>::try_from(data)
            .map_err(|_| ProgramError::InvalidInstructionData)?;

        Ok(Self {
            id: u32::from_le_bytes([id0, id1, id2, id3]),
            bump,
        })
    }
}


pub struct CreateForwardInstruction<'a> {
    pub accounts: CreateForwardAccounts<'a>,
    pub data: CreateForwardData,
}

impl<'a> TryFrom<(&'a [AccountView], &'a [u8])> for CreateForwardInstruction<'a> {
    type Error = ProgramError;

    fn try_from(
        (accounts, data): (&'a [AccountView], &'a [u8]),
    ) -> Result<Self, Self::Error> {
        let accounts = CreateForwardAccounts::try_from(accounts)?;
        let data = CreateForwardData::try_from(data)?;

        Ok(Self { accounts, data })
    }
}


// INSTRUCTION HANDLER

impl<'a> CreateForwardInstruction<'a> {

    pub fn handler(&self, program_id: &Address, programs: &KnownPrograms) -> ProgramResult {
        let CreateForwardAccounts { forward, destination, quarantine, payer, system_program } =
            self.accounts;

        check_program(system_program, &programs.system, "System program id is correct")?;

        // 1: Refuse to overwrite an existing record
        require(
            "Forward account is uninitialized",
            !forward.owned_by(program_id) && forward.is_data_empty(),
            ForwardError::AlreadyInitialized,
        )?;

        // 2: Routing endpoints must be live wallets
        check_routing_endpoint(
            destination,
            programs,
            ForwardError::DestinationNotFunded,
            ForwardError::DestinationIsTokenAccount,
        )?;
        check_routing_endpoint(
            quarantine,
            programs,
            ForwardError::QuarantineNotFunded,
            ForwardError::QuarantineIsTokenAccount,
        )?;

        // 3: Address and bump must be the canonical derivation
        let (expected, canonical_bump) = forward_address(destination.address(), self.data.id, program_id);
        require(
            "Forward address and bump match derivation",
            forward.address() == &expected && self.data.bump == canonical_bump,
            ForwardError::AddressDerivationMismatch,
        )?;

        let record = Forward::new(
            self.data.id,
            *destination.address(),
            *quarantine.address(),
            *payer.address(),
            canonical_bump,
        );

        // 4: Create the PDA, keeping any lamports deposited ahead of time
        let seeds = record.signer_seeds();
        let signer = Signer::from(&seeds);

        let space = Forward::LEN;
        let rent_exempt = Rent::get()?.try_minimum_balance(space)?;
        let current = forward.lamports();

        if current == 0 {
            CreateAccount {
                from: payer,
                to: forward,
                lamports: rent_exempt,
                space: space as u64,
                owner: program_id,
            }
            .invoke_signed(&[signer])?;
        } else {
            let top_up = rent_exempt.saturating_sub(current);
            if top_up > 0 {
                Transfer {
                    from: payer,
                    to: forward,
                    lamports: top_up,
                }
                .invoke()?;
            }

            Allocate {
                account: forward,
                space: space as u64,
            }
            .invoke_signed(&[signer.clone()])?;

            Assign {
                account: forward,
                owner: program_id,
            }
            .invoke_signed(&[signer])?;
        }

        // 5: Write the record
        {
            let mut data = forward.try_borrow_mut()?;
            *Forward::load_mut(&mut data)? = record;
        }

        log!("Forward {} created", self.data.id);

        Ok(())
    }
}
