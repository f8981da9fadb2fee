use pinocchio::{error::ProgramError, AccountView, Address, ProgramResult};

use crate::config::KnownPrograms;
use crate::derivation::is_forward_address;
use crate::errors::{require, ForwardError};
use crate::state::Forward;

// payer, system program, token program, associated token program
pub const TOKEN_HEADER_LEN: usize = 4;
// mint, forward-side token account, target-side token account
pub const TOKEN_TRIPLE_LEN: usize = 3;


#[inline(always)]
pub fn check_signer(account: &AccountView, requirement: &str) -> ProgramResult {
    require(requirement, account.is_signer(), ProgramError::MissingRequiredSignature)
}

#[inline(always)]
pub fn check_writable(account: &AccountView, requirement: &str) -> ProgramResult {
    require(requirement, account.is_writable(), ProgramError::Immutable)
}

// Mismatch is IncorrectProgramId, never a custom code
#[inline(always)]
pub fn check_program(account: &AccountView, expected: &Address, requirement: &str) -> ProgramResult {
    require(requirement, account.address() == expected, ProgramError::IncorrectProgramId)
}

/// A routing endpoint (destination or quarantine) must already exist with a
/// balance and must be a wallet, not a token account.
pub fn check_routing_endpoint(
    account: &AccountView,
    programs: &KnownPrograms,
    not_funded: ForwardError,
    is_token_account: ForwardError,
) -> ProgramResult {
    require("Routing endpoint is funded", account.lamports() > 0, not_funded)?;

    require(
        "Routing endpoint is not a token account",
        !programs.owns_token_account(account),
        is_token_account,
    )
}

/// Reads the forward record after checking it belongs to this program and
/// sits at the address its own seeds derive to.
pub fn load_forward(forward_account: &AccountView, program_id: &Address) -> Result<Forward, ProgramError> {
    require(
        "Forward account is owned by program",
        forward_account.owned_by(program_id),
        ProgramError::IncorrectProgramId,
    )?;

    let forward = {
        let data = forward_account.try_borrow()?;
        *Forward::load(&data)?
    };

    require(
        "Forward address matches its seeds",
        is_forward_address(&forward, forward_account.address(), program_id),
        ForwardError::AddressDerivationMismatch,
    )?;

    Ok(forward)
}

/// Number of token triples implied by `trailing` accounts after an
/// instruction's fixed accounts.
///
/// `None` means native-only forwarding. Otherwise a full header and at least
/// one whole triple are required.
pub fn token_triple_count(trailing: usize) -> Result<Option<usize>, ProgramError> {
    if trailing == 0 {
        return Ok(None);
    }

    require(
        "Valid number of accounts",
        trailing >= TOKEN_HEADER_LEN + TOKEN_TRIPLE_LEN
            && (trailing - TOKEN_HEADER_LEN) % TOKEN_TRIPLE_LEN == 0,
        ForwardError::InvalidAccountCount,
    )?;

    Ok(Some((trailing - TOKEN_HEADER_LEN) / TOKEN_TRIPLE_LEN))
}


// Accounts needed to move SPL tokens, shared by Execute and Quarantine
pub struct TokenLegs<'a> {
    // Funds destination-side ATA creation
    pub payer: &'a AccountView,
    pub system_program: &'a AccountView,
    pub token_program: &'a AccountView,
    pub associated_token_program: &'a AccountView,
    // Repeating [mint, forward ATA, target ATA]
    pub triples: &'a [AccountView],
}

impl<'a> TokenLegs<'a> {
    /// Splits the trailing accounts into header and triples; `None` when the
    /// caller supplied no token accounts.
    pub fn parse(trailing: &'a [AccountView]) -> Result<Option<Self>, ProgramError> {
        if token_triple_count(trailing.len())?.is_none() {
            return Ok(None);
        }

        let [payer, system_program, token_program, associated_token_program, triples @ ..] = trailing
        else {
            return Err(ForwardError::InvalidAccountCount.into());
        };

        Ok(Some(Self {
            payer,
            system_program,
            token_program,
            associated_token_program,
            triples,
        }))
    }

    pub fn validate(&self, programs: &KnownPrograms) -> ProgramResult {
        check_signer(self.payer, "Payer is signer")?;
        check_writable(self.payer, "Payer is writable")?;
        check_program(self.system_program, &programs.system, "System program id is correct")?;
        check_program(self.token_program, &programs.token, "Token program id is correct")?;
        check_program(
            self.associated_token_program,
            &programs.associated_token,
            "Associated token program id is correct",
        )
    }

    #[inline(always)]
    pub fn triples(&self) -> impl Iterator<Item = &'a [AccountView]> {
        self.triples.chunks_exact(TOKEN_TRIPLE_LEN)
    }
}
