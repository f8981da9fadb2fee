use pinocchio::{error::ProgramError, ProgramResult};
use pinocchio_log::log;

/// Custom error codes surfaced as `ProgramError::Custom(code)`.
///
/// The numeric values are part of the wire contract with clients and must
/// not be reordered.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardError {
    /// Destination holds no lamports at creation time
    DestinationNotFunded = 0,
    /// Destination is owned by a token program
    DestinationIsTokenAccount = 1,
    /// Quarantine is owned by a token program
    QuarantineIsTokenAccount = 2,
    /// Transfer target does not match the stored record; covers both the
    /// destination (Execute) and the quarantine (Quarantine) slot
    InvalidDestination = 3,
    /// Forward-side token account is not ATA(forward, mint)
    InvalidSourceTokenAccount = 4,
    /// Target-side token account is not ATA(target, mint)
    InvalidDestinationTokenAccount = 5,
    /// Create invoked against a record that already exists
    AlreadyInitialized = 6,
    /// Supplied address or bump does not match the derivation
    AddressDerivationMismatch = 7,
    /// Quarantine holds no lamports at creation time
    QuarantineNotFunded = 8,
    /// Signer is not, or did not sign as, the stored authority
    UnauthorizedQuarantine = 9,
    /// Trailing token accounts are not a whole number of triples
    InvalidAccountCount = 10,
}

impl From<ForwardError> for ProgramError {
    fn from(e: ForwardError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl TryFrom<u32> for ForwardError {
    type Error = ProgramError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ForwardError::DestinationNotFunded),
            1 => Ok(ForwardError::DestinationIsTokenAccount),
            2 => Ok(ForwardError::QuarantineIsTokenAccount),
            3 => Ok(ForwardError::InvalidDestination),
            4 => Ok(ForwardError::InvalidSourceTokenAccount),
            5 => Ok(ForwardError::InvalidDestinationTokenAccount),
            6 => Ok(ForwardError::AlreadyInitialized),
            7 => Ok(ForwardError::AddressDerivationMismatch),
            8 => Ok(ForwardError::QuarantineNotFunded),
            9 => Ok(ForwardError::UnauthorizedQuarantine),
            10 => Ok(ForwardError::InvalidAccountCount),
            _ => Err(ProgramError::InvalidArgument),
        }
    }
}

/// Returns `error` when `condition` does not hold, logging which requirement
/// failed so the cause shows up in the transaction logs.
#[inline(always)]
pub fn require(requirement: &str, condition: bool, error: impl Into<ProgramError>) -> ProgramResult {
    if condition {
        Ok(())
    } else {
        log!("{} - failed", requirement);
        Err(error.into())
    }
}
