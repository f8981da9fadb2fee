use bytemuck::{Pod, Zeroable};
use pinocchio::{cpi::Seed, error::ProgramError, Address};


// The forward PDA: a routing account whose balances are swept to
// `destination` on Execute, or to `quarantine` when the authority intervenes.
//
// PDA seeds: ["forward", destination, id (u32 le bytes)]
//
// Every field has alignment 1, so the repr(C) layout carries no padding and is
// byte-for-byte the Borsh encoding of
// `{ id: u32, destination: [u8; 32], quarantine: [u8; 32], authority: [u8; 32], bump: u8 }`.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Forward {
    // Caller-chosen identifier, little-endian; lets one destination own many forwards
    pub id: [u8; 4],
    // Where Execute sends funds; never changes after Create
    pub destination: Address,
    // Where Quarantine sends funds; never changes after Create
    pub quarantine: Address,
    // Payer of Create, the only key allowed to quarantine
    pub authority: Address,
    // Canonical bump, stored so later instructions can re-derive cheaply
    pub bump: u8,
}

const _: () = assert!(Forward::LEN == 4 + 32 + 32 + 32 + 1);

impl Forward {
    // Seed prefix for PDA derivation
    pub const SEED_PREFIX: &'static [u8] = b"forward";
    pub const LEN: usize = core::mem::size_of::<Forward>();

    pub fn new(
        id: u32,
        destination: Address,
        quarantine: Address,
        authority: Address,
        bump: u8,
    ) -> Self {
        Self {
            id: id.to_le_bytes(),
            destination,
            quarantine,
            authority,
            bump,
        }
    }

    #[inline(always)]
    pub fn id(&self) -> u32 {
        u32::from_le_bytes(self.id)
    }

    // Load immutable reference from account data
    #[inline(always)]
    pub fn load(bytes: &[u8]) -> Result<&Self, ProgramError> {
        bytemuck::try_from_bytes(bytes).map_err(|_| ProgramError::InvalidAccountData)
    }

    // Load mutable reference from account data
    #[inline(always)]
    pub fn load_mut(bytes: &mut [u8]) -> Result<&mut Self, ProgramError> {
        bytemuck::try_from_bytes_mut(bytes).map_err(|_| ProgramError::InvalidAccountData)
    }

    /// Seeds (bump included) that let the program sign for this forward.
    #[inline(always)]
    pub fn signer_seeds(&self) -> [Seed<'_>; 4] {
        [
            Seed::from(Self::SEED_PREFIX),
            Seed::from(self.destination.as_array()),
            Seed::from(&self.id),
            Seed::from(core::slice::from_ref(&self.bump)),
        ]
    }
}
