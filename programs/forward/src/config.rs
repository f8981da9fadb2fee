use pinocchio::{AccountView, Address};
use solana_address::address;

// Well-known program identifiers the validator compares caller-supplied
// accounts against.
//
// Handlers never read these from constants directly; the entrypoint passes
// `KnownPrograms::MAINNET` and tests may substitute their own set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnownPrograms {
    pub system: Address,
    // Token program used for transfers and ATA derivation
    pub token: Address,
    // Only consulted when rejecting token accounts as routing endpoints
    pub token_2022: Address,
    pub associated_token: Address,
}

impl KnownPrograms {
    pub const MAINNET: Self = Self {
        system: address!("11111111111111111111111111111111"),
        token: address!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"),
        token_2022: address!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb"),
        associated_token: address!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"),
    };

    /// True when `account` belongs to either token program, i.e. it is a
    /// mint or token account rather than a plain wallet.
    #[inline(always)]
    pub fn owns_token_account(&self, account: &AccountView) -> bool {
        account.owned_by(&self.token) || account.owned_by(&self.token_2022)
    }
}

impl Default for KnownPrograms {
    fn default() -> Self {
        Self::MAINNET
    }
}
