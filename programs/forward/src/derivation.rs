//! Deterministic address derivation for forward PDAs and associated token
//! accounts.
//!
//! Clients call [`forward_address`] to learn where to deposit and which bump
//! to pass to Create; the program calls the same functions to cross-check
//! whatever the caller supplied.

use pinocchio::Address;

use crate::config::KnownPrograms;
use crate::state::Forward;

/// Derives the forward PDA and its canonical bump for `(destination, id)`.
///
/// The bump is the first value, searching down from 255, for which the
/// seeds hash off the ed25519 curve.
#[inline]
pub fn forward_address(destination: &Address, id: u32, program_id: &Address) -> (Address, u8) {
    Address::find_program_address(
        &[Forward::SEED_PREFIX, destination.as_ref(), &id.to_le_bytes()],
        program_id,
    )
}

/// Re-derives the PDA from the record's own seeds and stored bump and
/// compares it with `address`.
#[inline]
pub fn is_forward_address(forward: &Forward, address: &Address, program_id: &Address) -> bool {
    Address::create_program_address(
        &[
            Forward::SEED_PREFIX,
            forward.destination.as_ref(),
            &forward.id,
            &[forward.bump],
        ],
        program_id,
    )
    .is_ok_and(|derived| &derived == address)
}

/// Associated token account of `wallet` for `mint` under the configured
/// token and ATA programs.
#[inline]
pub fn associated_token_address(wallet: &Address, mint: &Address, programs: &KnownPrograms) -> Address {
    Address::find_program_address(
        &[wallet.as_ref(), programs.token.as_ref(), mint.as_ref()],
        &programs.associated_token,
    )
    .0
}
