//! Moves everything a forward PDA holds to a single target wallet.
//!
//! Token legs run first, in account-list order, then the native balance above
//! the rent-exempt floor. Each leg is independent: an empty or missing
//! forward-side token account is skipped without affecting the others.

use pinocchio::{
    AccountView, ProgramResult, cpi::Signer, error::ProgramError,
    sysvars::{Sysvar, rent::Rent}
};
use pinocchio_associated_token_account::instructions::Create;
use pinocchio_log::log;
use pinocchio_token::{instructions::TransferChecked, state::{Mint, TokenAccount}};

use crate::config::KnownPrograms;
use crate::derivation::associated_token_address;
use crate::errors::{require, ForwardError};
use crate::state::Forward;
use crate::validation::{check_writable, TokenLegs};

/// Sweeps every token leg and then the spare native balance from
/// `forward_account` to `target`.
pub fn forward_assets(
    forward_account: &AccountView,
    forward: &Forward,
    target: &AccountView,
    tokens: Option<&TokenLegs>,
    programs: &KnownPrograms,
) -> ProgramResult {
    if let Some(legs) = tokens {
        for triple in legs.triples() {
            forward_token(forward_account, forward, target, legs, triple, programs)?;
        }
    }

    forward_native(forward_account, target)
}

/// Transfers the full balance of one `[mint, forward ATA, target ATA]` triple.
pub fn forward_token(
    forward_account: &AccountView,
    forward: &Forward,
    target: &AccountView,
    legs: &TokenLegs,
    triple: &[AccountView],
    programs: &KnownPrograms,
) -> ProgramResult {
    let [mint, source, target_ata] = triple else {
        return Err(ForwardError::InvalidAccountCount.into());
    };

    require(
        "Source token account is the forward's ATA",
        source.address() == &associated_token_address(forward_account.address(), mint.address(), programs),
        ForwardError::InvalidSourceTokenAccount,
    )?;
    require(
        "Destination token account is the target's ATA",
        target_ata.address() == &associated_token_address(target.address(), mint.address(), programs),
        ForwardError::InvalidDestinationTokenAccount,
    )?;
    check_writable(source, "Source token account is writable")?;
    check_writable(target_ata, "Destination token account is writable")?;

    // Nothing was ever deposited for this mint
    if source.is_data_empty() {
        return Ok(());
    }

    let amount = TokenAccount::from_account_view(source)?.amount();
    if amount == 0 {
        return Ok(());
    }

    if target_ata.is_data_empty() {
        Create {
            funding_account: legs.payer,
            account: target_ata,
            wallet: target,
            mint,
            system_program: legs.system_program,
            token_program: legs.token_program,
        }
        .invoke()?;
    }

    let decimals = Mint::from_account_view(mint)?.decimals();
    let seeds = forward.signer_seeds();

    TransferChecked {
        from: source,
        mint,
        to: target_ata,
        authority: forward_account,
        amount,
        decimals,
    }
    .invoke_signed(&[Signer::from(&seeds)])?;

    log!("Forwarded {} token units", amount);

    Ok(())
}

/// Moves the lamports above the rent-exempt minimum straight to `target`.
pub fn forward_native(forward_account: &AccountView, target: &AccountView) -> ProgramResult {
    let floor = Rent::get()?.try_minimum_balance(forward_account.data_len())?;
    let amount = transferable_lamports(forward_account.lamports(), floor);
    if amount == 0 {
        return Ok(());
    }

    let credited = target
        .lamports()
        .checked_add(amount)
        .ok_or(ProgramError::ArithmeticOverflow)?;
    let remaining = forward_account
        .lamports()
        .checked_sub(amount)
        .ok_or(ProgramError::ArithmeticOverflow)?;

    forward_account.set_lamports(remaining);
    target.set_lamports(credited);

    log!("Forwarded {} lamports", amount);

    Ok(())
}

#[inline(always)]
pub fn transferable_lamports(balance: u64, rent_exempt_floor: u64) -> u64 {
    balance.saturating_sub(rent_exempt_floor)
}
