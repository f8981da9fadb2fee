// Common test utilities shared across the forward integration tests
#![allow(dead_code)]

use borsh::BorshDeserialize;
use litesvm::LiteSVM;
use litesvm_token::{
    CreateAssociatedTokenAccount, CreateMint, MintTo,
    spl_token::state::Account as TokenAccount,
    get_spl_account,
};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;
use solana_system_interface::program::ID as SYSTEM_PROGRAM_ID;

// Program ID matching declare_id!("9jDe81Kqxc21Sk72yAycw9KC4ojbr6Hxk5waTxzvH6bE")
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(solana_forward::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;

// Seed prefix must match Forward::SEED_PREFIX
pub const FORWARD_SEED_PREFIX: &[u8] = b"forward";

// Size of the on-chain record
pub const FORWARD_LEN: usize = 101;

pub const DECIMALS: u8 = 6;

// Instruction discriminators (must match Instruction enum in instructions/mod.rs)
pub const CREATE_DISCRIMINATOR: u8 = 0;
pub const EXECUTE_DISCRIMINATOR: u8 = 1;
pub const QUARANTINE_DISCRIMINATOR: u8 = 2;


// Borsh view of the forward record, used to read back what Create wrote
#[derive(BorshDeserialize, Debug, PartialEq, Eq)]
pub struct ForwardRecord {
    pub id: u32,
    pub destination: [u8; 32],
    pub quarantine: [u8; 32],
    pub authority: [u8; 32],
    pub bump: u8,
}


// ======================== SVM HELPERS ========================

// Load the compiled program binary into LiteSVM
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../target/deploy/solana_forward.so");
    svm.add_program(PROGRAM_ID, program_bytes);
    svm
}

// Create a new keypair and fund it with SOL via airdrop
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn lamports(svm: &LiteSVM, address: &Pubkey) -> u64 {
    svm.get_account(address).map(|a| a.lamports).unwrap_or(0)
}

pub fn token_balance(svm: &LiteSVM, ata: &Pubkey) -> u64 {
    let account: TokenAccount = get_spl_account(svm, ata)
        .expect("Failed to read token account");
    account.amount
}

pub fn read_forward(svm: &LiteSVM, forward: &Pubkey) -> ForwardRecord {
    let account = svm.get_account(forward).expect("Forward account should exist");
    assert_eq!(account.owner, PROGRAM_ID);
    ForwardRecord::try_from_slice(&account.data).expect("Forward record should decode")
}

// Derive the forward PDA using seeds: ["forward", destination, id (le)]
pub fn derive_forward_pda(destination: &Pubkey, id: u32) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[FORWARD_SEED_PREFIX, destination.as_ref(), &id.to_le_bytes()],
        &PROGRAM_ID,
    )
}

pub fn create_mint(svm: &mut LiteSVM, payer: &Keypair) -> Pubkey {
    CreateMint::new(svm, payer)
        .authority(&payer.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Failed to create mint")
}

// Create `owner`'s ATA for `mint` and mint `amount` into it
pub fn deposit_tokens(
    svm: &mut LiteSVM,
    payer: &Keypair,
    mint: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Pubkey {
    let ata = CreateAssociatedTokenAccount::new(svm, payer, mint)
        .owner(owner)
        .send()
        .expect("Failed to create ATA");

    if amount > 0 {
        MintTo::new(svm, payer, mint, &ata, amount)
            .owner(payer)
            .send()
            .expect("Failed to mint tokens");
    }
    ata
}


// ======================== INSTRUCTION BUILDERS ========================

// Layout: discriminator(1) + id(4, le) + bump(1)
pub fn build_create_data(id: u32, bump: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(6);
    data.push(CREATE_DISCRIMINATOR);
    data.extend_from_slice(&id.to_le_bytes());
    data.push(bump);
    data
}

pub fn create_ix(
    forward: &Pubkey,
    destination: &Pubkey,
    quarantine: &Pubkey,
    payer: &Pubkey,
    id: u32,
    bump: u8,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*forward, false),                  // forward PDA (writable)
            AccountMeta::new_readonly(*destination, false),     // destination
            AccountMeta::new_readonly(*quarantine, false),      // quarantine
            AccountMeta::new(*payer, true),                     // payer / authority (signer, writable)
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false), // system_program
        ],
        data: build_create_data(id, bump),
    }
}

// Header that enables token forwarding
pub fn token_header(payer: &Pubkey) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
    ]
}

// [mint, forward ATA, target ATA], both ATAs derived canonically
pub fn token_triple(mint: &Pubkey, forward: &Pubkey, target: &Pubkey) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new(get_associated_token_address(forward, mint), false),
        AccountMeta::new(get_associated_token_address(target, mint), false),
    ]
}

pub fn execute_ix(forward: &Pubkey, destination: &Pubkey, trailing: Vec<AccountMeta>) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(*forward, false),
        AccountMeta::new(*destination, false),
    ];
    accounts.extend(trailing);

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data: vec![EXECUTE_DISCRIMINATOR],
    }
}

pub fn quarantine_ix(
    forward: &Pubkey,
    quarantine: &Pubkey,
    authority: &Pubkey,
    authority_signs: bool,
    trailing: Vec<AccountMeta>,
) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(*forward, false),
        AccountMeta::new(*quarantine, false),
        AccountMeta::new_readonly(*authority, authority_signs),
    ];
    accounts.extend(trailing);

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data: vec![QUARANTINE_DISCRIMINATOR],
    }
}


// ======================== TRANSACTION HELPERS ========================

pub fn send_tx(svm: &mut LiteSVM, ixs: &[Instruction], payer: &Keypair, signers: &[&Keypair]) {
    let tx = Transaction::new_signed_with_payer(
        ixs,
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx).expect("Transaction should succeed");
}

/// Send a transaction and expect failure, returning the debug form of the
/// transaction error, e.g. `InstructionError(0, Custom(6))`
pub fn send_tx_expect_failure(
    svm: &mut LiteSVM,
    ixs: &[Instruction],
    payer: &Keypair,
    signers: &[&Keypair],
) -> String {
    let tx = Transaction::new_signed_with_payer(
        ixs,
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx);
    assert!(result.is_err(), "Transaction should have failed");
    format!("{:?}", result.err().unwrap().err)
}

pub fn assert_custom_error(err: &str, code: u32) {
    let expected = format!("Custom({code})");
    assert!(err.contains(&expected), "expected {expected}, got {err}");
}


// ======================== SCENARIO ========================

pub struct ForwardScenario {
    pub svm: LiteSVM,
    // Pays for Create and becomes the quarantine authority
    pub payer: Keypair,
    pub destination: Keypair,
    pub quarantine: Keypair,
    pub id: u32,
    pub forward_pda: Pubkey,
    pub bump: u8,
}

// Funded payer, destination and quarantine wallets plus the derived PDA.
// The forward account itself is not created.
pub fn setup_forward_scenario() -> ForwardScenario {
    let mut svm = setup_svm();

    let payer = create_funded_account(&mut svm, 10 * LAMPORTS_PER_SOL);
    let destination = create_funded_account(&mut svm, LAMPORTS_PER_SOL);
    let quarantine = create_funded_account(&mut svm, LAMPORTS_PER_SOL);

    let id = 42;
    let (forward_pda, bump) = derive_forward_pda(&destination.pubkey(), id);

    ForwardScenario {
        svm,
        payer,
        destination,
        quarantine,
        id,
        forward_pda,
        bump,
    }
}

// Scenario with the forward account already created
pub fn setup_created_forward() -> ForwardScenario {
    let mut s = setup_forward_scenario();
    create_forward(&mut s);
    s
}

pub fn create_forward(s: &mut ForwardScenario) {
    let ix = create_ix(
        &s.forward_pda,
        &s.destination.pubkey(),
        &s.quarantine.pubkey(),
        &s.payer.pubkey(),
        s.id,
        s.bump,
    );
    send_tx(&mut s.svm, &[ix], &s.payer, &[&s.payer]);
}
