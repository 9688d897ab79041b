//! LiteSVM harness for the emergency relief DAO program
//!
//! Builds raw Anchor instructions (sighash discriminator + borsh args) and
//! decodes program accounts into local mirrors of the on-chain layout.

use std::path::PathBuf;

use borsh::BorshDeserialize;
use litesvm::types::TransactionResult;
use litesvm::LiteSVM;
use solana_instruction::error::InstructionError;
use solana_instruction::{AccountMeta, Instruction};
use solana_keypair::Keypair;
use solana_message::Message;
use solana_native_token::LAMPORTS_PER_SOL;
use solana_pubkey::Pubkey;
use solana_signer::Signer;
use solana_transaction::Transaction;
use solana_transaction_error::TransactionError;

pub const PROGRAM_NAME: &str = "emergency_relief_dao";

/// Slots a claim stays open for voting
pub const VOTING_PERIOD: u64 = 144;

/// Anchor custom error codes, in declaration order from 6000
pub mod codes {
    pub const INVALID_AMOUNT: u32 = 6000;
    pub const INVALID_INPUT: u32 = 6001;
    pub const CLAIM_NOT_FOUND: u32 = 6002;
    pub const CLAIM_NOT_PENDING: u32 = 6003;
    pub const VOTING_CLOSED: u32 = 6004;
    pub const VOTING_STILL_OPEN: u32 = 6005;
    pub const ALREADY_VOTED: u32 = 6006;
    pub const NOT_AUTHORIZED: u32 = 6008;
    /// Anchor's ConstraintSeeds, raised when a claim PDA was derived from a
    /// stale claim count
    pub const CONSTRAINT_SEEDS: u32 = 2006;
    /// Anchor's ConstraintAddress, raised for a payout account that is not
    /// the claim's beneficiary
    pub const CONSTRAINT_ADDRESS: u32 = 2012;
}

pub fn program_id() -> Pubkey {
    "EpusaJs2Y1hCqmjwP21RcwULnhCrSdEhQN7x59P1mHRF"
        .parse()
        .expect("valid program id")
}

pub fn read_program() -> Vec<u8> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("..");
    path.push("target");
    path.push("deploy");
    path.push(format!("{}.so", PROGRAM_NAME));
    std::fs::read(&path).unwrap_or_else(|_| panic!("Failed to read program from {:?}", path))
}

pub fn discriminator(name: &str) -> [u8; 8] {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(format!("global:{}", name).as_bytes());
    let result = hasher.finalize();
    let mut disc = [0u8; 8];
    disc.copy_from_slice(&result[..8]);
    disc
}

fn ix_data<T: borsh::BorshSerialize>(name: &str, args: &T) -> Vec<u8> {
    let mut data = discriminator(name).to_vec();
    data.extend(borsh::to_vec(args).expect("serialize args"));
    data
}

pub fn dao_pda() -> Pubkey {
    Pubkey::find_program_address(&[b"dao"], &program_id()).0
}

pub fn claim_pda(claim_id: u64) -> Pubkey {
    Pubkey::find_program_address(&[b"claim", &claim_id.to_le_bytes()], &program_id()).0
}

pub fn vote_pda(claim_id: u64, voter: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[b"vote", &claim_id.to_le_bytes(), voter.as_ref()],
        &program_id(),
    )
    .0
}

/// Mirror of `ClaimStatus`
#[derive(BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
    Expired,
}

/// Mirror of `GovernanceParams`
#[derive(BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GovernanceParams {
    pub voting_period: u64,
    pub quorum: u64,
}

/// Mirror of the `DaoState` account (after the 8-byte discriminator)
#[derive(BorshDeserialize, Debug, Clone)]
pub struct DaoAccount {
    pub owner: [u8; 32],
    pub fund_balance: u64,
    pub claim_count: u64,
    pub params: GovernanceParams,
    pub bump: u8,
}

/// Mirror of the `Claim` account (after the 8-byte discriminator)
#[derive(BorshDeserialize, Debug, Clone)]
pub struct ClaimAccount {
    pub id: u64,
    pub beneficiary: [u8; 32],
    pub amount: u64,
    pub description: String,
    pub category: String,
    pub status: ClaimStatus,
    pub yes_votes: u64,
    pub no_votes: u64,
    pub created_at: u64,
    pub voting_deadline: u64,
    pub bump: u8,
}

impl ClaimAccount {
    pub fn total_votes(&self) -> u64 {
        self.yes_votes + self.no_votes
    }
}

/// Anchor custom error code of a failed transaction, if it has one.
pub fn custom_error(result: &TransactionResult) -> Option<u32> {
    match result {
        Err(failed) => match &failed.err {
            TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(*code),
            _ => None,
        },
        Ok(_) => None,
    }
}

/// Borsh-decodes the value an instruction returned through return data.
pub fn return_value<T: BorshDeserialize>(result: &TransactionResult) -> T {
    let meta = result.as_ref().expect("transaction succeeded");
    T::deserialize(&mut meta.return_data.data.as_slice()).expect("decode return data")
}

/// Signers used across a scenario: the DAO deployer and three members.
pub struct Members {
    pub deployer: Keypair,
    pub user1: Keypair,
    pub user2: Keypair,
    pub user3: Keypair,
}

/// A running program with an initialized DAO
pub struct Harness {
    pub svm: LiteSVM,
}

/// Loads the program, funds every member, and initializes the DAO with the
/// deployer as owner.
pub fn setup() -> (Harness, Members) {
    let mut svm = LiteSVM::new();
    svm.add_program(program_id(), &read_program());

    let members = Members {
        deployer: Keypair::new(),
        user1: Keypair::new(),
        user2: Keypair::new(),
        user3: Keypair::new(),
    };
    for member in [&members.deployer, &members.user1, &members.user2, &members.user3] {
        svm.airdrop(&member.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Airdrop failed");
    }

    let mut harness = Harness { svm };
    let ix = Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(members.deployer.pubkey(), true),
            AccountMeta::new(dao_pda(), false),
            AccountMeta::new_readonly(solana_sdk_ids::system_program::ID, false),
        ],
        data: discriminator("initialize").to_vec(),
    };
    let result = harness.send(ix, &members.deployer);
    assert!(result.is_ok(), "DAO initialization should succeed: {:?}", result);

    (harness, members)
}

impl Harness {
    pub fn send(&mut self, ix: Instruction, signer: &Keypair) -> TransactionResult {
        let msg = Message::new(&[ix], Some(&signer.pubkey()));
        let tx = Transaction::new(&[signer], msg, self.svm.latest_blockhash());
        self.svm.send_transaction(tx)
    }

    /// Lets an identical transaction be sent again.
    pub fn expire_blockhash(&mut self) {
        self.svm.expire_blockhash();
    }

    pub fn warp_to_slot(&mut self, slot: u64) {
        self.svm.warp_to_slot(slot);
    }

    pub fn submit_claim(
        &mut self,
        who: &Keypair,
        amount: u64,
        description: &str,
        category: &str,
    ) -> TransactionResult {
        let claim_id = self.dao().claim_count + 1;
        self.submit_claim_at(who, claim_id, amount, description, category)
    }

    /// Submits against the claim PDA for `claim_id`, as a client holding a
    /// possibly outdated claim count would.
    pub fn submit_claim_at(
        &mut self,
        who: &Keypair,
        claim_id: u64,
        amount: u64,
        description: &str,
        category: &str,
    ) -> TransactionResult {
        let ix = Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(who.pubkey(), true),
                AccountMeta::new(dao_pda(), false),
                AccountMeta::new(claim_pda(claim_id), false),
                AccountMeta::new_readonly(solana_sdk_ids::system_program::ID, false),
            ],
            data: ix_data(
                "submit_claim",
                &(amount, description.to_string(), category.to_string()),
            ),
        };
        self.send(ix, who)
    }

    pub fn vote_on_claim(
        &mut self,
        who: &Keypair,
        claim_id: u64,
        approve: bool,
    ) -> TransactionResult {
        let ix = Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(who.pubkey(), true),
                AccountMeta::new(claim_pda(claim_id), false),
                AccountMeta::new(vote_pda(claim_id, &who.pubkey()), false),
                AccountMeta::new_readonly(solana_sdk_ids::system_program::ID, false),
            ],
            data: ix_data("vote_on_claim", &(claim_id, approve)),
        };
        self.send(ix, who)
    }

    pub fn finalize_claim(&mut self, who: &Keypair, claim_id: u64) -> TransactionResult {
        let beneficiary = Pubkey::new_from_array(self.claim(claim_id).beneficiary);
        self.finalize_claim_paying(who, claim_id, &beneficiary)
    }

    /// Finalizes with an explicit payout account.
    pub fn finalize_claim_paying(
        &mut self,
        who: &Keypair,
        claim_id: u64,
        beneficiary: &Pubkey,
    ) -> TransactionResult {
        let ix = Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new_readonly(who.pubkey(), true),
                AccountMeta::new(dao_pda(), false),
                AccountMeta::new(claim_pda(claim_id), false),
                AccountMeta::new(*beneficiary, false),
            ],
            data: ix_data("finalize_claim", &claim_id),
        };
        self.send(ix, who)
    }

    pub fn deposit_funds(&mut self, who: &Keypair, amount: u64) -> TransactionResult {
        let ix = Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(who.pubkey(), true),
                AccountMeta::new(dao_pda(), false),
                AccountMeta::new_readonly(solana_sdk_ids::system_program::ID, false),
            ],
            data: ix_data("deposit_funds", &amount),
        };
        self.send(ix, who)
    }

    pub fn update_dao_owner(&mut self, who: &Keypair, new_owner: &Pubkey) -> TransactionResult {
        let ix = Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new_readonly(who.pubkey(), true),
                AccountMeta::new(dao_pda(), false),
            ],
            data: ix_data("update_dao_owner", &new_owner.to_bytes()),
        };
        self.send(ix, who)
    }

    pub fn get_claim(&mut self, who: &Keypair, claim_id: u64) -> TransactionResult {
        let ix = Instruction {
            program_id: program_id(),
            accounts: vec![AccountMeta::new_readonly(claim_pda(claim_id), false)],
            data: ix_data("get_claim", &claim_id),
        };
        self.send(ix, who)
    }

    pub fn get_fund_balance(&mut self, who: &Keypair) -> TransactionResult {
        let ix = Instruction {
            program_id: program_id(),
            accounts: vec![AccountMeta::new_readonly(dao_pda(), false)],
            data: discriminator("get_fund_balance").to_vec(),
        };
        self.send(ix, who)
    }

    pub fn dao(&self) -> DaoAccount {
        let account = self.svm.get_account(&dao_pda()).expect("DAO account exists");
        DaoAccount::deserialize(&mut &account.data[8..]).expect("decode DaoState")
    }

    pub fn claim(&self, claim_id: u64) -> ClaimAccount {
        let account = self
            .svm
            .get_account(&claim_pda(claim_id))
            .expect("claim account exists");
        ClaimAccount::deserialize(&mut &account.data[8..]).expect("decode Claim")
    }

    pub fn lamports(&self, pubkey: &Pubkey) -> u64 {
        self.svm
            .get_account(pubkey)
            .map(|account| account.lamports)
            .unwrap_or_default()
    }
}
