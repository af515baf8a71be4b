#![no_std]

use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token, Address, BytesN, Env, Vec,
};

mod error;
mod events;
pub mod merkle;
mod storage;
pub mod window;

pub use error::AirdropError;
pub use window::{ClaimWindow, Phase};

#[contract]
pub struct AirdropDistributor;

/// Confirms `caller` signed the invocation and holds the owner capability.
fn require_owner(env: &Env, caller: &Address) -> Result<(), AirdropError> {
    caller.require_auth();
    if *caller != storage::read_owner(env) {
        return Err(AirdropError::Unauthorized);
    }
    Ok(())
}

/// Rejects zero and negative token amounts.
fn positive(amount: i128) -> Result<i128, AirdropError> {
    if amount <= 0 {
        return Err(AirdropError::InvalidAmount);
    }
    Ok(amount)
}

#[contractimpl]
impl AirdropDistributor {
    /// Stores the distributor configuration.
    ///
    /// `merkle_root` may be the all-zero placeholder; `start_time` and
    /// `end_time` left as `None` can each be set once later by the owner.
    pub fn __constructor(
        env: Env,
        owner: Address,             // Holder of the admin capability
        token: Address,             // Token held in custody and paid out
        merkle_root: BytesN<32>,    // Commitment over the allocation list
        reclaim_delay: u64,         // Seconds after end before reclaim opens
        start_time: Option<u64>,    // First second claims are accepted
        end_time: Option<u64>,      // First second claims are rejected again
    ) {
        let window = ClaimWindow {
            start: start_time,
            end: end_time,
            reclaim_delay,
        };
        if let Err(err) = window.validate() {
            panic_with_error!(&env, err);
        }

        storage::write_owner(&env, &owner);
        storage::write_token(&env, &token);
        storage::write_merkle_root(&env, &merkle_root);
        storage::write_window(&env, &window);
        storage::extend_instance(&env);
    }

    /// Moves `amount` of the custody token from `from` into the distributor.
    pub fn fund(env: Env, from: Address, amount: i128) -> Result<(), AirdropError> {
        let amount = positive(amount)?;
        from.require_auth();

        token::Client::new(&env, &storage::read_token(&env)).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );
        storage::extend_instance(&env);

        events::funded(&env, &from, amount);
        Ok(())
    }

    /// Pays `amount` to `account` if `(account, amount)` is a leaf under the stored root.
    ///
    /// Anyone may submit a claim; tokens always go to `account`. Checks run
    /// in a fixed order: window, claim status, amount, proof.
    pub fn claim(
        env: Env,
        account: Address,
        amount: i128,
        proof: Vec<BytesN<32>>,
    ) -> Result<(), AirdropError> {
        let now = env.ledger().timestamp();
        if !storage::read_window(&env).is_active(now) {
            return Err(AirdropError::ClaimWindowInactive);
        }

        if storage::is_claimed(&env, &account) {
            return Err(AirdropError::AlreadyClaimed);
        }

        let amount = positive(amount)?;
        let leaf = merkle::leaf_hash(&env, &account, amount);
        if !merkle::verify(&env, &proof, &storage::read_merkle_root(&env), &leaf) {
            return Err(AirdropError::InvalidProof);
        }

        // Flag before transfer so a re-entrant claim for this account is rejected.
        storage::mark_claimed(&env, &account);

        token::Client::new(&env, &storage::read_token(&env)).transfer(
            &env.current_contract_address(),
            &account,
            &amount,
        );
        storage::extend_instance(&env);

        log!(&env, "airdrop claimed", account, amount);
        events::claimed(&env, &account, amount);
        Ok(())
    }

    /// Replaces the root. Only possible before the window starts.
    pub fn set_merkle_root(env: Env, caller: Address, root: BytesN<32>) -> Result<(), AirdropError> {
        require_owner(&env, &caller)?;

        if storage::read_window(&env).root_locked(env.ledger().timestamp()) {
            return Err(AirdropError::RootLocked);
        }
        storage::write_merkle_root(&env, &root);
        storage::extend_instance(&env);

        log!(&env, "merkle root updated", root);
        events::root_set(&env, &root);
        Ok(())
    }

    /// Sets the first second claims are accepted. Only once, and only to a future time.
    pub fn set_start_time(env: Env, caller: Address, start: u64) -> Result<(), AirdropError> {
        require_owner(&env, &caller)?;

        let window = storage::read_window(&env).with_start(env.ledger().timestamp(), start)?;
        storage::write_window(&env, &window);
        storage::extend_instance(&env);

        log!(&env, "claim window start set", start);
        events::start_set(&env, start);
        Ok(())
    }

    /// Sets the first second claims are rejected again. Only once, and only after the start.
    pub fn set_end_time(env: Env, caller: Address, end: u64) -> Result<(), AirdropError> {
        require_owner(&env, &caller)?;

        let window = storage::read_window(&env).with_end(env.ledger().timestamp(), end)?;
        storage::write_window(&env, &window);
        storage::extend_instance(&env);

        log!(&env, "claim window end set", end);
        events::end_set(&env, end);
        Ok(())
    }

    /// Withdraws `amount` of unclaimed custody to the owner once `end + reclaim_delay` has passed.
    pub fn reclaim(env: Env, caller: Address, amount: i128) -> Result<(), AirdropError> {
        require_owner(&env, &caller)?;

        if !storage::read_window(&env).can_reclaim(env.ledger().timestamp()) {
            return Err(AirdropError::ReclaimNotAllowedYet);
        }

        let amount = positive(amount)?;
        let token = token::Client::new(&env, &storage::read_token(&env));
        if amount > token.balance(&env.current_contract_address()) {
            return Err(AirdropError::InsufficientBalance);
        }
        token.transfer(&env.current_contract_address(), &caller, &amount);
        storage::extend_instance(&env);

        log!(&env, "unclaimed tokens reclaimed", amount);
        events::reclaimed(&env, &caller, amount);
        Ok(())
    }

    /// Hands the admin capability to `new_owner`.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), AirdropError> {
        require_owner(&env, &caller)?;

        storage::write_owner(&env, &new_owner);
        storage::extend_instance(&env);

        events::owner_set(&env, &caller, &new_owner);
        Ok(())
    }

    /// Current allocation commitment.
    pub fn merkle_root(env: Env) -> BytesN<32> {
        storage::read_merkle_root(&env)
    }

    /// Window start, `None` while unset.
    pub fn start_time(env: Env) -> Option<u64> {
        storage::read_window(&env).start
    }

    /// Window end, `None` while unset.
    pub fn end_time(env: Env) -> Option<u64> {
        storage::read_window(&env).end
    }

    /// Seconds after the end before `reclaim` opens.
    pub fn reclaim_delay(env: Env) -> u64 {
        storage::read_window(&env).reclaim_delay
    }

    /// First timestamp at which `reclaim` is accepted; `None` while the end is unset.
    pub fn reclaim_opens_at(env: Env) -> Option<u64> {
        storage::read_window(&env).reclaim_opens_at()
    }

    /// Token held in custody.
    pub fn token(env: Env) -> Address {
        storage::read_token(&env)
    }

    /// Address allowed to run admin operations.
    pub fn owner(env: Env) -> Address {
        storage::read_owner(&env)
    }

    /// Whether `account` has already received its allocation.
    pub fn is_claimed(env: Env, account: Address) -> bool {
        storage::is_claimed(&env, &account)
    }

    /// Tokens currently held in custody.
    pub fn balance(env: Env) -> i128 {
        token::Client::new(&env, &storage::read_token(&env))
            .balance(&env.current_contract_address())
    }

    /// Distributor state derived from the root and the current ledger time.
    pub fn phase(env: Env) -> Phase {
        if storage::read_merkle_root(&env) == BytesN::from_array(&env, &[0u8; 32]) {
            return Phase::Unconfigured;
        }
        storage::read_window(&env).phase(env.ledger().timestamp())
    }

    /// Leaf hash for an allocation, as tree builders must compute it.
    ///
    /// Fails for non-positive amounts, which no claim can redeem.
    pub fn leaf(env: Env, account: Address, amount: i128) -> Result<BytesN<32>, AirdropError> {
        let amount = positive(amount)?;
        Ok(merkle::leaf_hash(&env, &account, amount))
    }

    /// Stateless proof check against an arbitrary root.
    pub fn verify(env: Env, proof: Vec<BytesN<32>>, root: BytesN<32>, leaf: BytesN<32>) -> bool {
        merkle::verify(&env, &proof, &root, &leaf)
    }
}
