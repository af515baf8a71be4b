use soroban_sdk::contracterror;

/// Error codes returned by the airdrop distributor.
///
/// Codes are part of the contract interface and must stay stable.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AirdropError {
    /// Claim outside `[start, end)`: not started or has ended.
    ClaimWindowInactive = 1,
    /// The account has already claimed its allocation.
    AlreadyClaimed = 2,
    /// The proof does not rebuild the stored root for the given leaf.
    InvalidProof = 3,
    /// The root cannot change once the claim window has started.
    RootLocked = 4,
    StartAlreadySet = 5,
    EndAlreadySet = 6,
    /// Start is not in the future, or not before the end.
    InvalidStart = 7,
    /// End is not in the future, or not after the start.
    InvalidEnd = 8,
    /// Reclaim attempted before `end + reclaim_delay`.
    ReclaimNotAllowedYet = 9,
    /// Caller is not the owner.
    Unauthorized = 10,
    InvalidAmount = 11,
    InsufficientBalance = 12,
    /// Construction with `start >= end`.
    InvalidWindow = 13,
}
