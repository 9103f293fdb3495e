use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfiguration = 3,
    UnauthorizedCaller = 4,
    InvalidState = 5,
    InvalidAmount = 6,
    InsufficientFunds = 7,
    ArithmeticOverflow = 8,
    DeadlineNotReached = 9,
    DeadlinePassed = 10,
    InsufficientAllowance = 11,
    LedgerTransferFailed = 12,
}

// One agreement per deployed contract instance. Everything except
// `funded_amount` and `status` is fixed at initialization.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Escrow {
    pub builder: Address,
    pub buyer: Address,
    pub oracle: Address,
    pub payment_token: Address,
    pub total_amount: i128,
    pub deposit_amount: i128,
    pub penalty_amount: i128,
    pub refund_deadline: u64,
    pub funded_amount: i128,
    pub status: EscrowStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum EscrowStatus {
    Created = 1,
    PartiallyFunded = 2,
    Funded = 3,
    Completed = 4,
    Refunded = 5,
    Disputed = 6,
    Resolved = 7,
}

#[derive(Clone)]
#[contracttype]
pub enum EscrowDataKey {
    Agreement,
}
