use soroban_sdk::{contractclient, Address, Env};
use super::types::{EscrowError as Error, Escrow, EscrowStatus};

#[contractclient(name = "EscrowContractClient")]
pub trait EscrowContractTrait {
    fn initialize(
        env: Env,
        builder: Address,
        buyer: Address,
        payment_token: Address,
        total_amount: i128,
        deposit_amount: i128,
        penalty_amount: i128,
        oracle: Address,
        refund_deadline: u64,
    ) -> Result<(), Error>;
    fn version() -> u32;
    fn deposit(env: Env, sender: Address, amount: i128) -> Result<(), Error>;
    fn confirm_completion(env: Env, sender: Address) -> Result<(), Error>;
    fn raise_dispute(env: Env, sender: Address) -> Result<(), Error>;
    fn resolve_dispute(env: Env, sender: Address, builder_share: i128) -> Result<(), Error>;
    fn claim_refund(env: Env, sender: Address) -> Result<(), Error>;
    fn get_agreement(env: Env) -> Result<Escrow, Error>;
    fn status(env: Env) -> Result<EscrowStatus, Error>;
    fn funded_amount(env: Env) -> Result<i128, Error>;
}
