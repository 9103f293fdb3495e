use common::escrow::types::EscrowStatus;
use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

// Every successful transition publishes (status_before, status_after, actor,
// amounts involved, ledger timestamp). This stream plus token balance changes
// is the only externally observable trace of the engine.
pub enum EscrowEvent {
    Initialized(Address, Address, Address, i128),
    Deposited(EscrowStatus, EscrowStatus, Address, i128, i128, u64),
    Completed(EscrowStatus, EscrowStatus, Address, i128, u64),
    DisputeRaised(EscrowStatus, EscrowStatus, Address, i128, u64),
    DisputeResolved(EscrowStatus, EscrowStatus, Address, i128, i128, u64),
    Refunded(EscrowStatus, EscrowStatus, Address, i128, i128, u64),
}

impl EscrowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EscrowEvent::Initialized(..) => stringify!(Initialized),
            EscrowEvent::Deposited(..) => stringify!(Deposited),
            EscrowEvent::Completed(..) => stringify!(Completed),
            EscrowEvent::DisputeRaised(..) => stringify!(DisputeRaised),
            EscrowEvent::DisputeResolved(..) => stringify!(DisputeResolved),
            EscrowEvent::Refunded(..) => stringify!(Refunded),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            EscrowEvent::Initialized(builder, buyer, oracle, total_amount) => {
                v.push_back(builder.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(oracle.into_val(env));
                v.push_back(total_amount.into_val(env));
            }
            EscrowEvent::Deposited(before, after, buyer, amount, funded_amount, timestamp) => {
                v.push_back(before.into_val(env));
                v.push_back(after.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(amount.into_val(env));
                v.push_back(funded_amount.into_val(env));
                v.push_back(timestamp.into_val(env));
            }
            EscrowEvent::Completed(before, after, oracle, amount, timestamp) => {
                v.push_back(before.into_val(env));
                v.push_back(after.into_val(env));
                v.push_back(oracle.into_val(env));
                v.push_back(amount.into_val(env));
                v.push_back(timestamp.into_val(env));
            }
            EscrowEvent::DisputeRaised(before, after, oracle, funded_amount, timestamp) => {
                v.push_back(before.into_val(env));
                v.push_back(after.into_val(env));
                v.push_back(oracle.into_val(env));
                v.push_back(funded_amount.into_val(env));
                v.push_back(timestamp.into_val(env));
            }
            EscrowEvent::DisputeResolved(before, after, oracle, builder_share, buyer_share, timestamp) => {
                v.push_back(before.into_val(env));
                v.push_back(after.into_val(env));
                v.push_back(oracle.into_val(env));
                v.push_back(builder_share.into_val(env));
                v.push_back(buyer_share.into_val(env));
                v.push_back(timestamp.into_val(env));
            }
            EscrowEvent::Refunded(before, after, buyer, refund, penalty, timestamp) => {
                v.push_back(before.into_val(env));
                v.push_back(after.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(refund.into_val(env));
                v.push_back(penalty.into_val(env));
                v.push_back(timestamp.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
