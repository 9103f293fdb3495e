#![no_std]

mod events;

use common::escrow::{
    interface::EscrowContractTrait,
    types::{Escrow, EscrowDataKey as DataKey, EscrowError as Error, EscrowStatus},
};
use events::EscrowEvent;
use soroban_sdk::{contract, contractimpl, token, Address, Env};

#[contract]
pub struct EscrowContract;

#[contractimpl]
impl EscrowContractTrait for EscrowContract {
    // Create the agreement. Parameter order mirrors the deployment wiring:
    // builder, buyer, token, amounts, oracle, deadline.
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
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Agreement) {
            return Err(Error::AlreadyInitialized);
        }

        if total_amount <= 0
            || deposit_amount <= 0
            || deposit_amount > total_amount
            || penalty_amount < 0
            || penalty_amount > deposit_amount
            || refund_deadline <= env.ledger().timestamp()
            || builder == buyer
        {
            return Err(Error::InvalidConfiguration);
        }

        let escrow: Escrow = Escrow {
            builder: builder.clone(),
            buyer: buyer.clone(),
            oracle: oracle.clone(),
            payment_token,
            total_amount,
            deposit_amount,
            penalty_amount,
            refund_deadline,
            funded_amount: 0,
            status: EscrowStatus::Created,
        };
        save_agreement(&env, &escrow);

        EscrowEvent::Initialized(builder, buyer, oracle, total_amount).publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    // Buyer moves funds into contract custody, in one or more installments.
    fn deposit(env: Env, sender: Address, amount: i128) -> Result<(), Error> {
        sender.require_auth();
        let mut escrow: Escrow = load_agreement(&env)?;

        if sender != escrow.buyer {
            return Err(Error::UnauthorizedCaller);
        }
        if !matches!(
            escrow.status,
            EscrowStatus::Created | EscrowStatus::PartiallyFunded
        ) {
            return Err(Error::InvalidState);
        }

        // Deposits close the moment the refund window opens, so the buyer
        // cannot forestall refund eligibility by topping up late.
        let now: u64 = env.ledger().timestamp();
        if now >= escrow.refund_deadline {
            return Err(Error::DeadlinePassed);
        }

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let funded: i128 = escrow
            .funded_amount
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        if funded > escrow.total_amount {
            return Err(Error::InvalidAmount);
        }

        let token_client: token::Client<'_> = token::Client::new(&env, &escrow.payment_token);
        match token_client.try_transfer(&sender, &env.current_contract_address(), &amount) {
            Ok(Ok(())) => {}
            _ => return Err(Error::InsufficientAllowance),
        }

        let status_before: EscrowStatus = escrow.status;
        escrow.funded_amount = funded;
        escrow.status = if funded == escrow.total_amount {
            EscrowStatus::Funded
        } else {
            EscrowStatus::PartiallyFunded
        };
        save_agreement(&env, &escrow);

        EscrowEvent::Deposited(status_before, escrow.status, sender, amount, funded, now)
            .publish(&env);
        Ok(())
    }

    // Oracle attests completion; the full price is released to the builder.
    fn confirm_completion(env: Env, sender: Address) -> Result<(), Error> {
        sender.require_auth();
        let mut escrow: Escrow = load_agreement(&env)?;

        if sender != escrow.oracle {
            return Err(Error::UnauthorizedCaller);
        }
        if escrow.status != EscrowStatus::Funded {
            return Err(Error::InvalidState);
        }

        transfer_out(&env, &escrow.payment_token, &escrow.builder, escrow.total_amount)?;

        let status_before: EscrowStatus = escrow.status;
        escrow.funded_amount = 0;
        escrow.status = EscrowStatus::Completed;
        save_agreement(&env, &escrow);

        EscrowEvent::Completed(
            status_before,
            escrow.status,
            sender,
            escrow.total_amount,
            env.ledger().timestamp(),
        )
        .publish(&env);
        Ok(())
    }

    // Oracle freezes deposits and the refund path until the dispute is resolved.
    fn raise_dispute(env: Env, sender: Address) -> Result<(), Error> {
        sender.require_auth();
        let mut escrow: Escrow = load_agreement(&env)?;

        if sender != escrow.oracle {
            return Err(Error::UnauthorizedCaller);
        }
        if !matches!(
            escrow.status,
            EscrowStatus::PartiallyFunded | EscrowStatus::Funded
        ) {
            return Err(Error::InvalidState);
        }

        let status_before: EscrowStatus = escrow.status;
        escrow.status = EscrowStatus::Disputed;
        save_agreement(&env, &escrow);

        EscrowEvent::DisputeRaised(
            status_before,
            escrow.status,
            sender,
            escrow.funded_amount,
            env.ledger().timestamp(),
        )
        .publish(&env);
        Ok(())
    }

    // Oracle splits custody between builder and buyer; the two legs always
    // sum to the funded amount.
    fn resolve_dispute(env: Env, sender: Address, builder_share: i128) -> Result<(), Error> {
        sender.require_auth();
        let mut escrow: Escrow = load_agreement(&env)?;

        if sender != escrow.oracle {
            return Err(Error::UnauthorizedCaller);
        }
        if escrow.status != EscrowStatus::Disputed {
            return Err(Error::InvalidState);
        }
        if builder_share < 0 || builder_share > escrow.funded_amount {
            return Err(Error::InsufficientFunds);
        }
        let buyer_share: i128 = escrow
            .funded_amount
            .checked_sub(builder_share)
            .ok_or(Error::ArithmeticOverflow)?;

        transfer_out(&env, &escrow.payment_token, &escrow.builder, builder_share)?;
        transfer_out(&env, &escrow.payment_token, &escrow.buyer, buyer_share)?;

        let status_before: EscrowStatus = escrow.status;
        escrow.funded_amount = 0;
        escrow.status = EscrowStatus::Resolved;
        save_agreement(&env, &escrow);

        EscrowEvent::DisputeResolved(
            status_before,
            escrow.status,
            sender,
            builder_share,
            buyer_share,
            env.ledger().timestamp(),
        )
        .publish(&env);
        Ok(())
    }

    // Buyer reclaims custody once the refund deadline has passed. The penalty
    // is forfeited to the builder only if the deposit threshold was reached.
    fn claim_refund(env: Env, sender: Address) -> Result<(), Error> {
        sender.require_auth();
        let mut escrow: Escrow = load_agreement(&env)?;

        if sender != escrow.buyer {
            return Err(Error::UnauthorizedCaller);
        }
        if !matches!(
            escrow.status,
            EscrowStatus::PartiallyFunded | EscrowStatus::Funded
        ) {
            return Err(Error::InvalidState);
        }
        let now: u64 = env.ledger().timestamp();
        if now < escrow.refund_deadline {
            return Err(Error::DeadlineNotReached);
        }

        let penalty: i128 = if escrow.funded_amount >= escrow.deposit_amount {
            escrow.penalty_amount
        } else {
            0
        };
        let refund: i128 = escrow
            .funded_amount
            .checked_sub(penalty)
            .ok_or(Error::InsufficientFunds)?;

        transfer_out(&env, &escrow.payment_token, &escrow.buyer, refund)?;
        transfer_out(&env, &escrow.payment_token, &escrow.builder, penalty)?;

        let status_before: EscrowStatus = escrow.status;
        escrow.funded_amount = 0;
        escrow.status = EscrowStatus::Refunded;
        save_agreement(&env, &escrow);

        EscrowEvent::Refunded(status_before, escrow.status, sender, refund, penalty, now)
            .publish(&env);
        Ok(())
    }

    fn get_agreement(env: Env) -> Result<Escrow, Error> {
        load_agreement(&env)
    }

    fn status(env: Env) -> Result<EscrowStatus, Error> {
        let escrow: Escrow = load_agreement(&env)?;
        Ok(escrow.status)
    }

    fn funded_amount(env: Env) -> Result<i128, Error> {
        let escrow: Escrow = load_agreement(&env)?;
        Ok(escrow.funded_amount)
    }
}

fn load_agreement(env: &Env) -> Result<Escrow, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Agreement)
        .ok_or(Error::NotInitialized)
}

fn save_agreement(env: &Env, escrow: &Escrow) {
    env.storage().instance().set(&DataKey::Agreement, escrow);
}

// Disbursements skip zero-amount legs; a failed ledger call surfaces to the
// caller instead of advancing engine state.
fn transfer_out(env: &Env, token_addr: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let token_client: token::Client<'_> = token::Client::new(env, token_addr);
    match token_client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::LedgerTransferFailed),
    }
}
