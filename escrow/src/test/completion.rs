#![cfg(test)]

use super::{EscrowTest, BUYER_BALANCE, DEPOSIT_AMOUNT, TOTAL_AMOUNT};
use common::escrow::types::{EscrowError, EscrowStatus};

#[test]
fn test_confirm_completion_releases_funds_to_builder() {
    let test: EscrowTest = EscrowTest::setup();

    test.escrow_client.deposit(&test.buyer, &DEPOSIT_AMOUNT);
    test.escrow_client
        .deposit(&test.buyer, &(TOTAL_AMOUNT - DEPOSIT_AMOUNT));
    assert_eq!(test.escrow_client.status(), EscrowStatus::Funded);

    test.escrow_client.confirm_completion(&test.oracle);

    assert_eq!(test.token_client.balance(&test.builder), TOTAL_AMOUNT);
    assert_eq!(test.token_client.balance(&test.escrow_client.address), 0);
    assert_eq!(
        test.token_client.balance(&test.buyer),
        BUYER_BALANCE - TOTAL_AMOUNT
    );
    assert_eq!(test.escrow_client.status(), EscrowStatus::Completed);
    assert_eq!(test.escrow_client.funded_amount(), 0);

    // terminal: a second confirmation has nothing left to release
    let res = test.escrow_client.try_confirm_completion(&test.oracle);
    assert_eq!(res, Err(Ok(EscrowError::InvalidState)));
}

#[test]
fn test_confirm_completion_requires_full_funding() {
    let test: EscrowTest = EscrowTest::setup();

    let res = test.escrow_client.try_confirm_completion(&test.oracle);
    assert_eq!(res, Err(Ok(EscrowError::InvalidState)));

    test.escrow_client.deposit(&test.buyer, &DEPOSIT_AMOUNT);
    let res = test.escrow_client.try_confirm_completion(&test.oracle);
    assert_eq!(res, Err(Ok(EscrowError::InvalidState)));

    assert_eq!(test.token_client.balance(&test.builder), 0);
}

#[test]
fn test_confirm_completion_by_non_oracle_fails() {
    let test: EscrowTest = EscrowTest::setup();
    test.escrow_client.deposit(&test.buyer, &TOTAL_AMOUNT);

    let res = test.escrow_client.try_confirm_completion(&test.buyer);
    assert_eq!(res, Err(Ok(EscrowError::UnauthorizedCaller)));

    let res = test.escrow_client.try_confirm_completion(&test.builder);
    assert_eq!(res, Err(Ok(EscrowError::UnauthorizedCaller)));

    assert_eq!(test.escrow_client.status(), EscrowStatus::Funded);
}

#[test]
fn test_no_deposit_after_completion() {
    let test: EscrowTest = EscrowTest::setup();
    test.escrow_client.deposit(&test.buyer, &TOTAL_AMOUNT);
    test.escrow_client.confirm_completion(&test.oracle);

    let res = test.escrow_client.try_deposit(&test.buyer, &DEPOSIT_AMOUNT);
    assert_eq!(res, Err(Ok(EscrowError::InvalidState)));
}
