use soroban_sdk::{token, Address, Env};

use crate::access;
use crate::errors::LedgerError;
use crate::types::LedgerState;

/// Validates a vote payment and returns the balance after accepting it.
/// Only an exact match of the vote cost is accepted.
pub fn check_payment(state: &LedgerState, payment: i128) -> Result<i128, LedgerError> {
    if payment != state.vote_cost {
        return Err(LedgerError::PaymentMismatch);
    }
    state
        .balance
        .checked_add(payment)
        .ok_or(LedgerError::Overflow)
}

/// Pulls a checked payment from `from` into the ledger.
///
/// Must run after every other precondition of the operation has passed.
pub fn deposit(
    env: &Env,
    state: &mut LedgerState,
    from: &Address,
    payment: i128,
    new_balance: i128,
) {
    if payment > 0 {
        let client = token::Client::new(env, &state.payment_token);
        client.transfer(from, &env.current_contract_address(), &payment);
    }
    state.balance = new_balance;
}

/// Sends the whole ledger balance to the owner. Returns the amount moved.
pub fn withdraw(env: &Env, state: &mut LedgerState, caller: &Address) -> Result<i128, LedgerError> {
    access::require_admin(state, caller)?;

    let amount = state.balance;
    if amount > 0 {
        let client = token::Client::new(env, &state.payment_token);
        client.transfer(&env.current_contract_address(), &state.owner, &amount);
    }
    state.balance = 0;

    Ok(amount)
}
