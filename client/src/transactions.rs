use anyhow::Context;
use colored::Colorize;
use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    rpc_client::RpcClient,
    rpc_response::RpcSimulateTransactionResult,
};
use solana_commitment_config::CommitmentConfig;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

use crate::logs::{log_error, log_info, log_success, LogColor};

pub const DEFAULT_FUND_AMOUNT: u64 = 10_000_000_000;

/// Funds `keypair` (or a fresh one) with an airdrop and waits for confirmation.
pub async fn fund_account(rpc: &RpcClient, keypair: Option<Keypair>) -> anyhow::Result<Keypair> {
    let payer = match keypair {
        Some(kp) => kp,
        None => Keypair::new(),
    };

    let airdrop_signature = rpc
        .request_airdrop(&payer.pubkey(), DEFAULT_FUND_AMOUNT)
        .context("Failed to request airdrop")?;

    let mut i = 0;
    // Wait for airdrop confirmation.
    while !rpc
        .confirm_transaction_with_commitment(&airdrop_signature, CommitmentConfig::confirmed())
        .context("Couldn't confirm airdrop transaction")?
        .value
        && i < 10
    {
        std::thread::sleep(std::time::Duration::from_millis(500));
        i += 1;
    }

    Ok(payer)
}

pub async fn send_transaction(
    rpc: &RpcClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
) -> anyhow::Result<Signature> {
    send_transaction_with_config(rpc, payer, signers, instructions, None).await
}

pub struct SendTransactionConfig {
    pub compute_budget: Option<u32>,
    pub debug_logs: Option<bool>,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            compute_budget: Default::default(),
            debug_logs: Some(true),
        }
    }
}

pub async fn send_transaction_with_config(
    rpc: &RpcClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
    config: Option<SendTransactionConfig>,
) -> anyhow::Result<Signature> {
    let blockhash = rpc
        .get_latest_blockhash()
        .context("Should be able to get blockhash")?;

    let SendTransactionConfig {
        compute_budget,
        debug_logs,
    } = config.unwrap_or_default();

    let msg = Message::new(
        &[
            compute_budget.map_or(vec![], |budget| {
                vec![
                    ComputeBudgetInstruction::set_compute_unit_limit(budget),
                    ComputeBudgetInstruction::set_compute_unit_price(1),
                ]
            }),
            instructions.to_vec(),
        ]
        .concat(),
        Some(&payer.pubkey()),
    );

    let mut tx = Transaction::new_unsigned(msg);
    tx.try_sign(
        &std::iter::once(payer)
            .chain(signers.iter().cloned())
            .collect::<Vec<_>>(),
        blockhash,
    )
    .context("Should sign transaction")?;

    match rpc.send_and_confirm_transaction(&tx) {
        Ok(sig) => {
            if matches!(debug_logs, Some(true)) {
                let sender_info = format!("{}: {}", "sender".color(LogColor::Gray), payer.pubkey());
                log_success("Signature", format!("{sig}\n{sender_info}"));
            }
            Ok(sig)
        }
        Err(error) => {
            log_simulation_failure(&error);
            log_info("Payer", payer.pubkey());

            Err(error).context("Failed transaction submission")
        }
    }
}

/// Surfaces the preflight simulation error and program logs when a submission fails, instead
/// of the bare client error.
pub fn log_simulation_failure(error: &ClientError) {
    use solana_client::rpc_request::{RpcError::RpcResponseError, RpcResponseErrorData};

    if let ClientErrorKind::RpcError(RpcResponseError {
        data:
            RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                err,
                logs,
                ..
            }),
        ..
    }) = error.kind()
    {
        if let Some(err) = err {
            log_error("Preflight", err);
        }
        if let Some(logs) = logs {
            for line in logs {
                log_info("Program log", line);
            }
        }
    } else {
        log_error("Client", error);
    }
}
