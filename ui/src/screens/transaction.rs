use alloy_primitives::B256;
use api::types::transaction::TransactionDetails;
use api::types::transaction::TxStatus;
use api::units::format_gwei;
use api::units::format_native;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::action_link::ActionLink;
use crate::components::hash_display::DetailRow;
use crate::components::hash_display::HashDisplay;
use crate::components::pico::Badge;
use crate::components::pico::BadgeKind;
use crate::components::pico::Card;
use crate::components::pico::CopyButton;
use crate::format;
use crate::hooks::use_fetch_notifier::use_fetch_notifier;
use crate::Screen;

#[component]
fn StatusBadge(status: TxStatus) -> Element {
    let (kind, label) = match status {
        TxStatus::Success => (BadgeKind::Success, "✓ Success"),
        TxStatus::Failed => (BadgeKind::Danger, "✗ Failed"),
        TxStatus::Pending => (BadgeKind::Neutral, "Pending"),
    };
    rsx! { Badge { kind, "{label}" } }
}

#[component]
fn TransactionBody(tx: TransactionDetails, native: &'static str) -> Element {
    let gas_price = tx
        .gas_price
        .map(|g| format!("{} gwei", format_gwei(g)))
        .unwrap_or_else(|| api::market::NOT_AVAILABLE.to_string());
    let has_input = tx.has_input();

    rsx! {
        Card {
            header {
                class: "list-row",
                h3 { style: "margin: 0;", "Transaction Details" }
                StatusBadge { status: tx.status() }
            }
            DetailRow {
                label: "Transaction Hash",
                HashDisplay { value: tx.hash.to_string() }
            }
            DetailRow {
                label: "Block",
                if let Some(number) = tx.block_number {
                    ActionLink { to: Screen::Block(number), "#{number}" }
                } else {
                    em { "Pending" }
                }
            }
            DetailRow {
                label: "From",
                HashDisplay {
                    value: tx.from.to_string(),
                    to: Screen::Address(Some(tx.from)),
                }
            }
            DetailRow {
                label: "To",
                if tx.is_contract_creation() {
                    em { "Contract creation" }
                } else if let Some(to) = tx.to {
                    HashDisplay {
                        value: to.to_string(),
                        to: Screen::Address(Some(to)),
                    }
                }
            }
            DetailRow { label: "Value", "{format_native(tx.value)} {native}" }
            DetailRow { label: "Gas Price", "{gas_price}" }
            if let Some(receipt) = tx.receipt {
                DetailRow { label: "Gas Used", {format::grouped(receipt.gas_used)} }
                if let Some(confirmations) = receipt.confirmations {
                    DetailRow { label: "Confirmations", {format::grouped(confirmations)} }
                }
            }
            DetailRow { label: "Nonce", "{tx.nonce}" }
            if has_input {
                details {
                    summary { "Input Data" }
                    div {
                        style: "display: flex; gap: 0.5rem; align-items: flex-start;",
                        pre {
                            style: "white-space: pre-wrap; word-break: break-all; max-height: 20rem; overflow: auto; flex: 1;",
                            "{tx.input}"
                        }
                        CopyButton { text_to_copy: tx.input.clone() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TransactionScreen(hash: B256) -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let mut notifier = use_fetch_notifier();

    let mut tx_resource = use_resource(move || async move {
        let chain = (app_state_mut.chain)();
        api::transaction_details(chain, hash).await
    });

    use_effect(move || {
        if let Some(result) = &*tx_resource.read() {
            notifier.check_result_ref("transaction data", result);
        }
    });

    let native = (app_state_mut.chain)().native_currency();

    rsx! {
        ActionLink { to: Screen::Dashboard, "← Back to Dashboard" }
        match &*tx_resource.read() {
            None => rsx! {
                Card {
                    h3 { "Transaction Details" }
                    p { "Loading transaction..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load transaction: {e}" }
                    button { onclick: move |_| tx_resource.restart(), "Retry" }
                }
            },
            Some(Ok(tx)) => rsx! {
                TransactionBody { tx: tx.clone(), native }
            },
        }
    }
}
