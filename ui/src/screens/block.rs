use alloy_primitives::U256;
use api::types::block::BlockDetails;
use api::units::format_gwei;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::action_link::ActionLink;
use crate::components::empty_state::EmptyState;
use crate::components::hash_display::DetailRow;
use crate::components::hash_display::HashDisplay;
use crate::components::pico::Card;
use crate::format;
use crate::hooks::use_fetch_notifier::use_fetch_notifier;
use crate::Screen;

#[component]
fn BlockTransactions(block: BlockDetails) -> Element {
    rsx! {
        Card {
            h4 { "Transactions ({block.transactions.len()})" }
            if block.transactions.is_empty() {
                EmptyState { title: "No transactions in this block" }
            } else {
                div {
                    class: "overflow-auto",
                    table {
                        thead {
                            tr {
                                th { "#" }
                                th { "Hash" }
                                th { "From" }
                                th { "To" }
                            }
                        }
                        tbody {
                            for tx in block.transactions {
                                tr {
                                    key: "{tx.hash}",
                                    td { "{tx.index}" }
                                    td {
                                        HashDisplay {
                                            value: tx.hash.to_string(),
                                            to: Screen::Transaction(tx.hash),
                                        }
                                    }
                                    td {
                                        if let Some(from) = tx.from {
                                            HashDisplay {
                                                value: from.to_string(),
                                                head: 6,
                                                tail: 4,
                                                to: Screen::Address(Some(from)),
                                            }
                                        } else {
                                            "-"
                                        }
                                    }
                                    td {
                                        if let Some(to) = tx.to {
                                            HashDisplay {
                                                value: to.to_string(),
                                                head: 6,
                                                tail: 4,
                                                to: Screen::Address(Some(to)),
                                            }
                                        } else {
                                            em { "Contract creation" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BlockScreen(number: u64) -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let mut notifier = use_fetch_notifier();

    let mut block_resource = use_resource(move || async move {
        let chain = (app_state_mut.chain)();
        api::block_details(chain, number).await
    });

    use_effect(move || {
        if let Some(result) = &*block_resource.read() {
            notifier.check_result_ref("block data", result);
        }
    });

    rsx! {
        ActionLink { to: Screen::Dashboard, "← Back to Dashboard" }
        match &*block_resource.read() {
            None => rsx! {
                Card {
                    h3 { "Block #{number}" }
                    p { "Loading block details..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load block data: {e}" }
                    button { onclick: move |_| block_resource.restart(), "Retry" }
                }
            },
            Some(Ok(block)) => {
                let timestamp = format!(
                    "{} ({})",
                    format::utc_timestamp(block.timestamp),
                    format::time_ago(block.timestamp, format::now_secs())
                );
                let gas_used = format!(
                    "{} ({:.2}%)",
                    format::grouped(block.gas_used),
                    block.gas_used_percent()
                );
                let gas_limit = format::grouped(block.gas_limit);
                let base_fee = block
                    .base_fee_per_gas
                    .map(|fee| format!("{} gwei", format_gwei(U256::from(fee))))
                    .unwrap_or_else(|| api::market::NOT_AVAILABLE.to_string());
                rsx! {
                    Card {
                        h3 { "Block #{block.number}" }
                        DetailRow {
                            label: "Block Hash",
                            HashDisplay { value: block.hash.to_string() }
                        }
                        DetailRow {
                            label: "Parent Hash",
                            if let Some(parent) = block.parent_number() {
                                HashDisplay {
                                    value: block.parent_hash.to_string(),
                                    to: Screen::Block(parent),
                                }
                            } else {
                                HashDisplay { value: block.parent_hash.to_string() }
                            }
                        }
                        DetailRow {
                            label: "Timestamp",
                            "{timestamp}"
                        }
                        DetailRow {
                            label: "Miner",
                            HashDisplay {
                                value: block.miner.to_string(),
                                to: Screen::Address(Some(block.miner)),
                            }
                        }
                        DetailRow {
                            label: "Gas Used",
                            "{gas_used}"
                        }
                        DetailRow { label: "Gas Limit", "{gas_limit}" }
                        DetailRow { label: "Base Fee", "{base_fee}" }
                    }
                    BlockTransactions { block: block.clone() }
                }
            }
        }
    }
}
