use std::str::FromStr;

use alloy_primitives::Address;
use alloy_primitives::B256;
use api::types::address::AddressOverview;
use api::types::address::TransferDirection;
use api::units::format_balance;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::action_link::ActionLink;
use crate::components::empty_state::EmptyState;
use crate::components::hash_display::DetailRow;
use crate::components::hash_display::HashDisplay;
use crate::components::pico::Badge;
use crate::components::pico::BadgeKind;
use crate::components::pico::Card;
use crate::components::toast::use_toaster;
use crate::format;
use crate::hooks::use_fetch_notifier::use_fetch_notifier;
use crate::Screen;

#[component]
fn AddressLookup(initial: String) -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut toaster = use_toaster();
    let mut lookup_input = use_signal(move || initial.clone());

    rsx! {
        Card {
            h3 { "Address Lookup" }
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    let input_str = lookup_input.read().trim().to_string();
                    match Address::from_str(&input_str) {
                        Ok(address) => active_screen.set(Screen::Address(Some(address))),
                        Err(e) => {
                            dioxus_logger::tracing::warn!("invalid address input {input_str}: {e}");
                            toaster.error("Invalid address", "Please enter a valid Ethereum address");
                        }
                    }
                },
                div {
                    role: "group",
                    input {
                        r#type: "text",
                        placeholder: "0x...",
                        value: "{lookup_input}",
                        oninput: move |event| lookup_input.set(event.value()),
                    }
                    button { r#type: "submit", "Search" }
                }
            }
        }
    }
}

/// One table row of the transfers list.
#[derive(Clone, PartialEq)]
struct TransferRow {
    hash: B256,
    block_number: u64,
    badge: BadgeKind,
    direction: &'static str,
    counterparty: Option<Address>,
    amount: String,
}

fn transfer_rows(overview: &AddressOverview) -> Vec<TransferRow> {
    let owner = overview.address;
    overview
        .transfers
        .iter()
        .map(|transfer| {
            let direction = transfer.direction(owner);
            let (badge, label) = match direction {
                TransferDirection::In => (BadgeKind::Success, "IN"),
                TransferDirection::Out => (BadgeKind::Danger, "OUT"),
                TransferDirection::ToSelf => (BadgeKind::Neutral, "SELF"),
            };
            let counterparty = match direction {
                TransferDirection::In => Some(transfer.from),
                _ => transfer.to,
            };
            TransferRow {
                hash: transfer.hash,
                block_number: transfer.block_number,
                badge,
                direction: label,
                counterparty,
                amount: transfer.amount_label(),
            }
        })
        .collect()
}

#[component]
fn Transfers(overview: AddressOverview) -> Element {
    let rows = transfer_rows(&overview);

    rsx! {
        Card {
            h4 { "Recent Transfers" }
            if rows.is_empty() {
                EmptyState {
                    title: "No transfers found",
                    description: "Recent transfers of this address will show up here.",
                }
            } else {
                div {
                    class: "overflow-auto",
                    table {
                        thead {
                            tr {
                                th { "Hash" }
                                th { "Block" }
                                th { "" }
                                th { "Counterparty" }
                                th { "Amount" }
                            }
                        }
                        tbody {
                            for (i, row) in rows.into_iter().enumerate() {
                                tr {
                                    key: "{i}",
                                    td {
                                        HashDisplay {
                                            value: row.hash.to_string(),
                                            to: Screen::Transaction(row.hash),
                                        }
                                    }
                                    td {
                                        ActionLink {
                                            to: Screen::Block(row.block_number),
                                            "{row.block_number}"
                                        }
                                    }
                                    td { Badge { kind: row.badge, "{row.direction}" } }
                                    td {
                                        if let Some(other) = row.counterparty {
                                            HashDisplay {
                                                value: other.to_string(),
                                                head: 6,
                                                tail: 4,
                                                to: Screen::Address(Some(other)),
                                            }
                                        } else {
                                            em { "Contract creation" }
                                        }
                                    }
                                    td { "{row.amount}" }
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
fn AddressBody(overview: AddressOverview) -> Element {
    let native = overview.chain.native_currency();
    let fiat_value = overview
        .fiat_value
        .map(|v| format!("≈ {}", v.to_string_with_symbol()));

    rsx! {
        Card {
            h3 { "Address" }
            DetailRow {
                label: "Address",
                HashDisplay { value: overview.address.to_string(), head: 42, tail: 0 }
            }
            DetailRow {
                label: "Balance",
                "{format_balance(overview.balance)} {native}"
                if let Some(fiat_value) = fiat_value {
                    br {}
                    small { "{fiat_value}" }
                }
            }
            DetailRow {
                label: "Transactions",
                {format::grouped(overview.transaction_count)}
            }
        }
        Transfers { overview: overview.clone() }
    }
}

#[component]
pub fn AddressScreen(address: Option<Address>) -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let mut notifier = use_fetch_notifier();

    let mut address_resource = use_resource(move || async move {
        let chain = (app_state_mut.chain)();
        match address {
            Some(address) => Some(api::address_overview(chain, address).await),
            None => None,
        }
    });

    use_effect(move || {
        if let Some(Some(result)) = &*address_resource.read() {
            notifier.check_result_ref("address data", result);
        }
    });

    let initial = address.map(|a| a.to_string()).unwrap_or_default();

    rsx! {
        AddressLookup { initial }
        match &*address_resource.read() {
            Some(None) => rsx! {
                EmptyState {
                    title: "Look up an address",
                    description: "Enter an address to see its balance and recent transfers.",
                    icon: rsx! { "🔎" },
                }
            },
            None => rsx! {
                Card {
                    p { "Loading address data..." }
                    progress {}
                }
            },
            Some(Some(Err(e))) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load address data: {e}" }
                    button { onclick: move |_| address_resource.restart(), "Retry" }
                }
            },
            Some(Some(Ok(overview))) => rsx! {
                AddressBody { overview: overview.clone() }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use api::chain::Chain;
    use api::types::address::AssetTransfer;

    use super::*;

    fn transfer(from: Address, to: Option<Address>) -> AssetTransfer {
        AssetTransfer {
            hash: B256::repeat_byte(1),
            block_number: 7,
            from,
            to,
            value: Some(1.5),
            asset: Some("ETH".to_string()),
            category: "external".to_string(),
        }
    }

    #[test]
    fn rows_show_the_other_party() {
        let owner = Address::repeat_byte(0xaa);
        let other = Address::repeat_byte(0xbb);
        let overview = AddressOverview {
            chain: Chain::Ethereum,
            address: owner,
            balance: U256::ZERO,
            transaction_count: 2,
            fiat_value: None,
            transfers: vec![transfer(other, Some(owner)), transfer(owner, Some(other))],
        };

        let rows = transfer_rows(&overview);
        assert_eq!(rows[0].direction, "IN");
        assert_eq!(rows[0].counterparty, Some(other));
        assert_eq!(rows[1].direction, "OUT");
        assert_eq!(rows[1].counterparty, Some(other));
        assert_eq!(rows[1].amount, "1.5 ETH");
    }
}
