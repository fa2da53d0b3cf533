use std::str::FromStr;

use api::market::NOT_AVAILABLE;
use api::price_history::TimeFilter;
use api::types::block::BlockSummary;
use api::types::dashboard::DashboardOverview;
use api::units::format_gwei;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::action_link::ActionLink;
use crate::components::chart::BarChart;
use crate::components::chart::LineChart;
use crate::components::empty_state::EmptyState;
use crate::components::hash_display::HashDisplay;
use crate::components::metric_card::MetricCard;
use crate::components::metric_card::Trend;
use crate::components::pico::Card;
use crate::components::search_bar::SearchBar;
use crate::components::toast::use_toaster;
use crate::format;
use crate::hooks::use_fetch_notifier::use_fetch_notifier;
use crate::Screen;

/// The headline figures.
#[component]
fn Metrics(overview: DashboardOverview) -> Element {
    let chain = overview.network.chain;
    let market = overview.market;

    let price = match (overview.spot_price, overview.fiat) {
        (Some(p), Some(fiat)) => format::price(p, fiat),
        _ => NOT_AVAILABLE.to_string(),
    };
    let change = market.map(|m| m.price_change_label());
    let trend = market
        .and_then(|m| m.is_positive_change())
        .map(|up| if up { Trend::Up } else { Trend::Down });
    let market_cap = market
        .map(|m| m.market_cap_label())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let volume = market
        .map(|m| m.volume_24h_label())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let supply = market
        .map(|m| m.total_supply_label())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let gas = overview
        .gas_price
        .map(|g| format!("{} gwei", format_gwei(g)))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    rsx! {
        div {
            class: "metric-grid",
            MetricCard {
                title: format!("{} Price", chain.native_currency()),
                value: price,
                icon: "💲",
                change,
                trend,
            }
            MetricCard { title: "Market Cap", value: market_cap, icon: "🏦" }
            MetricCard { title: "24h Volume", value: volume, icon: "📊" }
            MetricCard {
                title: "Latest Block",
                value: format::grouped(overview.network.block_number),
                icon: "🧱",
            }
            MetricCard {
                title: "Avg Block Time",
                value: format::block_time(overview.average_block_time),
                icon: "⏱",
            }
            MetricCard { title: "Total Supply", value: supply, icon: "🪙" }
            MetricCard {
                title: "Network Status",
                value: "Online",
                icon: "🟢",
                change: format!("Chain ID {}", overview.network.chain_id_label()),
            }
            MetricCard { title: "TPS", value: chain.tps_label().to_string(), icon: "⚡" }
            MetricCard { title: "Gas Price", value: gas, icon: "⛽" }
        }
    }
}

/// Price line for the selected window and transactions per listed block.
#[component]
fn Charts(overview: DashboardOverview) -> Element {
    let prices: Vec<f64> = overview.price_history.iter().map(|p| p.price).collect();
    let stamp = |ms: i64| format::utc_timestamp(u64::try_from(ms / 1000).unwrap_or_default());
    let first_label = overview
        .price_history
        .first()
        .map(|p| stamp(p.timestamp_ms))
        .unwrap_or_default();
    let last_label = overview
        .price_history
        .last()
        .map(|p| stamp(p.timestamp_ms))
        .unwrap_or_default();

    // oldest block on the left
    let blocks: Vec<&BlockSummary> = overview.latest_blocks.iter().rev().collect();
    let tx_counts: Vec<f64> = blocks.iter().map(|b| b.transaction_count as f64).collect();
    let block_labels: Vec<String> = blocks.iter().map(|b| format!("#{}", b.number)).collect();

    rsx! {
        div {
            class: "two-column",
            Card {
                h4 { "Price ({overview.time_filter})" }
                if prices.is_empty() {
                    EmptyState {
                        title: "No price data",
                        description: "Price history is unavailable right now.",
                    }
                } else {
                    LineChart { values: prices, first_label, last_label }
                }
            }
            Card {
                h4 { "Transactions per Block" }
                if tx_counts.is_empty() {
                    EmptyState {
                        title: "No block data",
                        description: "Per block figures are only available for EVM networks.",
                    }
                } else {
                    BarChart { values: tx_counts, labels: block_labels }
                }
            }
        }
    }
}

#[component]
fn LatestBlocks(blocks: Vec<BlockSummary>, now: u64) -> Element {
    rsx! {
        Card {
            h4 { "Latest Blocks" }
            if blocks.is_empty() {
                EmptyState { title: "No blocks" }
            }
            for block in blocks {
                div {
                    key: "{block.number}",
                    class: "list-row",
                    div {
                        ActionLink {
                            to: Screen::Block(block.number),
                            "#{block.number}"
                        }
                        br {}
                        small { {format::time_ago(block.timestamp, now)} }
                    }
                    div {
                        small { "Miner " }
                        HashDisplay {
                            value: block.miner.to_string(),
                            head: 6,
                            tail: 4,
                            to: Screen::Address(Some(block.miner)),
                        }
                        br {}
                        small { "{block.transaction_count} txns" }
                    }
                }
            }
        }
    }
}

#[component]
fn LatestTransactions(overview: DashboardOverview, now: u64) -> Element {
    let transactions = overview.latest_transactions();

    rsx! {
        Card {
            h4 { "Latest Transactions" }
            if transactions.is_empty() {
                EmptyState { title: "No transactions" }
            }
            for tx in transactions {
                div {
                    key: "{tx.hash}",
                    class: "list-row",
                    HashDisplay {
                        value: tx.hash.to_string(),
                        to: Screen::Transaction(tx.hash),
                    }
                    div {
                        small { "Block " }
                        ActionLink {
                            to: Screen::Block(tx.block_number),
                            "#{tx.block_number}"
                        }
                        br {}
                        small { {format::time_ago(tx.timestamp, now)} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DashboardScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut toaster = use_toaster();
    let mut notifier = use_fetch_notifier();
    let mut time_filter = use_signal(TimeFilter::default);
    let mut last_updated = use_signal(|| None::<u64>);

    let mut overview = use_resource(move || async move {
        let chain = (app_state_mut.chain)();
        let filter = time_filter();
        let result = api::dashboard_overview(chain, filter).await;
        if result.is_ok() {
            last_updated.set(Some(format::now_secs()));
        }
        result
    });

    use_effect(move || {
        if let Some(result) = &*overview.read() {
            notifier.check_result_ref("blockchain data", result);
        }
    });

    // shown once per session
    use_effect(move || {
        if !*app_state_mut.api_notice_shown.peek() {
            app_state_mut.api_notice_shown.set(true);
            toaster.info(
                "Free API Notice",
                "This service uses free APIs from Alchemy and CoinGecko. If you see 'N/A' values, please wait and refresh, free APIs have rate limits.",
            );
        }
    });

    let chain = (app_state_mut.chain)();
    let updated_label = last_updated()
        .map(format::utc_clock)
        .unwrap_or_else(|| "never".to_string());
    let is_loading = overview.read().is_none();
    let fiat_disabled = app_state
        .user_prefs
        .display_preference()
        .is_native_only();

    rsx! {
        SearchBar {}
        div {
            class: "list-row",
            h3 { style: "margin: 0;", "{chain} Overview" }
            div {
                role: "group",
                style: "width: auto; margin: 0;",
                select {
                    "aria-label": "Time range",
                    onchange: move |evt| {
                        let filter = TimeFilter::from_str(&evt.value()).unwrap_or_default();
                        dioxus_logger::tracing::debug!("time filter changed to {filter}");
                        time_filter.set(filter);
                    },
                    for filter in TimeFilter::iter() {
                        option {
                            value: filter.label(),
                            selected: filter == time_filter(),
                            "{filter.label()}"
                        }
                    }
                }
                button {
                    class: "secondary",
                    disabled: is_loading,
                    "aria-busy": if is_loading { "true" } else { "false" },
                    onclick: move |_| overview.restart(),
                    "Refresh"
                }
            }
        }
        small { "Last updated: {updated_label}" }
        if fiat_disabled {
            small { ". Fiat prices are turned off." }
        }

        match &*overview.read() {
            None => rsx! {
                Card {
                    p { "Loading..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load: {e}" }
                    button {
                        onclick: move |_| overview.restart(),
                        "Retry"
                    }
                }
            },
            Some(Ok(data)) => {
                let now = format::now_secs();
                rsx! {
                    Metrics { overview: data.clone() }
                    Charts { overview: data.clone() }
                    if !chain.is_evm() {
                        Card {
                            p {
                                "Only the block height is available for {chain}. Block and transaction lists cover EVM networks."
                            }
                        }
                    }
                    div {
                        class: "two-column",
                        LatestBlocks { blocks: data.latest_blocks.clone(), now }
                        LatestTransactions { overview: data.clone(), now }
                    }
                }
            }
        }
    }
}
