use alloy_primitives::Address;
use alloy_primitives::B256;
use alloy_primitives::U256;
use api::chain::Chain;
use api::config::ExplorerConfig;
use api::evm_rpc::RpcError;
use api::explorer::Explorer;
use api::explorer::ExplorerError;
use api::fiat_currency::FiatCurrency;
use api::prefs::display_preference::DisplayPreference;
use api::price_history::TimeFilter;
use api::price_providers::PriceProviderKind;
use serde_json::json;
use serde_json::Value;
use wiremock::matchers::body_partial_json;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

const HEAD: u64 = 100;

fn explorer(rpc: &MockServer, services: &MockServer) -> Explorer {
    Explorer::new(ExplorerConfig {
        alchemy_api_key: "test".to_string(),
        evm_rpc_url: Some(rpc.uri()),
        coingecko_api_key: None,
        coingecko_url: services.uri(),
        coinpaprika_url: services.uri(),
        blockstream_url: services.uri(),
        visit_counter_url: services.uri(),
        visit_counter_key: "test".to_string(),
    })
}

fn rpc_result(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"jsonrpc": "2.0", "id": 1, "result": result}))
}

fn rpc_error(code: i64, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": {"code": code, "message": message}
    }))
}

async fn mock_method(server: &MockServer, rpc_method: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": rpc_method})))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mock_block(server: &MockServer, number: u64, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "eth_getBlockByNumber",
            "params": [format!("{number:#x}")]
        })))
        .respond_with(response)
        .mount(server)
        .await;
}

fn block(number: u64) -> Value {
    json!({
        "number": format!("{number:#x}"),
        "hash": B256::repeat_byte(number as u8),
        "parentHash": B256::repeat_byte(number as u8 - 1),
        "timestamp": format!("{:#x}", 1_700_000_000 + number * 12),
        "miner": Address::repeat_byte(0x11),
        "gasUsed": "0x5208",
        "gasLimit": "0x1c9c380",
        "transactions": [B256::repeat_byte(0xf0)]
    })
}

/// Head, chain id and gas price plus a full window of blocks below `HEAD`.
async fn mock_healthy_chain(server: &MockServer) {
    mock_method(server, "eth_blockNumber", rpc_result(json!(format!("{HEAD:#x}")))).await;
    mock_method(server, "eth_chainId", rpc_result(json!("0x1"))).await;
    mock_method(server, "eth_gasPrice", rpc_result(json!("0x3b9aca00"))).await;
    for number in HEAD - 5..=HEAD {
        mock_block(server, number, rpc_result(block(number))).await;
    }
}

#[tokio::test]
async fn dashboard_degrades_price_data_when_price_service_fails() {
    let rpc = MockServer::start().await;
    let services = MockServer::start().await;
    mock_healthy_chain(&rpc).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&services)
        .await;

    let display = DisplayPreference::FiatEnabled {
        fiat: FiatCurrency::GBP,
        provider: PriceProviderKind::CoinGecko,
    };
    let overview = explorer(&rpc, &services)
        .dashboard_overview(Chain::Avalanche, TimeFilter::Day, display)
        .await
        .unwrap();

    assert_eq!(overview.spot_price, None);
    assert!(overview.price_history.is_empty());
    assert!(overview.market.is_none());
    assert_eq!(overview.fiat, Some(FiatCurrency::GBP));
    assert_eq!(overview.network.block_number, HEAD);
    assert_eq!(overview.network.chain_id, Some(1));
    assert_eq!(overview.gas_price, Some(U256::from(1_000_000_000u64)));
    assert_eq!(overview.latest_blocks.len(), 6);
    assert_eq!(overview.average_block_time, Some(12.0));
}

#[tokio::test]
async fn dashboard_fails_when_chain_head_is_unreachable() {
    let rpc = MockServer::start().await;
    let services = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&rpc)
        .await;

    let err = explorer(&rpc, &services)
        .dashboard_overview(Chain::Ethereum, TimeFilter::Day, DisplayPreference::NativeOnly)
        .await
        .unwrap_err();
    assert!(matches!(err, ExplorerError::Rpc(RpcError::Transport(_))));
}

#[tokio::test]
async fn dashboard_skips_blocks_the_node_cannot_serve() {
    let rpc = MockServer::start().await;
    let services = MockServer::start().await;
    mock_method(&rpc, "eth_blockNumber", rpc_result(json!(format!("{HEAD:#x}")))).await;
    mock_method(&rpc, "eth_chainId", rpc_result(json!("0x89"))).await;
    mock_method(&rpc, "eth_gasPrice", rpc_error(-32000, "gas price unavailable")).await;
    mock_block(&rpc, HEAD, rpc_result(block(HEAD))).await;
    mock_block(&rpc, HEAD - 1, rpc_result(block(HEAD - 1))).await;
    mock_block(&rpc, HEAD - 2, rpc_result(json!(null))).await;
    mock_block(&rpc, HEAD - 3, rpc_error(-32000, "header not found")).await;
    mock_block(&rpc, HEAD - 4, rpc_result(block(HEAD - 4))).await;
    mock_block(&rpc, HEAD - 5, rpc_result(block(HEAD - 5))).await;

    let overview = explorer(&rpc, &services)
        .dashboard_overview(Chain::Polygon, TimeFilter::Day, DisplayPreference::NativeOnly)
        .await
        .unwrap();

    let numbers: Vec<u64> = overview.latest_blocks.iter().map(|b| b.number).collect();
    assert_eq!(numbers, vec![HEAD, HEAD - 1, HEAD - 4, HEAD - 5]);
    assert_eq!(overview.network.chain_id, Some(137));
    assert_eq!(overview.gas_price, None);
}

#[tokio::test]
async fn bitcoin_dashboard_reads_blockstream_height() {
    let rpc = MockServer::start().await;
    let services = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocks/tip/height"))
        .respond_with(ResponseTemplate::new(200).set_body_string("871234"))
        .mount(&services)
        .await;
    Mock::given(method("POST"))
        .respond_with(rpc_result(json!("0x1")))
        .expect(0)
        .mount(&rpc)
        .await;

    let overview = explorer(&rpc, &services)
        .dashboard_overview(Chain::Bitcoin, TimeFilter::Day, DisplayPreference::NativeOnly)
        .await
        .unwrap();

    assert_eq!(overview.network.block_number, 871_234);
    assert_eq!(overview.network.chain_id, None);
    assert!(overview.latest_blocks.is_empty());
}

#[tokio::test]
async fn address_transfers_degrade_to_empty() {
    let rpc = MockServer::start().await;
    let services = MockServer::start().await;
    mock_method(&rpc, "eth_getBalance", rpc_result(json!("0xde0b6b3a7640000"))).await;
    mock_method(&rpc, "eth_getTransactionCount", rpc_result(json!("0x5"))).await;
    mock_method(
        &rpc,
        "alchemy_getAssetTransfers",
        rpc_error(-32601, "the method alchemy_getAssetTransfers does not exist"),
    )
    .await;

    let address = Address::repeat_byte(0xaa);
    let overview = explorer(&rpc, &services)
        .address_overview(Chain::Ethereum, address, DisplayPreference::NativeOnly)
        .await
        .unwrap();

    assert_eq!(overview.address, address);
    assert_eq!(overview.balance, U256::from(1_000_000_000_000_000_000u64));
    assert_eq!(overview.transaction_count, 5);
    assert!(overview.transfers.is_empty());
    assert!(overview.fiat_value.is_none());
}

#[tokio::test]
async fn transaction_confirmations_include_its_block() {
    let rpc = MockServer::start().await;
    let services = MockServer::start().await;
    let hash = B256::repeat_byte(0x42);
    mock_method(
        &rpc,
        "eth_getTransactionByHash",
        rpc_result(json!({
            "hash": hash,
            "blockNumber": "0x64",
            "transactionIndex": "0x0",
            "from": Address::repeat_byte(0xaa),
            "to": Address::repeat_byte(0xbb),
            "value": "0x0",
            "gasPrice": "0x3b9aca00",
            "nonce": "0x7",
            "input": "0x"
        })),
    )
    .await;
    mock_method(
        &rpc,
        "eth_getTransactionReceipt",
        rpc_result(json!({"status": "0x1", "gasUsed": "0x5208", "blockNumber": "0x64"})),
    )
    .await;
    mock_method(&rpc, "eth_blockNumber", rpc_result(json!("0x68"))).await;

    let details = explorer(&rpc, &services)
        .transaction_details(Chain::Base, hash)
        .await
        .unwrap();

    assert_eq!(details.block_number, Some(100));
    assert_eq!(details.nonce, 7);
    let receipt = details.receipt.unwrap();
    assert_eq!(receipt.confirmations, Some(5));
    assert_eq!(receipt.success, Some(true));
    assert_eq!(receipt.gas_used, 21_000);
}

#[tokio::test]
async fn rpc_override_does_not_apply_to_bitcoin() {
    let rpc = MockServer::start().await;
    let services = MockServer::start().await;

    let err = explorer(&rpc, &services)
        .block_details(Chain::Bitcoin, 1)
        .await
        .unwrap_err();
    assert!(matches!(err, ExplorerError::UnsupportedChain(Chain::Bitcoin)));
}
