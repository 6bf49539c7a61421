//! Chronograph Extractor
use alloy::providers::{Provider, ProviderBuilder};
use alloy_network_primitives::TransactionResponse;
use alloy_rpc_types_eth::{Block as RpcBlock, BlockNumberOrTag, Transaction as RpcTransaction};
use async_trait::async_trait;
use chainio::{
    ChainDataSource, ConnectionUnavailable, DefaultProvider, FetchError,
    error::{redact, scrub},
};
use derive_more::Debug;
use primitives::block::{Block, Transaction};
use tracing::{debug, info};
use url::Url;

/// Reads blocks from an Ethereum JSON-RPC endpoint over HTTP.
#[derive(Debug)]
pub struct Extractor {
    #[debug(skip)]
    provider: DefaultProvider,
    #[debug(skip)]
    url: Url,
    endpoint: String,
}

impl Extractor {
    /// Create an extractor for `rpc_url` without contacting it.
    pub fn new(rpc_url: Url) -> Self {
        let endpoint = redact(&rpc_url);
        let provider = ProviderBuilder::new().connect_http(rpc_url.clone());
        Self { provider, url: rpc_url, endpoint }
    }

    /// Create an extractor and check that the endpoint answers.
    ///
    /// Fails with [`ConnectionUnavailable`] when the chain head cannot be read.
    pub async fn connect(rpc_url: Url) -> Result<Self, ConnectionUnavailable> {
        let extractor = Self::new(rpc_url);
        match extractor.provider.get_block_number().await {
            Ok(head) => {
                info!(endpoint = %extractor.endpoint, head, "Connected to chain data source");
                Ok(extractor)
            }
            Err(e) => Err(ConnectionUnavailable::new(&extractor.url, &e.to_string())),
        }
    }

    /// Scheme and host of the endpoint in use.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn scrubbed<E: ToString>(&self, error: E) -> String {
        scrub(&error.to_string(), &self.url)
    }
}

#[async_trait]
impl ChainDataSource for Extractor {
    async fn current_height(&self) -> Result<u64, FetchError> {
        self.provider.get_block_number().await.map_err(|e| FetchError::Head(self.scrubbed(e)))
    }

    async fn get_block(
        &self,
        height: u64,
        include_transactions: bool,
    ) -> Result<Block, FetchError> {
        let request = self.provider.get_block_by_number(BlockNumberOrTag::Number(height));
        let request = if include_transactions { request.full() } else { request.hashes() };

        let block = request
            .await
            .map_err(|e| FetchError::Rpc { height, reason: self.scrubbed(e) })?
            .ok_or(FetchError::NotFound(height))?;

        debug!(height, txs = block.transactions.len(), "Fetched block");
        convert_block(height, &block, include_transactions)
    }
}

/// Reduce an RPC block to the senders and recipients of its transactions.
fn convert_block(
    height: u64,
    block: &RpcBlock,
    include_transactions: bool,
) -> Result<Block, FetchError> {
    if !include_transactions {
        return Ok(Block::new(height, Vec::new()));
    }
    if block.transactions.is_hashes() && !block.transactions.is_empty() {
        return Err(FetchError::MissingBodies(height));
    }

    let transactions = block.transactions.txns().map(convert_transaction).collect();
    Ok(Block::new(height, transactions))
}

fn convert_transaction(tx: &RpcTransaction) -> Transaction {
    Transaction::new(TransactionResponse::from(tx), alloy_consensus::Transaction::to(tx))
}
