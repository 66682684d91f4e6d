//! `eth` namespace method signatures.
//!
//! One parameter struct and result alias per method, generated from the
//! Ethereum execution API specification. Field shapes use the validated
//! value types from `ethrpc-format`.

use crate::Method;
use ethrpc_format::{Address, BlockSpec, Error, Hash, Quantity};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

/// Method names in the `eth` namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EthMethod {
    Accounts,
    BlobBaseFee,
    BlockNumber,
    Call,
    ChainId,
    Coinbase,
    CreateAccessList,
    EstimateGas,
    FeeHistory,
    GasPrice,
    GetBalance,
    GetBlockByHash,
    GetBlockByNumber,
    GetBlockReceipts,
    GetBlockTransactionCountByHash,
    GetBlockTransactionCountByNumber,
    GetCode,
    GetFilterChanges,
    GetFilterLogs,
    GetLogs,
    GetProof,
    GetStorageAt,
    GetTransactionByBlockHashAndIndex,
    GetTransactionByBlockNumberAndIndex,
    GetTransactionByHash,
    GetTransactionCount,
    GetTransactionReceipt,
    GetUncleCountByBlockHash,
    GetUncleCountByBlockNumber,
    MaxPriorityFeePerGas,
    NewBlockFilter,
    NewFilter,
    NewPendingTransactionFilter,
    SendRawTransaction,
    SendTransaction,
    Sign,
    SignTransaction,
    SimulateV1,
    Syncing,
    UninstallFilter,
}

impl EthMethod {
    /// Every method in the namespace, in wire-name order.
    pub const ALL: [EthMethod; 40] = [
        Self::Accounts,
        Self::BlobBaseFee,
        Self::BlockNumber,
        Self::Call,
        Self::ChainId,
        Self::Coinbase,
        Self::CreateAccessList,
        Self::EstimateGas,
        Self::FeeHistory,
        Self::GasPrice,
        Self::GetBalance,
        Self::GetBlockByHash,
        Self::GetBlockByNumber,
        Self::GetBlockReceipts,
        Self::GetBlockTransactionCountByHash,
        Self::GetBlockTransactionCountByNumber,
        Self::GetCode,
        Self::GetFilterChanges,
        Self::GetFilterLogs,
        Self::GetLogs,
        Self::GetProof,
        Self::GetStorageAt,
        Self::GetTransactionByBlockHashAndIndex,
        Self::GetTransactionByBlockNumberAndIndex,
        Self::GetTransactionByHash,
        Self::GetTransactionCount,
        Self::GetTransactionReceipt,
        Self::GetUncleCountByBlockHash,
        Self::GetUncleCountByBlockNumber,
        Self::MaxPriorityFeePerGas,
        Self::NewBlockFilter,
        Self::NewFilter,
        Self::NewPendingTransactionFilter,
        Self::SendRawTransaction,
        Self::SendTransaction,
        Self::Sign,
        Self::SignTransaction,
        Self::SimulateV1,
        Self::Syncing,
        Self::UninstallFilter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accounts => "eth_accounts",
            Self::BlobBaseFee => "eth_blobBaseFee",
            Self::BlockNumber => "eth_blockNumber",
            Self::Call => "eth_call",
            Self::ChainId => "eth_chainId",
            Self::Coinbase => "eth_coinbase",
            Self::CreateAccessList => "eth_createAccessList",
            Self::EstimateGas => "eth_estimateGas",
            Self::FeeHistory => "eth_feeHistory",
            Self::GasPrice => "eth_gasPrice",
            Self::GetBalance => "eth_getBalance",
            Self::GetBlockByHash => "eth_getBlockByHash",
            Self::GetBlockByNumber => "eth_getBlockByNumber",
            Self::GetBlockReceipts => "eth_getBlockReceipts",
            Self::GetBlockTransactionCountByHash => "eth_getBlockTransactionCountByHash",
            Self::GetBlockTransactionCountByNumber => "eth_getBlockTransactionCountByNumber",
            Self::GetCode => "eth_getCode",
            Self::GetFilterChanges => "eth_getFilterChanges",
            Self::GetFilterLogs => "eth_getFilterLogs",
            Self::GetLogs => "eth_getLogs",
            Self::GetProof => "eth_getProof",
            Self::GetStorageAt => "eth_getStorageAt",
            Self::GetTransactionByBlockHashAndIndex => "eth_getTransactionByBlockHashAndIndex",
            Self::GetTransactionByBlockNumberAndIndex => "eth_getTransactionByBlockNumberAndIndex",
            Self::GetTransactionByHash => "eth_getTransactionByHash",
            Self::GetTransactionCount => "eth_getTransactionCount",
            Self::GetTransactionReceipt => "eth_getTransactionReceipt",
            Self::GetUncleCountByBlockHash => "eth_getUncleCountByBlockHash",
            Self::GetUncleCountByBlockNumber => "eth_getUncleCountByBlockNumber",
            Self::MaxPriorityFeePerGas => "eth_maxPriorityFeePerGas",
            Self::NewBlockFilter => "eth_newBlockFilter",
            Self::NewFilter => "eth_newFilter",
            Self::NewPendingTransactionFilter => "eth_newPendingTransactionFilter",
            Self::SendRawTransaction => "eth_sendRawTransaction",
            Self::SendTransaction => "eth_sendTransaction",
            Self::Sign => "eth_sign",
            Self::SignTransaction => "eth_signTransaction",
            Self::SimulateV1 => "eth_simulateV1",
            Self::Syncing => "eth_syncing",
            Self::UninstallFilter => "eth_uninstallFilter",
        }
    }
}

impl FromStr for EthMethod {
    type Err = Error;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        match s {
            "eth_accounts" => Ok(Self::Accounts),
            "eth_blobBaseFee" => Ok(Self::BlobBaseFee),
            "eth_blockNumber" => Ok(Self::BlockNumber),
            "eth_call" => Ok(Self::Call),
            "eth_chainId" => Ok(Self::ChainId),
            "eth_coinbase" => Ok(Self::Coinbase),
            "eth_createAccessList" => Ok(Self::CreateAccessList),
            "eth_estimateGas" => Ok(Self::EstimateGas),
            "eth_feeHistory" => Ok(Self::FeeHistory),
            "eth_gasPrice" => Ok(Self::GasPrice),
            "eth_getBalance" => Ok(Self::GetBalance),
            "eth_getBlockByHash" => Ok(Self::GetBlockByHash),
            "eth_getBlockByNumber" => Ok(Self::GetBlockByNumber),
            "eth_getBlockReceipts" => Ok(Self::GetBlockReceipts),
            "eth_getBlockTransactionCountByHash" => Ok(Self::GetBlockTransactionCountByHash),
            "eth_getBlockTransactionCountByNumber" => Ok(Self::GetBlockTransactionCountByNumber),
            "eth_getCode" => Ok(Self::GetCode),
            "eth_getFilterChanges" => Ok(Self::GetFilterChanges),
            "eth_getFilterLogs" => Ok(Self::GetFilterLogs),
            "eth_getLogs" => Ok(Self::GetLogs),
            "eth_getProof" => Ok(Self::GetProof),
            "eth_getStorageAt" => Ok(Self::GetStorageAt),
            "eth_getTransactionByBlockHashAndIndex" => Ok(Self::GetTransactionByBlockHashAndIndex),
            "eth_getTransactionByBlockNumberAndIndex" => {
                Ok(Self::GetTransactionByBlockNumberAndIndex)
            }
            "eth_getTransactionByHash" => Ok(Self::GetTransactionByHash),
            "eth_getTransactionCount" => Ok(Self::GetTransactionCount),
            "eth_getTransactionReceipt" => Ok(Self::GetTransactionReceipt),
            "eth_getUncleCountByBlockHash" => Ok(Self::GetUncleCountByBlockHash),
            "eth_getUncleCountByBlockNumber" => Ok(Self::GetUncleCountByBlockNumber),
            "eth_maxPriorityFeePerGas" => Ok(Self::MaxPriorityFeePerGas),
            "eth_newBlockFilter" => Ok(Self::NewBlockFilter),
            "eth_newFilter" => Ok(Self::NewFilter),
            "eth_newPendingTransactionFilter" => Ok(Self::NewPendingTransactionFilter),
            "eth_sendRawTransaction" => Ok(Self::SendRawTransaction),
            "eth_sendTransaction" => Ok(Self::SendTransaction),
            "eth_sign" => Ok(Self::Sign),
            "eth_signTransaction" => Ok(Self::SignTransaction),
            "eth_simulateV1" => Ok(Self::SimulateV1),
            "eth_syncing" => Ok(Self::Syncing),
            "eth_uninstallFilter" => Ok(Self::UninstallFilter),
            _ => Err(Error::MethodNotFound(format!(
                "unknown eth method \"{s}\""
            ))),
        }
    }
}

impl fmt::Display for EthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct EthMethodVisitor;

impl Visitor<'_> for EthMethodVisitor {
    type Value = EthMethod;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("eth namespace method name")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        EthMethod::from_str(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for EthMethod {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(EthMethodVisitor)
    }
}

impl Serialize for EthMethod {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Parameters for `eth_accounts`.
///
/// Returns a list of addresses owned by client.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountsParams {}

pub type AccountsResult = Quantity;

impl Method for AccountsParams {
    const NAME: &'static str = "eth_accounts";
    type Result = AccountsResult;
}

/// Parameters for `eth_blobBaseFee`.
///
/// Returns the base fee per blob gas in wei.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobBaseFeeParams {}

pub type BlobBaseFeeResult = Quantity;

impl Method for BlobBaseFeeParams {
    const NAME: &'static str = "eth_blobBaseFee";
    type Result = BlobBaseFeeResult;
}

/// Parameters for `eth_blockNumber`.
///
/// Returns the number of most recent block.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockNumberParams {}

pub type BlockNumberResult = Quantity;

impl Method for BlockNumberParams {
    const NAME: &'static str = "eth_blockNumber";
    type Result = BlockNumberResult;
}

/// Parameters for `eth_call`.
///
/// Executes a new message call immediately without creating a transaction on
/// the block chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallParams {
    /// Transaction object
    pub transaction: Quantity,
    /// Block number, tag, or block hash
    pub block: BlockSpec,
}

pub type CallResult = Quantity;

impl Method for CallParams {
    const NAME: &'static str = "eth_call";
    type Result = CallResult;
}

/// Parameters for `eth_chainId`.
///
/// Returns the chain ID of the current network.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainIdParams {}

pub type ChainIdResult = Quantity;

impl Method for ChainIdParams {
    const NAME: &'static str = "eth_chainId";
    type Result = ChainIdResult;
}

/// Parameters for `eth_coinbase`.
///
/// Returns the client coinbase address.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinbaseParams {}

/// The coinbase address of the client
pub type CoinbaseResult = Address;

impl Method for CoinbaseParams {
    const NAME: &'static str = "eth_coinbase";
    type Result = CoinbaseResult;
}

/// Parameters for `eth_createAccessList`.
///
/// Generates an access list for a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccessListParams {
    /// Transaction object
    pub transaction: Quantity,
    /// Block number or tag
    pub block: Quantity,
}

pub type CreateAccessListResult = Quantity;

impl Method for CreateAccessListParams {
    const NAME: &'static str = "eth_createAccessList";
    type Result = CreateAccessListResult;
}

/// Parameters for `eth_estimateGas`.
///
/// Generates and returns an estimate of how much gas is necessary to allow
/// the transaction to complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateGasParams {
    /// Transaction object
    pub transaction: Quantity,
    /// Block number or tag
    pub block: Quantity,
}

pub type EstimateGasResult = Quantity;

impl Method for EstimateGasParams {
    const NAME: &'static str = "eth_estimateGas";
    type Result = EstimateGasResult;
}

/// Parameters for `eth_feeHistory`.
///
/// Transaction fee history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeHistoryParams {
    /// hex encoded unsigned integer
    pub block_count: Quantity,
    /// Block number or tag
    pub newest_block: Quantity,
    /// Monotonically increasing percentile values
    pub reward_percentiles: Quantity,
}

pub type FeeHistoryResult = Quantity;

impl Method for FeeHistoryParams {
    const NAME: &'static str = "eth_feeHistory";
    type Result = FeeHistoryResult;
}

/// Parameters for `eth_gasPrice`.
///
/// Returns the current price per gas in wei.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasPriceParams {}

pub type GasPriceResult = Quantity;

impl Method for GasPriceParams {
    const NAME: &'static str = "eth_gasPrice";
    type Result = GasPriceResult;
}

/// Parameters for `eth_getBalance`.
///
/// Returns the balance of the account of given address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBalanceParams {
    /// hex encoded address
    pub address: Address,
    /// Block number, tag, or block hash
    pub block: BlockSpec,
}

/// hex encoded unsigned integer
pub type GetBalanceResult = Quantity;

impl Method for GetBalanceParams {
    const NAME: &'static str = "eth_getBalance";
    type Result = GetBalanceResult;
}

/// Parameters for `eth_getBlockByHash`.
///
/// Returns information about a block by hash.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBlockByHashParams {}

pub type GetBlockByHashResult = Quantity;

impl Method for GetBlockByHashParams {
    const NAME: &'static str = "eth_getBlockByHash";
    type Result = GetBlockByHashResult;
}

/// Parameters for `eth_getBlockByNumber`.
///
/// Returns information about a block by number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBlockByNumberParams {
    /// Block number or tag
    pub block: Quantity,
}

pub type GetBlockByNumberResult = Quantity;

impl Method for GetBlockByNumberParams {
    const NAME: &'static str = "eth_getBlockByNumber";
    type Result = GetBlockByNumberResult;
}

/// Parameters for `eth_getBlockReceipts`.
///
/// Returns the receipts of a block by number or hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBlockReceiptsParams {
    /// Block number, tag, or block hash
    pub block: BlockSpec,
}

pub type GetBlockReceiptsResult = Quantity;

impl Method for GetBlockReceiptsParams {
    const NAME: &'static str = "eth_getBlockReceipts";
    type Result = GetBlockReceiptsResult;
}

/// Parameters for `eth_getBlockTransactionCountByHash`.
///
/// Returns the number of transactions in a block from a block matching the
/// given block hash.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBlockTransactionCountByHashParams {}

pub type GetBlockTransactionCountByHashResult = Quantity;

impl Method for GetBlockTransactionCountByHashParams {
    const NAME: &'static str = "eth_getBlockTransactionCountByHash";
    type Result = GetBlockTransactionCountByHashResult;
}

/// Parameters for `eth_getBlockTransactionCountByNumber`.
///
/// Returns the number of transactions in a block matching the given block
/// number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBlockTransactionCountByNumberParams {
    /// Block number or tag
    pub block: Quantity,
}

pub type GetBlockTransactionCountByNumberResult = Quantity;

impl Method for GetBlockTransactionCountByNumberParams {
    const NAME: &'static str = "eth_getBlockTransactionCountByNumber";
    type Result = GetBlockTransactionCountByNumberResult;
}

/// Parameters for `eth_getCode`.
///
/// Returns code at a given address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCodeParams {
    /// hex encoded address
    pub address: Address,
    /// Block number, tag, or block hash
    pub block: BlockSpec,
}

pub type GetCodeResult = Quantity;

impl Method for GetCodeParams {
    const NAME: &'static str = "eth_getCode";
    type Result = GetCodeResult;
}

/// Parameters for `eth_getFilterChanges`.
///
/// Polling method for the filter with the given ID (created using
/// `eth_newFilter`). Returns an array of logs, block hashes, or transaction
/// hashes since last poll, depending on the installed filter.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFilterChangesParams {}

pub type GetFilterChangesResult = Quantity;

impl Method for GetFilterChangesParams {
    const NAME: &'static str = "eth_getFilterChanges";
    type Result = GetFilterChangesResult;
}

/// Parameters for `eth_getFilterLogs`.
///
/// Returns an array of all logs matching the filter with the given ID
/// (created using `eth_newFilter`).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFilterLogsParams {}

pub type GetFilterLogsResult = Quantity;

impl Method for GetFilterLogsParams {
    const NAME: &'static str = "eth_getFilterLogs";
    type Result = GetFilterLogsResult;
}

/// Parameters for `eth_getLogs`.
///
/// Returns an array of all logs matching the specified filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLogsParams {
    /// filter
    pub filter: Quantity,
}

/// Filter results
pub type GetLogsResult = Quantity;

impl Method for GetLogsParams {
    const NAME: &'static str = "eth_getLogs";
    type Result = GetLogsResult;
}

/// Parameters for `eth_getProof`.
///
/// Returns the merkle proof for a given account and optionally some storage
/// keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProofParams {
    /// hex encoded address
    pub address: Address,
    /// Storage keys to prove
    pub storage_keys: Quantity,
    /// Block number, tag, or block hash
    pub block: BlockSpec,
}

pub type GetProofResult = Quantity;

impl Method for GetProofParams {
    const NAME: &'static str = "eth_getProof";
    type Result = GetProofResult;
}

/// Parameters for `eth_getStorageAt`.
///
/// Returns the value from a storage position at a given address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetStorageAtParams {
    /// hex encoded address
    pub address: Address,
    /// Block number, tag, or block hash
    pub block: BlockSpec,
}

pub type GetStorageAtResult = Quantity;

impl Method for GetStorageAtParams {
    const NAME: &'static str = "eth_getStorageAt";
    type Result = GetStorageAtResult;
}

/// Parameters for `eth_getTransactionByBlockHashAndIndex`.
///
/// Returns information about a transaction by block hash and transaction
/// index position.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransactionByBlockHashAndIndexParams {}

pub type GetTransactionByBlockHashAndIndexResult = Quantity;

impl Method for GetTransactionByBlockHashAndIndexParams {
    const NAME: &'static str = "eth_getTransactionByBlockHashAndIndex";
    type Result = GetTransactionByBlockHashAndIndexResult;
}

/// Parameters for `eth_getTransactionByBlockNumberAndIndex`.
///
/// Returns information about a transaction by block number and transaction
/// index position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransactionByBlockNumberAndIndexParams {
    /// Block number or tag
    pub block: Quantity,
}

pub type GetTransactionByBlockNumberAndIndexResult = Quantity;

impl Method for GetTransactionByBlockNumberAndIndexParams {
    const NAME: &'static str = "eth_getTransactionByBlockNumberAndIndex";
    type Result = GetTransactionByBlockNumberAndIndexResult;
}

/// Parameters for `eth_getTransactionByHash`.
///
/// Returns the information about a transaction requested by transaction
/// hash.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransactionByHashParams {}

pub type GetTransactionByHashResult = Quantity;

impl Method for GetTransactionByHashParams {
    const NAME: &'static str = "eth_getTransactionByHash";
    type Result = GetTransactionByHashResult;
}

/// Parameters for `eth_getTransactionCount`.
///
/// Returns the nonce of an account in the state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransactionCountParams {
    /// hex encoded address
    pub address: Address,
    /// Block number, tag, or block hash
    pub block: BlockSpec,
}

pub type GetTransactionCountResult = Quantity;

impl Method for GetTransactionCountParams {
    const NAME: &'static str = "eth_getTransactionCount";
    type Result = GetTransactionCountResult;
}

/// Parameters for `eth_getTransactionReceipt`.
///
/// Returns the receipt of a transaction by transaction hash.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransactionReceiptParams {}

pub type GetTransactionReceiptResult = Quantity;

impl Method for GetTransactionReceiptParams {
    const NAME: &'static str = "eth_getTransactionReceipt";
    type Result = GetTransactionReceiptResult;
}

/// Parameters for `eth_getUncleCountByBlockHash`.
///
/// Returns the number of uncles in a block from a block matching the given
/// block hash.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUncleCountByBlockHashParams {}

pub type GetUncleCountByBlockHashResult = Quantity;

impl Method for GetUncleCountByBlockHashParams {
    const NAME: &'static str = "eth_getUncleCountByBlockHash";
    type Result = GetUncleCountByBlockHashResult;
}

/// Parameters for `eth_getUncleCountByBlockNumber`.
///
/// Returns the number of uncles in a block matching the given block number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUncleCountByBlockNumberParams {
    /// Block number or tag
    pub block: Quantity,
}

pub type GetUncleCountByBlockNumberResult = Quantity;

impl Method for GetUncleCountByBlockNumberParams {
    const NAME: &'static str = "eth_getUncleCountByBlockNumber";
    type Result = GetUncleCountByBlockNumberResult;
}

/// Parameters for `eth_maxPriorityFeePerGas`.
///
/// Returns the current maxPriorityFeePerGas per gas in wei.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxPriorityFeePerGasParams {}

pub type MaxPriorityFeePerGasResult = Quantity;

impl Method for MaxPriorityFeePerGasParams {
    const NAME: &'static str = "eth_maxPriorityFeePerGas";
    type Result = MaxPriorityFeePerGasResult;
}

/// Parameters for `eth_newBlockFilter`.
///
/// Creates a filter in the node, allowing for later polling. Registers
/// client interest in new blocks, and returns an identifier.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlockFilterParams {}

pub type NewBlockFilterResult = Quantity;

impl Method for NewBlockFilterParams {
    const NAME: &'static str = "eth_newBlockFilter";
    type Result = NewBlockFilterResult;
}

/// Parameters for `eth_newFilter`.
///
/// Install a log filter in the server, allowing for later polling.
/// Registers client interest in logs matching the filter, and returns an
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFilterParams {
    /// filter
    pub filter: Quantity,
}

pub type NewFilterResult = Quantity;

impl Method for NewFilterParams {
    const NAME: &'static str = "eth_newFilter";
    type Result = NewFilterResult;
}

/// Parameters for `eth_newPendingTransactionFilter`.
///
/// Creates a filter in the node, allowing for later polling. Registers
/// client interest in new transactions, and returns an identifier.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPendingTransactionFilterParams {}

pub type NewPendingTransactionFilterResult = Quantity;

impl Method for NewPendingTransactionFilterParams {
    const NAME: &'static str = "eth_newPendingTransactionFilter";
    type Result = NewPendingTransactionFilterResult;
}

/// Parameters for `eth_sendRawTransaction`.
///
/// Submits a raw transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRawTransactionParams {
    /// Signed transaction bytes
    pub transaction: Quantity,
}

/// The transaction hash
pub type SendRawTransactionResult = Hash;

impl Method for SendRawTransactionParams {
    const NAME: &'static str = "eth_sendRawTransaction";
    type Result = SendRawTransactionResult;
}

/// Parameters for `eth_sendTransaction`.
///
/// Signs and submits a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendTransactionParams {
    /// Transaction object
    pub transaction: Quantity,
}

/// The transaction hash
pub type SendTransactionResult = Hash;

impl Method for SendTransactionParams {
    const NAME: &'static str = "eth_sendTransaction";
    type Result = SendTransactionResult;
}

/// Parameters for `eth_sign`.
///
/// Returns an EIP-191 signature over the provided data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignParams {
    /// hex encoded address
    pub address: Address,
    /// data to sign
    pub message: Quantity,
}

pub type SignResult = Quantity;

impl Method for SignParams {
    const NAME: &'static str = "eth_sign";
    type Result = SignResult;
}

/// Parameters for `eth_signTransaction`.
///
/// Returns an RLP encoded transaction signed by the specified account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignTransactionParams {
    /// Transaction object
    pub transaction: Quantity,
}

pub type SignTransactionResult = Quantity;

impl Method for SignTransactionParams {
    const NAME: &'static str = "eth_signTransaction";
    type Result = SignTransactionResult;
}

/// Parameters for `eth_simulateV1`.
///
/// Executes a sequence of message calls building on each other's state
/// without creating transactions on the block chain, optionally overriding
/// block and state data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulateV1Params {
    /// Simulation payload
    pub payload: Quantity,
}

pub type SimulateV1Result = Quantity;

impl Method for SimulateV1Params {
    const NAME: &'static str = "eth_simulateV1";
    type Result = SimulateV1Result;
}

/// Parameters for `eth_syncing`.
///
/// Returns an object with data about the sync status or false.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncingParams {}

pub type SyncingResult = Quantity;

impl Method for SyncingParams {
    const NAME: &'static str = "eth_syncing";
    type Result = SyncingResult;
}

/// Parameters for `eth_uninstallFilter`.
///
/// Uninstalls a filter with given id.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UninstallFilterParams {}

pub type UninstallFilterResult = Quantity;

impl Method for UninstallFilterParams {
    const NAME: &'static str = "eth_uninstallFilter";
    type Result = UninstallFilterResult;
}

#[cfg(test)]
mod tests {
    use super::{EthMethod, GetBalanceParams};
    use crate::Method;
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    #[test]
    fn test_serde() {
        assert_tokens(&EthMethod::GetBalance, &[Token::Str("eth_getBalance")]);
        assert_tokens(&EthMethod::Accounts, &[Token::Str("eth_accounts")]);
    }

    #[test]
    #[should_panic]
    fn test_de_unknown() {
        assert_de_tokens(&EthMethod::Accounts, &[Token::Str("eth_nope")]);
    }

    #[test]
    fn test_name_round_trip() {
        for method in EthMethod::ALL {
            assert_eq!(method.as_str().parse::<EthMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_method_count() {
        assert_eq!(EthMethod::ALL.len(), 40);
    }

    #[test]
    fn test_method_names_match_enum() {
        assert_eq!(GetBalanceParams::NAME, EthMethod::GetBalance.as_str());
    }
}
