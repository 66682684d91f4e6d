// End-to-end checks over the validating constructors: the predicate and the
// constructor must agree on every input, constructed values must keep their
// text verbatim, and every failure must carry the invalid-params code.

use ethrpc_format::{Address, BlockSpec, BlockTag, Error, Hash, Hex, Quantity};

use std::str::FromStr;

const ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0";
const HASH: &str = "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";

#[test]
fn address_accepts_and_preserves() {
    assert!(Address::is_valid(ADDRESS));
    let addr = Address::from_str(ADDRESS).unwrap();
    assert_eq!(addr.as_str(), ADDRESS);
}

#[test]
fn address_rejections_carry_invalid_params() {
    let bad = [
        "742d35Cc6634C0532925a3b844Bc9e7595f0bEb0",        // no prefix
        "0x742d35cc",                                      // short
        "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb000",    // long
        "0xz42d35cc6634c0532925a3b844bc9e7595f0beb0",      // non-hex
        "",
    ];
    for input in bad {
        assert!(!Address::is_valid(input), "{input:?}");
        let err = Address::from_str(input).unwrap_err();
        assert_eq!(err.code(), -32602, "{input:?}");
        assert!(err.message().contains(input), "message echoes input");
    }
}

#[test]
fn hash_is_lowercase_only() {
    assert!(Hash::is_valid(HASH));

    let upper = format!("0x{}", "F".repeat(64));
    assert!(!Hash::is_valid(&upper));
    assert_eq!(Hash::from_str(&upper).unwrap_err().code(), -32602);

    // the same casing is fine for an address
    assert!(Address::is_valid(&format!("0x{}", "F".repeat(40))));
}

#[test]
fn quantity_forms() {
    assert_eq!(Quantity::from_str("0x0").unwrap().as_str(), "0x0");

    let qty = Quantity::from_str("0x1a").unwrap();
    assert_eq!(qty.as_str(), "0x1a");
    assert_eq!(qty.to_u64(), Some(26));

    for input in ["0x00", "0x01", "0xg", "0x1A", "0x", "12"] {
        assert!(!Quantity::is_valid(input), "{input:?}");
        assert_eq!(Quantity::from_str(input).unwrap_err().code(), -32602);
    }
}

#[test]
fn revalidation_is_idempotent() {
    let addr = Address::from_str(ADDRESS).unwrap();
    assert_eq!(Address::from_str(addr.as_str()).unwrap(), addr);

    let hash = Hash::from_str(HASH).unwrap();
    assert_eq!(Hash::from_str(hash.as_str()).unwrap(), hash);

    let qty = Quantity::from_str("0x1a").unwrap();
    assert_eq!(Quantity::from_str(qty.as_str()).unwrap(), qty);

    let spec = BlockSpec::from_str("latest").unwrap();
    assert_eq!(BlockSpec::from_str(spec.as_str()).unwrap(), spec);
}

#[test]
fn block_spec_takes_all_three_forms() {
    assert_eq!(
        BlockSpec::from_str("latest").unwrap(),
        BlockSpec::Tag(BlockTag::Latest)
    );
    assert_eq!(
        BlockSpec::from_str("0x1a").unwrap(),
        BlockSpec::Number(Quantity::from(26))
    );
    assert_eq!(
        BlockSpec::from_str(HASH).unwrap(),
        BlockSpec::Hash(Hash::from_str(HASH).unwrap())
    );
}

#[test]
fn hex_trait_round_trips() {
    let addr = Address::decode_hex(ADDRESS).unwrap();
    assert_eq!(addr.encode_hex(), ADDRESS);
    assert_eq!(addr.encode_hex_with_quotes(), format!("\"{ADDRESS}\""));

    let qty = Quantity::decode_hex("0x1a").unwrap();
    assert_eq!(qty.encode_hex(), "0x1a");
}

#[test]
fn error_codes_match_table() {
    let make = |msg: &str| msg.to_owned();
    let table: [(Error, i64, &str); 12] = [
        (Error::Parse(make("m")), -32700, "ParseError"),
        (Error::InvalidRequest(make("m")), -32600, "InvalidRequestError"),
        (Error::MethodNotFound(make("m")), -32601, "MethodNotFoundError"),
        (Error::InvalidParams(make("m")), -32602, "InvalidParamsError"),
        (Error::Internal(make("m")), -32603, "InternalError"),
        (Error::InvalidInput(make("m")), -32000, "InvalidInputError"),
        (Error::ResourceNotFound(make("m")), -32001, "ResourceNotFoundError"),
        (
            Error::ResourceUnavailable(make("m")),
            -32002,
            "ResourceUnavailableError",
        ),
        (
            Error::TransactionRejected(make("m")),
            -32003,
            "TransactionRejectedError",
        ),
        (
            Error::MethodNotSupported(make("m")),
            -32004,
            "MethodNotSupportedError",
        ),
        (Error::LimitExceeded(make("m")), -32005, "LimitExceededError"),
        (
            Error::VersionNotSupported(make("m")),
            -32006,
            "VersionNotSupportedError",
        ),
    ];

    for (err, code, kind) in table {
        assert_eq!(err.code(), code);
        assert_eq!(err.kind(), kind);
        assert_eq!(err.message(), "m");
    }
}

#[test]
fn serde_goes_through_validation() {
    let addr: Address = serde_json::from_str(&format!("\"{ADDRESS}\"")).unwrap();
    assert_eq!(serde_json::to_string(&addr).unwrap(), format!("\"{ADDRESS}\""));

    assert!(serde_json::from_str::<Quantity>("\"0x00\"").is_err());
    assert!(serde_json::from_str::<Hash>(&format!("\"0x{}\"", "F".repeat(64))).is_err());
    assert!(serde_json::from_str::<BlockSpec>("\"newest\"").is_err());
}
