#![no_main]

use libfuzzer_sys::fuzz_target;

use std::str::FromStr;

use ethrpc_format as f;

fuzz_target!(|data: &str| {
    // predicate and constructor must agree on every input
    assert_eq!(f::Address::is_valid(data), f::Address::from_str(data).is_ok());
    assert_eq!(f::Hash::is_valid(data), f::Hash::from_str(data).is_ok());
    assert_eq!(
        f::Quantity::is_valid(data),
        f::Quantity::from_str(data).is_ok()
    );
    assert_eq!(
        f::BlockSpec::is_valid(data),
        f::BlockSpec::from_str(data).is_ok()
    );

    // accepted input survives verbatim and revalidates
    if let Ok(addr) = f::Address::from_str(data) {
        assert_eq!(addr.as_str(), data);
        assert_eq!(f::Address::from_str(addr.as_str()).unwrap(), addr);
    }

    if let Ok(qty) = f::Quantity::from_str(data) {
        assert_eq!(f::Quantity::from_be_bytes(&qty.to_be_bytes()), qty);
    }

    if let Ok(spec) = f::BlockSpec::from_str(data) {
        assert_eq!(spec.as_str(), data);
    }
});
