#![no_main]

use libfuzzer_sys::fuzz_target;

use ethrpc_methods::{ErrorResponse, Request, Response};

fuzz_target!(|data: &[u8]| {
    if let Ok(request) = serde_json::from_slice::<Request>(data) {
        let json = serde_json::to_vec(&request).unwrap();
        let out: Request = serde_json::from_slice(&json).unwrap();
        assert_eq!(out, request);
    }

    if let Ok(response) = serde_json::from_slice::<Response>(data) {
        let json = serde_json::to_vec(&response).unwrap();
        let out: Response = serde_json::from_slice(&json).unwrap();
        assert_eq!(out, response);
    }

    if let Ok(response) = serde_json::from_slice::<ErrorResponse>(data) {
        let json = serde_json::to_vec(&response).unwrap();
        let out: ErrorResponse = serde_json::from_slice(&json).unwrap();
        assert_eq!(out, response);
    }
});
