//! In-memory [`NftSource`] for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::{Value, json};

use super::NftSource;
use super::types::LcdError;

#[derive(Clone)]
enum Reply {
    Ok(Value),
    Down,
}

/// Answers smart queries from a table keyed by contract and query message.
/// Unknown queries answer as "not found", like a contract lookup miss.
#[derive(Default)]
pub struct MockLcd {
    replies: HashMap<(String, String), Reply>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockLcd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, contract: &str, msg: &Value, result: Value) -> Self {
        self.replies.insert((contract.to_owned(), msg.to_string()), Reply::Ok(result));
        self
    }

    /// Make a query fail as if the LCD were unreachable.
    pub fn down(mut self, contract: &str, msg: &Value) -> Self {
        self.replies.insert((contract.to_owned(), msg.to_string()), Reply::Down);
        self
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl NftSource for MockLcd {
    async fn smart_query(&self, contract: &str, msg: &Value) -> Result<Value, LcdError> {
        self.calls.lock().unwrap().push((contract.to_owned(), msg.clone()));
        match self.replies.get(&(contract.to_owned(), msg.to_string())) {
            Some(Reply::Ok(value)) => Ok(value.clone()),
            Some(Reply::Down) => Err(LcdError::Request("connection refused".into())),
            None => Err(LcdError::NotFound(format!("no reply for {msg}"))),
        }
    }
}

/// An `all_nft_info` result for `owner` with the given name and traits.
pub fn nft_result(owner: &str, name: &str, attributes: &[(&str, &str)]) -> Value {
    let attributes: Vec<Value> = attributes
        .iter()
        .map(|(t, v)| json!({ "trait_type": t, "value": v }))
        .collect();
    json!({
        "access": { "owner": owner, "approvals": [] },
        "info": {
            "token_uri": null,
            "extension": { "name": name, "image": format!("ipfs://{name}"), "attributes": attributes }
        }
    })
}
