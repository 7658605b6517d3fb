use crate::error::{CheckoutError, Result};
use crate::infrastructure::in_memory::InMemoryScopeConfig;
use serde_json::{Map, Value};
use std::io::Read;

/// Reads store configuration from a flat JSON object.
///
/// Keys are configuration paths such as `payment/pagseguro/redirect`. String,
/// number and boolean values are accepted; booleans map to `"1"` and `"0"`.
pub struct ConfigReader<R: Read> {
    source: R,
}

impl<R: Read> ConfigReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn read_config(self) -> Result<InMemoryScopeConfig> {
        let values: Map<String, Value> = serde_json::from_reader(self.source)?;
        let mut config = InMemoryScopeConfig::new();
        for (key, value) in values {
            let value = match value {
                Value::String(value) => value,
                Value::Number(number) => number.to_string(),
                Value::Bool(flag) => (if flag { "1" } else { "0" }).to_string(),
                Value::Null => continue,
                other => {
                    return Err(CheckoutError::InvalidConfig {
                        key,
                        value: other.to_string(),
                    });
                }
            };
            config.set(key, value);
        }
        Ok(config)
    }
}
