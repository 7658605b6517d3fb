use crate::domain::order::OrderSnapshot;
use crate::error::Result;
use std::io::Read;

/// Reads an order snapshot from a JSON source.
///
/// The document mirrors `OrderSnapshot`: addresses carry their street lines as
/// an array and money fields accept either strings or numbers.
pub struct OrderReader<R: Read> {
    source: R,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn read_order(self) -> Result<OrderSnapshot> {
        Ok(serde_json::from_reader(self.source)?)
    }
}
