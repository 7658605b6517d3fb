//! Input adapters: reading orders and store configuration from files.

pub mod json {
    pub mod config_reader;
    pub mod order_reader;
}
