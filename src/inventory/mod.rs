mod record;
mod record_store;

pub use record::{parse_identifier, Record};
pub use record_store::Inventory;
