/* Two separate on-disk representations: the legacy comma-delimited seed
 * file, read once at startup, and the JSON snapshot used by load/save. */
mod legacy;
mod snapshot;

pub use legacy::import_legacy;
pub use snapshot::{exists, load, save};
