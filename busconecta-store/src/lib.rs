pub mod app_config;
pub mod directory;
pub mod kv;
pub mod ledger;
pub mod session;

pub use directory::KvUserDirectory;
pub use kv::{JsonFileKv, MemoryKv};
pub use ledger::KvReservationLedger;
pub use session::KvSession;
