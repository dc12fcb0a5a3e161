//! Adapters for the domain ports: in-memory stores, the mocked risk
//! scoring service, and an optional RocksDB-backed store.

pub mod in_memory;
pub mod mock_risk;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
