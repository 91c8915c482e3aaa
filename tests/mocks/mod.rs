//! Test doubles shared by the integration tests.

pub mod mock_record_store;

pub use mock_record_store::MockRecordStore;
