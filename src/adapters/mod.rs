// Adapters layer: concrete implementations for the filesystem and observability.

pub mod observer;
pub mod storage;

pub use observer::TracingObserver;
pub use storage::LocalFiles;
