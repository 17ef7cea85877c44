//! Typed host contracts shared by the explorer store and browser adapters.
//!
//! This crate stays free of browser bindings: it defines the snapshot storage contract, clock
//! abstraction, and upload/download transfer models. Concrete `window.localStorage` and file
//! picker implementations live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clock;
pub mod storage;
pub mod transfer;

pub use clock::{unix_time_ms_now, Clock, ManualClock, SystemClock};
pub use storage::{MemorySnapshotStorage, NoopSnapshotStorage, SnapshotStorage};
pub use transfer::{
    DownloadRequest, DownloadSource, FileTransferService, TransferFuture, UploadReadMode,
    UploadedFile, TEXT_FILE_EXTENSIONS,
};
