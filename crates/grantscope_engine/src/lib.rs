//! Grantscope engine: record sources, wire decoding and share plumbing.
mod bridge;
mod loader;
mod share;
mod wire;

pub use bridge::{LoaderEvent, LoaderHandle};
pub use loader::{
    decode_batch, FileRecordSource, HttpRecordSource, LoadError, RecordSource, DEFAULT_PARTS,
};
pub use share::{build_share_links, ClipboardPort, SharePort, ShareLinks};
pub use wire::{parse_when, RawRecord};
