//! Process-wide caches shared across send/receive paths.

pub mod wappush;

pub use wappush::WapPushSizeCache;
