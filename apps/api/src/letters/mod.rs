// Request Orchestrator: HTTP binding around extraction and generation.
// Uploads and letters live as flat files; nothing else is persisted.

pub mod handlers;
pub mod pages;
pub mod pipeline;
pub mod storage;
pub mod upload;
