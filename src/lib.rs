//! Polling chat: an in-memory message service and a desktop client that
//! keeps a snapshot of it up to date.

pub mod common;
pub mod config;
pub mod network;
pub mod server;
pub mod storage;
pub mod ui;
