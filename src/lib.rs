//! Serverless task tracker with automatic categorization.
//!
//! Two Lambda handlers share this library: `create_task` runs a task
//! description through a hosted zero-shot classifier and records the result
//! in DynamoDB; `get_tasks` returns everything recorded so far. The
//! entrypoints live under `src/bin/`.

pub mod classifier;
pub mod config;
pub mod handlers;
pub mod store;
pub mod task;
