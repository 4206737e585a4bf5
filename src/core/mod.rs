//! Core engine - the in-memory task store

mod store;

pub use store::{AdmissionRules, TaskStore};
