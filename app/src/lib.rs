//! Terminal front-end for the remote todo service.
//!
//! # Overview
//! The deterministic application logic (screens, query construction,
//! validation, request building) lives in `todo-core`. This crate is the
//! host side of that split: it executes the core's requests over HTTP
//! (`transport`), stacks screens the way a stack navigator would (`nav`),
//! and renders them as plain text (`render`). The binary in `main.rs` only
//! parses configuration and hands stdin/stdout to [`nav::App::run`].

pub mod nav;
pub mod render;
pub mod transport;

pub use nav::App;
pub use transport::Transport;
