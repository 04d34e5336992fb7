//! Daily content poster for the Moltbook forum API.
//!
//! One invocation selects an unused discussion topic, pairs it with a
//! guideline line from a local ethics source, composes a moderated post,
//! and submits it with `POST /posts`, persisting minimal JSON state so
//! topics are not repeated and no day gets two posts.

pub mod composer;
pub mod config;
pub mod ethics;
pub mod memory;
pub mod moltbook;
pub mod pipeline;
pub mod topics;
