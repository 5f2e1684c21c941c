//! Data models for the posts backend.

mod post;

pub use post::*;
