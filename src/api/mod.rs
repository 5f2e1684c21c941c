//! HTTP handlers.
//!
//! JSON endpoints under `/api` and server-rendered pages.

mod pages;
mod posts;

pub use pages::*;
pub use posts::*;
