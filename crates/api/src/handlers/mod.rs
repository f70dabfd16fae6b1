//! Request handlers.
//!
//! Each submodule provides async handler functions for one part of the
//! surface. Handlers delegate to the repositories in `formforge_store` and
//! the domain model in `formforge_core`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod draft;
pub mod forms;
pub mod meta;
pub mod respond;
pub mod responses;
