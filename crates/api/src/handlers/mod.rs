//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `mindcheck_db` and
//! map errors via [`crate::error::AppError`].

pub mod assessment;
pub mod disorder;
pub mod question;
pub mod remedy;
pub mod seed;
