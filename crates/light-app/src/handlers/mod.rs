//! Page handlers.
//!
//! A handler validates route parameters, launches its fetches together,
//! and succeeds only when every fetch did. Any failure becomes `NotFound`.

pub mod address;
