//! Server-side page loaders.
//!
//! A loader fires its route preloader, runs the handler, and returns the
//! handler data with a dehydrated cache snapshot for the client to hydrate.

pub mod address;
