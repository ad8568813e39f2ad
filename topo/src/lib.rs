//! # Elevation lookups
//!
//! `topo` is the bridge between [`grade`]'s sampled routes and a
//! remote elevation service: one batched request per route, with
//! every failure folded into a [`grade::ProfileError`].

mod client;
mod error;
mod lookup;
mod service;
pub mod wire;

pub use crate::{
    client::{HttpLookup, HttpLookupBuilder, DEFAULT_API_URL, DEFAULT_TIMEOUT},
    error::TopoError,
    lookup::ElevationLookup,
    service::ProfileService,
};
pub use grade;
