//! Top-level facade crate for seclab.
//!
//! Re-exports the scenario model and the API service so users can depend on a single crate.

pub mod core {
    pub use seclab_core::*;
}

pub mod api {
    pub use seclab_api::*;
}
