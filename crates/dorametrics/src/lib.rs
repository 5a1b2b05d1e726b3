//! Top-level facade crate for dorametrics.
//!
//! Re-exports the core domain and the tool server so users can depend on a single crate.

pub mod core {
    pub use dorametrics_core::*;
}

pub mod server {
    pub use dorametrics_server::*;
}
