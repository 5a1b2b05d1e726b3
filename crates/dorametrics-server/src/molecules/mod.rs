//! Tool providers hosted by this server.

pub mod dora;

pub use dora::DoraMolecule;
