//! Ferrous Dig Infrastructure Layer
pub mod dns;
