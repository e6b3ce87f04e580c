//! calvault integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `calvault_test::component::` paths.

pub mod component {
    pub use calvault_core::{config, constants, util};

    pub mod ical {
        pub use calvault_rfc::error::{RfcError, RfcResult};
        pub use calvault_rfc::rfc::ical::*;
    }

    pub mod store {
        pub use calvault_store::*;
    }
}
