//! wotr_names - Blueprint guid to display name lookups
//!
//! Save files refer to party members by blueprint guid only. The lookup
//! tables here are generated at build time from the game's blueprint dump.

/// Generated squad and companion lookups
pub mod names {
    // Duplicate guids in the dump produce unreachable arms; the first one wins.
    #![allow(unreachable_patterns)]

    include!(concat!(env!("OUT_DIR"), "/names.rs"));
}

pub use names::{companion_as_string, squad_as_string};
