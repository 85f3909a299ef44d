//! Browser shells for the site behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule reads DOM state, calls the matching pure module at the
//! crate root, and writes styles, classes and attributes back. Only compiled
//! with the `browser` feature.

pub mod boot;
pub mod carousel;
pub mod contact;
pub mod dom;
pub mod frame;
pub mod media;
pub mod observer;
pub mod parallax;
pub mod puzzle;
pub mod reveal;
pub mod scroll;
pub mod typing;
