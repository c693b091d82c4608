//! Core value types for wipekit comparison widgets.
//!
//! Everything a widget computes is expressed in these types: pixel
//! rectangles mirroring the hosting page's client coordinates,
//! normalized split positions, half-frame geometry with its clip
//! math, pointer samples, typed inline-style instructions, and RGBA
//! colors. All types are serde-serializable so host bindings can
//! bridge them across an FFI or JSON boundary.

pub mod color;
pub mod event;
pub mod geometry;
pub mod style;
