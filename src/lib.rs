//! stepline - vertical step-timeline widget for egui
//!
//! Renders an ordered list of steps top to bottom, each with a marker icon,
//! a title and a date, joined by vertical connector lines. Steps at or
//! before the current index (or the error index) render as reached; the
//! error step gets its own marker, as does the final step.
//!
//! The layout pass is a pure function over the item list, the selection
//! indices and the resolved style, exposed separately from painting so it
//! can be exercised headless.

pub mod item;
pub mod layout;
pub mod style;
pub mod timeline;

// Re-export the public surface
pub use item::Item;
pub use layout::{layout_items, DrawCmd, LayoutResult};
pub use style::{circle_texture, Marker, MarkerSet, PointGravity, TimelineStyle};
pub use timeline::TimeLine;
