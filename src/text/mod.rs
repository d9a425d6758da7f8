//! Rendering of element values as text.
//!
//! [`TextRenderable`] is the compile-time capability used by
//! [`Join`](crate::sequence::traits::Join). [`render_any`] and
//! [`try_render_any`] cover values whose kind is only known at runtime.

mod render;

pub use render::{TextRenderable, render_any, stringify, try_render_any};
