//! Draw list module — retained-mode buffer of primitives and style changes.
//!
//! A `DrawList` is filled by the application and replayed by the render
//! dispatcher once per frame. Record order is significant: a style record
//! affects every record that follows it.

mod draw_list;
mod primitive;
mod style;

pub use draw_list::{DrawList, Watermark};
pub use primitive::{Primitive, PrimitiveKind};
pub use style::{Rgba, Style};
