pub mod author;
pub mod paper;
pub mod section_collection;

pub use author::Author;
pub use paper::{Paper, UNTITLED_PAPER};
pub use section_collection::{DISPLAY_ORDER, SectionCollection, is_canonical, same_section};
