// WHY: the two output shapes built from the corrected sentence sequence

pub mod packer;
pub mod window;

pub use packer::{join_chunks, pack_chunks, Chunk};
pub use window::{join_window, select_window, Direction, WindowSpec};
