//! Input reading for file-mode translation.

mod reader;

pub use reader::InputReader;
