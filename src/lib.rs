mod utils;

// Modules
pub mod data;
pub mod errors;
pub mod node;
pub mod splitter;
pub mod tree;

// Individual classes, and functions
pub use data::Matrix;
pub use tree::Tree;
