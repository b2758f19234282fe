pub mod compiler;
pub use compiler::{Compiled, Compiler};

mod design;
pub use design::DesignDocument;

mod map_function;
pub use map_function::{MapFunction, TempView};
