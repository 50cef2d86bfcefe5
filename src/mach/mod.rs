/*!
## Rust Machine Module

This Rust module holds ESScript memory and runs loaded programs.

*/

mod config;
mod memory;
mod program;
mod runtime;

pub use config::Config;
pub use memory::Memory;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;

#[cfg(test)]
mod tests;
