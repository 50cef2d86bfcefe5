//! # ESScript
//!
//! Command line runner. See the library documentation for the language.

mod term;

fn main() {
    term::main();
}
