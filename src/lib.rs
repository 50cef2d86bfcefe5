//! # ESScript
//!
//! An interpreter for a tiny line-addressed scripting language. Every line
//! moves a value from a left operand to a right operand, optionally doing
//! arithmetic or a conditional jump on the way.
//!
//! The `lang` module decodes lines into instructions. The `mach` module
//! owns memory and runs programs. Hosts drive a [`mach::Runtime`] by
//! calling `execute` and acting on the returned [`mach::Event`].

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/reference.rs"]
#[allow(non_snake_case)]
pub mod __Reference;

pub mod lang;
pub mod mach;
