//! Core library for the IPPcode20 parser.
//!
//! This crate provides the single-pass analysis pipeline for IPPcode20
//! source code. The pipeline is roughly:
//!
//!   source text
//!     -> header scan (language declaration)
//!     -> line processor (tokens + grammar lookup)
//!     -> operand classifiers (typed operands)
//!     -> XML emitter
//!
//! Higher-level tools (the CLI filter, test harnesses, etc.) should depend
//! on this crate rather than reimplementing the pipeline.

// ---------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------

pub mod error;

// ---------------------------------------------------------------------
// Front-end: operand classification and the instruction grammar
// ---------------------------------------------------------------------

pub mod lexer;
pub mod grammar;
pub mod ast;

// ---------------------------------------------------------------------
// Driver and accumulators
// ---------------------------------------------------------------------

pub mod stats;
pub mod parser;

// ---------------------------------------------------------------------
// Back-end: XML serialization
// ---------------------------------------------------------------------

pub mod xml;

// ---------------------------------------------------------------------
// Public API re-exports
// ---------------------------------------------------------------------

pub use ast::{ConstKind, Frame, Instruction, Operand, Program};
pub use error::ParseError;
pub use parser::{ParseOutput, parse_program};
pub use stats::{StatKind, Statistics};
pub use xml::write_program;

/// The exact language tag required in the source header and echoed as the
/// `language` attribute of the output document.
pub const LANGUAGE: &str = "IPPcode20";
