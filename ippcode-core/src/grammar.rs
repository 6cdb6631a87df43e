//! Static instruction grammar for IPPcode20.
//!
//! One entry per opcode: the ordered classifier sequence its operands
//! must satisfy, plus the statistics class of the instruction. Adding or
//! removing an instruction is a data change here, not a control-flow
//! change in the driver.

/// Which classifier a given operand position must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// Variable reference (`GF@x`).
    Var,
    /// Variable reference or constant literal.
    Symb,
    /// Bare label name.
    Label,
    /// Data-type keyword (`int` / `string` / `bool`).
    Type,
}

/// Statistics class of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrClass {
    Plain,
    /// Defines a label (`LABEL`).
    LabelDef,
    /// Transfers control: jumps, calls and returns, counted together.
    ControlTransfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarEntry {
    pub opcode: &'static str,
    pub operands: &'static [OperandKind],
    pub class: InstrClass,
}

use InstrClass::{ControlTransfer, LabelDef, Plain};
use OperandKind::{Label, Symb, Type, Var};

/// The complete opcode inventory of IPPcode20.
pub const GRAMMAR: &[GrammarEntry] = &[
    // Frames and function calls
    entry("MOVE", &[Var, Symb], Plain),
    entry("CREATEFRAME", &[], Plain),
    entry("PUSHFRAME", &[], Plain),
    entry("POPFRAME", &[], Plain),
    entry("DEFVAR", &[Var], Plain),
    entry("CALL", &[Label], ControlTransfer),
    entry("RETURN", &[], ControlTransfer),
    // Data stack
    entry("PUSHS", &[Symb], Plain),
    entry("POPS", &[Var], Plain),
    // Arithmetic, relational, boolean and conversion instructions
    entry("ADD", &[Var, Symb, Symb], Plain),
    entry("SUB", &[Var, Symb, Symb], Plain),
    entry("MUL", &[Var, Symb, Symb], Plain),
    entry("IDIV", &[Var, Symb, Symb], Plain),
    entry("LT", &[Var, Symb, Symb], Plain),
    entry("GT", &[Var, Symb, Symb], Plain),
    entry("EQ", &[Var, Symb, Symb], Plain),
    entry("AND", &[Var, Symb, Symb], Plain),
    entry("OR", &[Var, Symb, Symb], Plain),
    entry("NOT", &[Var, Symb], Plain),
    entry("INT2CHAR", &[Var, Symb], Plain),
    entry("STRI2INT", &[Var, Symb, Symb], Plain),
    // Input / output
    entry("READ", &[Var, Type], Plain),
    entry("WRITE", &[Symb], Plain),
    // Strings
    entry("CONCAT", &[Var, Symb, Symb], Plain),
    entry("STRLEN", &[Var, Symb], Plain),
    entry("GETCHAR", &[Var, Symb, Symb], Plain),
    entry("SETCHAR", &[Var, Symb, Symb], Plain),
    // Types
    entry("TYPE", &[Var, Symb], Plain),
    // Control flow
    entry("LABEL", &[Label], LabelDef),
    entry("JUMP", &[Label], ControlTransfer),
    entry("JUMPIFEQ", &[Label, Symb, Symb], ControlTransfer),
    entry("JUMPIFNEQ", &[Label, Symb, Symb], ControlTransfer),
    entry("EXIT", &[Symb], Plain),
    // Debugging
    entry("DPRINT", &[Symb], Plain),
    entry("BREAK", &[], Plain),
];

const fn entry(
    opcode: &'static str,
    operands: &'static [OperandKind],
    class: InstrClass,
) -> GrammarEntry {
    GrammarEntry {
        opcode,
        operands,
        class,
    }
}

/// Look up a grammar entry by mnemonic, case-insensitively.
pub fn lookup(opcode: &str) -> Option<&'static GrammarEntry> {
    GRAMMAR
        .iter()
        .find(|entry| entry.opcode.eq_ignore_ascii_case(opcode))
}
