//! Structured representation of a validated IPPcode20 program.

/// Variable storage scope. Frame tags are matched case-sensitively in the
/// source even though opcodes are not; the asymmetry is part of the
/// language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Global,
    Local,
    Temporary,
}

impl Frame {
    pub fn from_tag(tag: &str) -> Option<Frame> {
        match tag {
            "GF" => Some(Frame::Global),
            "LF" => Some(Frame::Local),
            "TF" => Some(Frame::Temporary),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frame::Global => "GF",
            Frame::Local => "LF",
            Frame::Temporary => "TF",
        }
    }
}

/// Kind of a constant literal. The payload stays string-typed at this
/// layer; numeric and boolean semantics belong to the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstKind {
    Int,
    Bool,
    Nil,
    Str,
}

impl ConstKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstKind::Int => "int",
            ConstKind::Bool => "bool",
            ConstKind::Nil => "nil",
            ConstKind::Str => "string",
        }
    }
}

/// A classified operand. The tag is fixed at classification time and
/// never reinterpreted downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Variable { frame: Frame, name: String },
    Constant { kind: ConstKind, value: String },
    Label(String),
    TypeKeyword(String),
}

impl Operand {
    /// Value of the `type` attribute on the operand's XML element.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Variable { .. } => "var",
            Operand::Constant { kind, .. } => kind.as_str(),
            Operand::Label(_) => "label",
            Operand::TypeKeyword(_) => "type",
        }
    }

    /// Text content of the operand's XML element, before escaping.
    pub fn text(&self) -> String {
        match self {
            Operand::Variable { frame, name } => format!("{}@{}", frame.as_str(), name),
            Operand::Constant { value, .. } => value.clone(),
            Operand::Label(name) => name.clone(),
            Operand::TypeKeyword(keyword) => keyword.clone(),
        }
    }
}

/// One syntactically accepted source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// 1-based position among accepted instructions, contiguous.
    pub order: u32,
    /// Mnemonic normalized to upper case.
    pub opcode: String,
    pub operands: Vec<Operand>,
}

/// The whole validated program, in source order. Only constructed after
/// every line has passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}
