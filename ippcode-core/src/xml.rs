//! Deterministic XML serialization of a validated program.
//!
//! The document is built in one go from an already-validated [`Program`];
//! a parse failure upstream means this module is never reached, so no
//! partial document can ever be observed.

use crate::LANGUAGE;
use crate::ast::{Instruction, Operand, Program};

const INDENT: &str = "  ";

/// Serialize a program to the IPPcode20 XML interchange format.
pub fn write_program(program: &Program) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

    if program.instructions.is_empty() {
        out.push_str(&format!("<program language=\"{LANGUAGE}\"/>\n"));
        return out;
    }

    out.push_str(&format!("<program language=\"{LANGUAGE}\">\n"));
    for instruction in &program.instructions {
        write_instruction(&mut out, instruction);
    }
    out.push_str("</program>\n");
    out
}

fn write_instruction(out: &mut String, instruction: &Instruction) {
    out.push_str(INDENT);
    out.push_str(&format!(
        "<instruction order=\"{}\" opcode=\"{}\"",
        instruction.order, instruction.opcode
    ));
    if instruction.operands.is_empty() {
        out.push_str("/>\n");
        return;
    }
    out.push_str(">\n");

    for (position, operand) in instruction.operands.iter().enumerate() {
        write_operand(out, position + 1, operand);
    }

    out.push_str(INDENT);
    out.push_str("</instruction>\n");
}

fn write_operand(out: &mut String, position: usize, operand: &Operand) {
    out.push_str(INDENT);
    out.push_str(INDENT);
    let text = operand.text();
    if text.is_empty() {
        out.push_str(&format!(
            "<arg{position} type=\"{}\"/>\n",
            operand.type_name()
        ));
        return;
    }
    out.push_str(&format!("<arg{position} type=\"{}\">", operand.type_name()));
    escape_into(out, &text);
    out.push_str(&format!("</arg{position}>\n"));
}

/// Replace the five reserved markup characters by their named entities.
fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
}
