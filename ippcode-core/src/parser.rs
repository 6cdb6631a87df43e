//! Line-oriented driver: header scan, tokenization, grammar dispatch.
//!
//! The driver is a single pass over the source with two phases: the
//! header scan consumes leading blanks and comments and the language
//! declaration, then every remaining line is stripped of its comment,
//! tokenized on whitespace and checked against the instruction grammar.
//! The first defect aborts the whole run; there is no recovery.

use crate::ast::{Instruction, Program};
use crate::error::ParseError;
use crate::grammar::{self, InstrClass, OperandKind};
use crate::lexer;
use crate::stats::Statistics;

/// Result of a fully successful parse.
#[derive(Debug)]
pub struct ParseOutput {
    pub program: Program,
    pub stats: Statistics,
}

/// Parse a complete IPPcode20 source.
///
/// Returns the validated program and its statistics, or the first error
/// encountered. Nothing is emitted on failure; callers serialize the
/// program only after this function returns `Ok`.
pub fn parse_program(source: &str) -> Result<ParseOutput, ParseError> {
    let mut lines = source.lines().enumerate();
    scan_header(&mut lines)?;

    let mut program = Program::default();
    let mut stats = Statistics::default();
    for (index, raw) in lines {
        process_line(raw, index + 1, &mut program, &mut stats)?;
    }
    Ok(ParseOutput { program, stats })
}

/// Consume lines up to and including the `.IPPcode20` declaration.
///
/// Blank lines and pure comment lines before the header are allowed and
/// do not count toward the comment statistic; counters only run in the
/// body phase.
fn scan_header<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
) -> Result<(), ParseError> {
    for (_, raw) in lines {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        return if is_header_line(line) {
            Ok(())
        } else {
            Err(ParseError::BadHeader)
        };
    }
    Err(ParseError::BadHeader)
}

/// The header is `.IPPcode20` (any case), optionally followed by a
/// comment on the same line.
fn is_header_line(line: &str) -> bool {
    let lowered = line.to_ascii_lowercase();
    match lowered.strip_prefix(".ippcode20") {
        Some(rest) => {
            let rest = rest.trim_start();
            rest.is_empty() || rest.starts_with('#')
        }
        None => false,
    }
}

fn process_line(
    raw: &str,
    line_no: usize,
    program: &mut Program,
    stats: &mut Statistics,
) -> Result<(), ParseError> {
    let mut line = raw;
    if let Some(pos) = line.find('#') {
        stats.comments += 1;
        line = &line[..pos];
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&opcode_token, operand_tokens)) = tokens.split_first() else {
        // Blank line or pure comment.
        return Ok(());
    };

    let entry = grammar::lookup(opcode_token).ok_or_else(|| ParseError::UnknownOpcode {
        opcode: opcode_token.to_string(),
        line: line_no,
    })?;

    let expected = entry.operands.len();
    if operand_tokens.len() < expected {
        return Err(syntax_error(
            format!("too few operands for {}", entry.opcode),
            line_no,
        ));
    }
    if operand_tokens.len() > expected {
        // A single trailing token is admitted only if it is itself a
        // comment; any other excess is fatal.
        let excess = &operand_tokens[expected..];
        if excess.len() > 1 || !excess[0].starts_with('#') {
            return Err(syntax_error(
                format!("too many operands for {}", entry.opcode),
                line_no,
            ));
        }
    }

    let mut operands = Vec::with_capacity(expected);
    for (kind, &token) in entry.operands.iter().zip(operand_tokens) {
        let classified = match kind {
            OperandKind::Var => lexer::classify_variable(token),
            OperandKind::Symb => lexer::classify_symbol(token),
            OperandKind::Label => lexer::classify_label(token),
            OperandKind::Type => lexer::classify_type(token),
        };
        let operand = classified.ok_or_else(|| {
            syntax_error(
                format!("expected {} but found '{}'", expectation(*kind), token),
                line_no,
            )
        })?;
        operands.push(operand);
    }

    stats.instructions += 1;
    match entry.class {
        InstrClass::LabelDef => stats.labels += 1,
        InstrClass::ControlTransfer => stats.jumps += 1,
        InstrClass::Plain => {}
    }

    let order = program.instructions.len() as u32 + 1;
    program.instructions.push(Instruction {
        order,
        opcode: entry.opcode.to_string(),
        operands,
    });
    Ok(())
}

fn expectation(kind: OperandKind) -> &'static str {
    match kind {
        OperandKind::Var => "a variable",
        OperandKind::Symb => "a variable or constant",
        OperandKind::Label => "a label",
        OperandKind::Type => "a type keyword",
    }
}

fn syntax_error(message: String, line: usize) -> ParseError {
    ParseError::Syntax { message, line }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ConstKind, Frame, Operand};

    #[test]
    fn parses_minimal_program() {
        let output = parse_program(".IPPcode20\nDEFVAR GF@x\nMOVE GF@x int@5\nWRITE GF@x\n")
            .expect("parse");
        let program = &output.program;
        assert_eq!(program.instructions.len(), 3);
        assert_eq!(program.instructions[0].opcode, "DEFVAR");
        assert_eq!(
            program.instructions[0].operands[0],
            Operand::Variable {
                frame: Frame::Global,
                name: "x".to_string(),
            }
        );
        assert_eq!(
            program.instructions[1].operands[1],
            Operand::Constant {
                kind: ConstKind::Int,
                value: "5".to_string(),
            }
        );
        assert_eq!(output.stats.instructions, 3);
        assert_eq!(output.stats.comments, 0);
        assert_eq!(output.stats.labels, 0);
        assert_eq!(output.stats.jumps, 0);
    }

    #[test]
    fn order_numbers_are_contiguous_from_one() {
        let output = parse_program(
            ".IPPcode20\nCREATEFRAME\n# comment\nPUSHFRAME\n\nPOPFRAME\nBREAK\n",
        )
        .expect("parse");
        let orders: Vec<u32> = output
            .program
            .instructions
            .iter()
            .map(|instruction| instruction.order)
            .collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
    }

    #[test]
    fn header_may_be_preceded_by_blanks_and_comments() {
        assert!(parse_program("\n  \n# leading comment\n.IPPcode20\n").is_ok());
    }

    #[test]
    fn header_is_case_insensitive_and_allows_trailing_comment() {
        assert!(parse_program(".ippCODE20\nBREAK\n").is_ok());
        assert!(parse_program(".IPPcode20 # header comment\nBREAK\n").is_ok());
        assert!(parse_program(".IPPcode20# tight comment\n").is_ok());
    }

    #[test]
    fn missing_header_is_a_header_error() {
        let err = parse_program("DEFVAR GF@x\n").unwrap_err();
        assert!(matches!(err, ParseError::BadHeader));

        let err = parse_program("").unwrap_err();
        assert!(matches!(err, ParseError::BadHeader));

        let err = parse_program(".IPPcode19\n").unwrap_err();
        assert!(matches!(err, ParseError::BadHeader));
    }

    #[test]
    fn header_with_trailing_garbage_is_rejected() {
        let err = parse_program(".IPPcode20 extra\nBREAK\n").unwrap_err();
        assert!(matches!(err, ParseError::BadHeader));
    }

    #[test]
    fn unknown_opcode_halts_regardless_of_prior_lines() {
        let err = parse_program(".IPPcode20\nDEFVAR GF@x\nNOP\n").unwrap_err();
        assert!(matches!(err, ParseError::UnknownOpcode { ref opcode, line: 3 } if opcode == "NOP"));
    }

    #[test]
    fn too_few_operands_is_a_syntax_error() {
        let err = parse_program(".IPPcode20\nMOVE GF@x\n").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 2, .. }));
    }

    #[test]
    fn excess_operands_are_rejected() {
        let err = parse_program(".IPPcode20\nBREAK now\n").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }));

        let err = parse_program(".IPPcode20\nDEFVAR GF@x GF@y\n").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }));
    }

    #[test]
    fn trailing_comment_after_operands_is_fine() {
        let output = parse_program(".IPPcode20\nDEFVAR GF@x # define x\n").expect("parse");
        assert_eq!(output.program.instructions.len(), 1);
        assert_eq!(output.stats.comments, 1);
    }

    #[test]
    fn malformed_operand_is_a_syntax_error() {
        let err = parse_program(".IPPcode20\nDEFVAR gf@x\n").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 2, .. }));

        let err = parse_program(".IPPcode20\nREAD GF@x nil\n").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }));

        let err = parse_program(".IPPcode20\nPUSHS int@abc\n").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }));
    }

    #[test]
    fn opcode_case_is_normalized() {
        let output = parse_program(".IPPcode20\nmove GF@x int@1\n").expect("parse");
        assert_eq!(output.program.instructions[0].opcode, "MOVE");
    }

    #[test]
    fn counts_labels_and_jumps() {
        let output = parse_program(
            ".IPPcode20\nLABEL loop\nCALL fn\nJUMPIFEQ loop int@1 int@1\nRETURN\nJUMP loop\n",
        )
        .expect("parse");
        assert_eq!(output.stats.instructions, 5);
        assert_eq!(output.stats.labels, 1);
        assert_eq!(output.stats.jumps, 4);
    }

    #[test]
    fn counts_pure_and_trailing_comments() {
        let output = parse_program(
            ".IPPcode20\n# pure comment\nBREAK # trailing\n   # indented comment\n",
        )
        .expect("parse");
        assert_eq!(output.stats.comments, 3);
        assert_eq!(output.stats.instructions, 1);
    }

    #[test]
    fn label_and_jump_scenario() {
        let output = parse_program(".IPPcode20\nLABEL loop\nJUMP loop\n").expect("parse");
        assert_eq!(output.program.instructions.len(), 2);
        assert_eq!(output.stats.labels, 1);
        assert_eq!(output.stats.jumps, 1);
    }

    #[test]
    fn comment_marker_truncates_string_operands() {
        // The comment strip runs before tokenization, so a '#' inside a
        // would-be string payload starts a comment instead.
        let output = parse_program(".IPPcode20\nPUSHS string@a#b\n").expect("parse");
        assert_eq!(
            output.program.instructions[0].operands[0],
            Operand::Constant {
                kind: ConstKind::Str,
                value: "a".to_string(),
            }
        );
        assert_eq!(output.stats.comments, 1);
    }
}
