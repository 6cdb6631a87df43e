//! Aggregate source statistics collected during the parse.

/// Counters accumulated over one run. Mutated once per processed line,
/// read-only after the input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Syntactically accepted instruction lines.
    pub instructions: u32,
    /// Lines carrying a comment, pure or trailing.
    pub comments: u32,
    /// `LABEL` definitions.
    pub labels: u32,
    /// Jumps, conditional jumps, calls and returns combined.
    pub jumps: u32,
}

/// One requestable statistic, in the vocabulary of the CLI options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Loc,
    Comments,
    Labels,
    Jumps,
}

impl Statistics {
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Loc => self.instructions,
            StatKind::Comments => self.comments,
            StatKind::Labels => self.labels,
            StatKind::Jumps => self.jumps,
        }
    }
}
