use std::io::{BufRead, Write};
use regex::Regex;
use once_cell::sync::Lazy;
use log::trace;
use crate::errors::TranslateError;

// @module: Line classification and rewriting of C header constants

// @const: Object-like macro definition, e.g. `#define EPERM 1 /* ... */`
static MACRO_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#define\s+(\w+)\s+([a-zA-Z0-9_\-]+)\s*(.*)").unwrap()
});

// @const: Enum-style constant assignment, e.g. `  SIGHUP = 1,`
static ENUM_CONST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Z_0-9]+)\s*=\s*([0-9\-\.xXa-fA-F]+)(.*)").unwrap()
});

// @const: Block comment at the start of a declaration remainder.
// Anchored at the start only: text after the closing `*/` is dropped.
static TRAILING_COMMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*/\*(.*)\*/").unwrap()
});

// @const: Block comment spanning a whole line
static FULL_LINE_COMMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/\*(.*)\*/$").unwrap()
});

/// Classification of a single input line, carrying everything needed to
/// render its translated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutput {
    /// Constant declaration preceded by a doc comment recovered from a
    /// trailing block comment.
    DocumentedConst {
        /// Comment text, trimmed of surrounding whitespace
        doc: String,
        /// Constant name, carried over unchanged
        name: String,
        /// Constant value, carried over unchanged
        value: String,
    },

    /// Constant declaration with the unrecognized remainder of the line
    /// appended verbatim (often empty, sometimes a `//` trailer).
    PlainConst {
        name: String,
        value: String,
        rest: String,
    },

    /// Standalone doc comment recovered from a full-line block comment.
    DocComment(String),

    /// Line that matched no pattern and is forwarded untouched.
    PassThrough,
}

/// Counters describing one translation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationStats {
    /// Input lines read
    pub lines: usize,
    /// Constant declarations emitted
    pub constants: usize,
    /// Doc comment lines emitted
    pub doc_comments: usize,
    /// Lines forwarded unchanged
    pub passed_through: usize,
}

/// Classify one line of input against the header patterns, in priority
/// order. The line must already be stripped of its terminator; matching
/// never sees a newline.
pub fn classify_line(line: &str) -> LineOutput {
    if let Some(caps) = MACRO_PATTERN.captures(line) {
        return classify_declaration(&caps[1], &caps[2], &caps[3]);
    }

    if let Some(caps) = ENUM_CONST_PATTERN.captures(line) {
        return classify_declaration(&caps[1], &caps[2], &caps[3]);
    }

    if let Some(caps) = FULL_LINE_COMMENT_PATTERN.captures(line) {
        return LineOutput::DocComment(caps[1].trim().to_string());
    }

    LineOutput::PassThrough
}

// Shared branch for the macro and enum-constant patterns: both reduce to
// a (name, value, rest) triple with identical comment handling.
fn classify_declaration(name: &str, value: &str, rest: &str) -> LineOutput {
    if let Some(caps) = TRAILING_COMMENT_PATTERN.captures(rest) {
        LineOutput::DocumentedConst {
            doc: caps[1].trim().to_string(),
            name: name.to_string(),
            value: value.to_string(),
        }
    } else {
        LineOutput::PlainConst {
            name: name.to_string(),
            value: value.to_string(),
            rest: rest.to_string(),
        }
    }
}

/// Render one classified line. Pass-through lines are written from the
/// raw input bytes so the original terminator (or its absence on the
/// last line) survives; all translated shapes end with a fresh newline.
pub fn write_line<W: Write>(writer: &mut W, output: &LineOutput, raw: &str) -> std::io::Result<()> {
    match output {
        LineOutput::DocumentedConst { doc, name, value } => {
            writeln!(writer, "/// {}", doc)?;
            writeln!(writer, "pub const {}: i32 = {};", name, value)
        }
        LineOutput::PlainConst { name, value, rest } => {
            writeln!(writer, "pub const {}: i32 = {};{}", name, value, rest)
        }
        LineOutput::DocComment(text) => {
            writeln!(writer, "/// {}", text)
        }
        LineOutput::PassThrough => {
            writer.write_all(raw.as_bytes())
        }
    }
}

/// Translate a whole header stream, one line at a time, writing the
/// result as it goes. Each line is classified independently; nothing is
/// carried from one line to the next.
pub fn translate<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<TranslationStats, TranslateError> {
    let mut stats = TranslationStats::default();
    let mut raw = String::new();

    loop {
        raw.clear();
        if reader.read_line(&mut raw)? == 0 {
            break;
        }
        stats.lines += 1;

        // Match against the line without its terminator; CRLF input is
        // treated the same as LF for classification.
        let line = raw
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(&raw);

        let output = classify_line(line);
        trace!("line {}: {:?}", stats.lines, output);

        match &output {
            LineOutput::DocumentedConst { .. } => {
                stats.doc_comments += 1;
                stats.constants += 1;
            }
            LineOutput::PlainConst { .. } => stats.constants += 1,
            LineOutput::DocComment(_) => stats.doc_comments += 1,
            LineOutput::PassThrough => stats.passed_through += 1,
        }

        write_line(writer, &output, &raw)?;
    }

    writer.flush()?;
    Ok(stats)
}
