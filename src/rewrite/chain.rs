// Thu Feb 12 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

static CHAIN_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[A-Za-z_][A-Za-z0-9_]*\(").unwrap());

// Breaks long reconstructed invocation chains onto one line per call. The
// first call stays on the original line; each later call continues on a new
// line prefixed with the original leading whitespace, so stripping the
// inserted indentation and re-joining reproduces the input exactly.
pub struct ChainSegmenter;

impl ChainSegmenter {
    pub fn new() -> Self {
        Self
    }

    pub fn segment_all(&self, lines: &[String]) -> Vec<String> {
        let mut out = Vec::with_capacity(lines.len());
        for line in lines {
            out.extend(self.segment_line(line));
        }
        out
    }

    pub fn segment_line(&self, line: &str) -> Vec<String> {
        let starts: Vec<usize> = CHAIN_CALL.find_iter(line).map(|m| m.start()).collect();
        if starts.len() < 2 {
            return vec![line.to_string()];
        }

        let indent = leading_whitespace(line);
        let mut pieces = Vec::with_capacity(starts.len());
        let mut previous = 0;

        for &start in &starts[1..] {
            if previous == 0 {
                pieces.push(line[..start].to_string());
            } else {
                pieces.push(format!("{}{}", indent, &line[previous..start]));
            }
            previous = start;
        }
        pieces.push(format!("{}{}", indent, &line[previous..]));

        pieces
    }
}

impl Default for ChainSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn leading_whitespace(line: &str) -> &str {
    let end = line
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(line.len());
    &line[..end]
}
