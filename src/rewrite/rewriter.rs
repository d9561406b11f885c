// Wed Feb 11 2026 - Alex

use crate::mapping::{SymbolTable, FIELD_PREFIX, METHOD_PREFIX};
use crate::report::ReportSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Method,
    Field,
}

pub struct LineRewriter<'a> {
    table: &'a SymbolTable,
}

impl<'a> LineRewriter<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    pub fn rewrite_all(&self, lines: &[String], sink: &mut ReportSink) -> Vec<String> {
        sink.reset();
        lines
            .iter()
            .map(|line| self.rewrite_line(line, sink))
            .collect()
    }

    // Every marker occurrence on the line is processed, left to right. A
    // resolved token is replaced only in its matched span; an unresolved one
    // is left in place and flags the original line for the report.
    pub fn rewrite_line(&self, line: &str, sink: &mut ReportSink) -> String {
        let mut edited = line.to_string();
        let mut cursor = 0;
        let mut unresolved = false;

        while let Some((start, kind)) = next_marker(&edited, cursor) {
            let end = token_end(&edited, start, kind);
            let token = &edited[start..end];

            let translated = match kind {
                TokenKind::Method => self.table.translate_method(token),
                TokenKind::Field => self.table.translate_field(token),
            };

            match translated {
                Some(name) => {
                    let name = name.to_string();
                    edited.replace_range(start..end, &name);
                    sink.record_substitution();
                    cursor = start + name.len();
                }
                None => {
                    unresolved = true;
                    cursor = end;
                }
            }
        }

        if unresolved {
            sink.record_unresolved(line);
        }
        if edited != line {
            sink.record_edited_line();
        }

        edited
    }
}

fn next_marker(line: &str, from: usize) -> Option<(usize, TokenKind)> {
    let method = line[from..].find(METHOD_PREFIX).map(|i| i + from);
    let field = line[from..].find(FIELD_PREFIX).map(|i| i + from);

    match (method, field) {
        (Some(m), Some(f)) if f < m => Some((f, TokenKind::Field)),
        (Some(m), _) => Some((m, TokenKind::Method)),
        (None, Some(f)) => Some((f, TokenKind::Field)),
        (None, None) => None,
    }
}

// A method token runs from the marker to the character before the argument
// list it precedes. Field tokens carry no argument list, so they end where
// the identifier does; a method marker with no `(` after it falls back to
// the same rule.
fn token_end(line: &str, start: usize, kind: TokenKind) -> usize {
    match kind {
        TokenKind::Method => match line[start..].find('(') {
            Some(rel) => start + rel,
            None => identifier_end(line, start),
        },
        TokenKind::Field => identifier_end(line, start),
    }
}

fn identifier_end(line: &str, start: usize) -> usize {
    let bytes = line.as_bytes();
    let mut end = start;
    while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
        end += 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::SymbolTable;

    fn table() -> SymbolTable {
        SymbolTable::from_text(
            "searge,name,side,desc\n\
             func_123_a,doThing,2\n\
             func_456_b,onUpdate,2\n",
            "searge,name,side,desc\n\
             field_70170_p,worldObj,2\n",
        )
    }

    #[test]
    fn test_line_without_marker_is_untouched() {
        let table = table();
        let rewriter = LineRewriter::new(&table);
        let mut sink = ReportSink::new();

        let line = "\tat net.minecraft.world.World.tick(World.java:123)";
        assert_eq!(rewriter.rewrite_line(line, &mut sink), line);
        assert_eq!(sink.strings_replaced(), 0);
        assert_eq!(sink.lines_edited(), 0);
        assert_eq!(sink.unresolved_count(), 0);
    }

    #[test]
    fn test_single_resolvable_method_token() {
        let table = table();
        let rewriter = LineRewriter::new(&table);
        let mut sink = ReportSink::new();

        let out = rewriter.rewrite_line("func_123_a(x, y)", &mut sink);
        assert_eq!(out, "doThing(x, y)");
        assert_eq!(sink.strings_replaced(), 1);
        assert_eq!(sink.lines_edited(), 1);
        assert_eq!(sink.unresolved_count(), 0);
    }

    #[test]
    fn test_single_unresolvable_token() {
        let table = table();
        let rewriter = LineRewriter::new(&table);
        let mut sink = ReportSink::new();

        let line = "func_999_z(x)";
        assert_eq!(rewriter.rewrite_line(line, &mut sink), line);
        assert_eq!(sink.strings_replaced(), 0);
        assert_eq!(sink.lines_edited(), 0);
        assert_eq!(sink.unresolved_count(), 1);

        // Recurring line is recorded once.
        rewriter.rewrite_line(line, &mut sink);
        assert_eq!(sink.unresolved_count(), 1);
    }

    #[test]
    fn test_multiple_tokens_on_one_line() {
        let table = table();
        let rewriter = LineRewriter::new(&table);
        let mut sink = ReportSink::new();

        let out = rewriter.rewrite_line("this.func_123_a(this.func_456_b(x))", &mut sink);
        assert_eq!(out, "this.doThing(this.onUpdate(x))");
        assert_eq!(sink.strings_replaced(), 2);
        assert_eq!(sink.lines_edited(), 1);
    }

    #[test]
    fn test_field_token_without_argument_list() {
        let table = table();
        let rewriter = LineRewriter::new(&table);
        let mut sink = ReportSink::new();

        let out = rewriter.rewrite_line("this.field_70170_p.isRemote", &mut sink);
        assert_eq!(out, "this.worldObj.isRemote");
        assert_eq!(sink.strings_replaced(), 1);
    }

    #[test]
    fn test_mixed_resolved_and_unresolved() {
        let table = table();
        let rewriter = LineRewriter::new(&table);
        let mut sink = ReportSink::new();

        let line = "func_123_a(func_999_z(x))";
        let out = rewriter.rewrite_line(line, &mut sink);
        assert_eq!(out, "doThing(func_999_z(x))");
        assert_eq!(sink.strings_replaced(), 1);
        assert_eq!(sink.lines_edited(), 1);
        // The original pre-substitution line is what gets flagged.
        let flagged: Vec<&str> = sink.unresolved_lines().collect();
        assert_eq!(flagged, vec![line]);
    }

    #[test]
    fn test_method_marker_without_argument_list() {
        let table = table();
        let rewriter = LineRewriter::new(&table);
        let mut sink = ReportSink::new();

        let line = "saw func_999_z at the end";
        assert_eq!(rewriter.rewrite_line(line, &mut sink), line);
        assert_eq!(sink.unresolved_count(), 1);
    }

    #[test]
    fn test_rewrite_all_preserves_order_and_length() {
        let table = table();
        let rewriter = LineRewriter::new(&table);
        let mut sink = ReportSink::new();

        let lines = vec![
            "plain line".to_string(),
            "func_123_a(x)".to_string(),
            "func_999_z(x)".to_string(),
        ];

        let out = rewriter.rewrite_all(&lines, &mut sink);
        assert_eq!(out.len(), lines.len());
        assert_eq!(out[0], "plain line");
        assert_eq!(out[1], "doThing(x)");
        assert_eq!(out[2], "func_999_z(x)");
        assert_eq!(sink.strings_replaced(), 1);
        assert_eq!(sink.lines_edited(), 1);
        assert_eq!(sink.unresolved_count(), 1);
    }

    #[test]
    fn test_rewrite_is_idempotent_on_resolved_output() {
        let table = table();
        let rewriter = LineRewriter::new(&table);
        let mut sink = ReportSink::new();

        let lines = vec!["this.func_123_a(x).func_456_b(y)".to_string()];
        let first = rewriter.rewrite_all(&lines, &mut sink);

        let mut second_sink = ReportSink::new();
        let second = rewriter.rewrite_all(&first, &mut second_sink);

        assert_eq!(second, first);
        assert_eq!(second_sink.strings_replaced(), 0);
        assert_eq!(second_sink.lines_edited(), 0);
        assert_eq!(second_sink.unresolved_count(), 0);
    }

    #[test]
    fn test_rewrite_all_resets_counters() {
        let table = table();
        let rewriter = LineRewriter::new(&table);
        let mut sink = ReportSink::new();
        sink.record_substitution();
        sink.record_unresolved("stale");

        rewriter.rewrite_all(&["plain".to_string()], &mut sink);
        assert_eq!(sink.strings_replaced(), 0);
        assert_eq!(sink.unresolved_count(), 0);
    }
}
