// Tue Feb 10 2026 - Alex

// MCP correspondence files are comma-separated with a `searge,name,side,desc`
// header row. Only the first two columns matter here; anything that does not
// yield a (token, name) pair is skipped rather than failing the load.

pub fn parse_record(line: &str, prefix: &str) -> Option<(String, String)> {
    let mut columns = line.splitn(3, ',');

    let token = columns.next()?.trim();
    let name = columns.next()?.trim();

    if !token.starts_with(prefix) {
        return None;
    }
    if token.len() == prefix.len() || name.is_empty() {
        return None;
    }

    Some((token.to_string(), name.to_string()))
}

pub fn parse_records(text: &str, prefix: &str) -> Vec<(String, String)> {
    text.lines()
        .filter_map(|line| parse_record(line, prefix))
        .collect()
}
