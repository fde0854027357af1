use super::ParseNode;

/// Renders a parse tree as a fixed-width ASCII diagram for debugging.
///
/// Each node is drawn as a 3-character code `OMC`:
/// - `O` is the first character of the node's operation name (`c` for `Concat`, `|` `*` `+` `?`
///   for themselves), or `N` for a leaf.
/// - `M` is `.` for an `Any` leaf, else `N`.
/// - `C` is the literal character for a `Literal` leaf, `_` for an `Empty` leaf, or `N` otherwise.
///
/// Children hang off their parent at a fixed six-column indent (`+-----` or a continuing `|`/
/// space column), one per line.
pub fn format_parse_tree(node: &ParseNode) -> String {
    render(node).join("\n")
}

fn node_code(node: &ParseNode) -> String {
    match node {
        ParseNode::Literal(c) => format!("NN{c}"),
        ParseNode::Any => "N.N".to_string(),
        ParseNode::Empty => "NN_".to_string(),
        ParseNode::Concat(_) => "cNN".to_string(),
        ParseNode::Alt(_, _) => "|NN".to_string(),
        ParseNode::Star(_) => "*NN".to_string(),
        ParseNode::Plus(_) => "+NN".to_string(),
        ParseNode::Question(_) => "?NN".to_string(),
    }
}

fn children(node: &ParseNode) -> Vec<&ParseNode> {
    match node {
        ParseNode::Literal(_) | ParseNode::Any | ParseNode::Empty => vec![],
        ParseNode::Concat(v) => v.iter().collect(),
        ParseNode::Alt(a, b) => vec![a, b],
        ParseNode::Star(x) | ParseNode::Plus(x) | ParseNode::Question(x) => vec![x],
    }
}

fn render(node: &ParseNode) -> Vec<String> {
    let code = node_code(node);
    let kids = children(node);
    if kids.is_empty() {
        return vec![code];
    }

    let mut lines = Vec::new();
    let n = kids.len();
    for (i, child) in kids.into_iter().enumerate() {
        let child_lines = render(child);
        let has_more_siblings = i + 1 < n;
        let continuation_prefix = if has_more_siblings { "|     " } else { "      " };

        if i == 0 {
            lines.push(format!("{code}---{}", child_lines[0]));
        } else {
            lines.push("|".to_string());
            lines.push(format!("+-----{}", child_lines[0]));
        }
        for line in &child_lines[1..] {
            lines.push(format!("{continuation_prefix}{line}"));
        }
    }
    lines
}
