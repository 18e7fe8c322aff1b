//! Textual rendering of the strategy tree
//!
//! The format is line-oriented and indentation-based:
//! - a leaf renders as its sole candidate's digits, e.g. `1234`;
//! - an internal node renders as `{count}({guess})`, followed by one line per
//!   child in creation order: `" |   "` repeated (depth - 1) times, then
//!   `" |---"`, the feedback pair, `" -> "`, and the child rendered at the
//!   next depth.

use crate::solver::StrategyNode;

/// Render a strategy tree to its indented text form
#[must_use]
pub fn render(node: &StrategyNode) -> String {
    let mut out = String::new();
    render_at(node, 1, &mut out);
    out
}

fn render_at(node: &StrategyNode, depth: usize, out: &mut String) {
    let Some(guess) = node.guess() else {
        out.push_str(&node.candidates()[0].to_string());
        return;
    };

    out.push_str(&format!("{}({guess})", node.candidates().len()));
    for (feedback, child) in node.children() {
        out.push_str(&format!(
            "\n{} |---{feedback} -> ",
            " |   ".repeat(depth - 1)
        ));
        render_at(child, depth + 1, out);
    }
}
