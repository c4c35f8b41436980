//! Pretty (multi-line) rendering.

use super::{List, Node, Separator};
use crate::builder::Builder;
use crate::fragment::Fragment;

impl List {
    /// Render this list in pretty mode with `indent` spaces before each
    /// continuation line.
    ///
    /// Nested lists are rendered in pretty mode with the same indent, whatever
    /// their own setting.
    pub fn build_pretty(&self, indent: usize) -> Fragment {
        let mut lines: Vec<Vec<String>> = Vec::new();
        let mut args = Vec::new();
        let mut survivors = 0usize;
        let mut prev_breaks = false;

        for child in &self.children {
            let rendered = match child {
                Node::List(list) => list.build_pretty(indent),
                other => other.build(),
            };
            let (sql, child_args) = rendered.into_parts();
            if sql.is_empty() {
                continue;
            }

            // An empty child never reaches here, so it cannot start or end a line.
            let breaks = child.breaks_line();
            if lines.is_empty() || breaks || prev_breaks {
                lines.push(vec![sql]);
            } else if let Some(line) = lines.last_mut() {
                line.push(sql);
            }

            prev_breaks = breaks;
            survivors += 1;
            args.extend(child_args);
        }

        if lines.is_empty() {
            return Fragment::empty();
        }

        let glue = format!(" {} ", self.separator);
        let sql = lines
            .iter()
            .map(|members| members.join(&glue))
            .collect::<Vec<_>>()
            .join(&self.connector(indent));
        Fragment::new(self.wrap(sql, survivors), args)
    }

    /// Newline, indent and keyword between lines.
    ///
    /// OR lines get one extra space to sit under the opening parenthesis.
    fn connector(&self, indent: usize) -> String {
        let width = match self.separator {
            Separator::And => indent,
            Separator::Or => indent + 1,
        };
        format!("\n{:width$}{} ", "", self.separator)
    }
}
