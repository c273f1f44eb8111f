//! Debug utilities: structure dump and integrity checks.

use std::collections::HashSet;
use std::fmt::Write;

use smallvec::SmallVec;

use crate::node::NodeId;
use crate::trie::Trie;
use crate::words::WordList;

impl Trie {
    /// Depth-indented listing of every node: fragment text, range, and a `*`
    /// on terminal nodes. Siblings appear in insertion order.
    pub fn dump(&self, words: &WordList) -> String {
        let mut out = String::from("root\n");
        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        self.push_children(&mut stack, NodeId::ROOT, 1);

        while let Some((id, depth)) = stack.pop() {
            let range = self.range(id);
            let marker = if self.nodes.get(id).terminal.is_some() {
                " *"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "{}{} {}{}",
                "    ".repeat(depth),
                range.text(words),
                range,
                marker
            );
            self.push_children(&mut stack, id, depth + 1);
        }
        out
    }

    fn push_children(&self, stack: &mut Vec<(NodeId, usize)>, parent: NodeId, depth: usize) {
        let children: SmallVec<[NodeId; 16]> = self.nodes.children(parent).collect();
        stack.extend(children.into_iter().rev().map(|id| (id, depth)));
    }

    /// Verify trie integrity - returns a list of issues found.
    pub fn verify_integrity(&self, words: &WordList) -> Vec<String> {
        let mut issues = Vec::new();

        let root = self.root();
        if root.range.is_some() || root.next_sibling.is_some() || root.terminal.is_some() {
            issues.push("root must have no range, sibling or terminal".to_string());
        }

        let mut visited: HashSet<NodeId> = HashSet::new();
        visited.insert(NodeId::ROOT);
        let mut terminal_count = 0usize;

        // (parent, text spelled from the top level down to the parent)
        let mut stack: Vec<(NodeId, Vec<u8>)> = vec![(NodeId::ROOT, Vec::new())];
        while let Some((parent, path)) = stack.pop() {
            let mut first_bytes = [false; 256];

            for id in self.nodes.children(parent) {
                if !visited.insert(id) {
                    issues.push(format!("{id} is reachable twice"));
                    return issues;
                }

                let node = self.nodes.get(id);
                let Some(range) = node.range else {
                    issues.push(format!("{id} under {parent} has no range"));
                    continue;
                };
                let Some(word) = words.get(range.word) else {
                    issues.push(format!("{id} points at unknown word {}", range.word));
                    continue;
                };
                if range.start > range.end || range.end as usize >= word.len() {
                    issues.push(format!("{id} range {range} is outside {word:?}"));
                    continue;
                }
                if range.start as usize != path.len() {
                    issues.push(format!(
                        "{id} starts at {} but its parent ends at depth {}",
                        range.start,
                        path.len()
                    ));
                    continue;
                }
                if &word.as_bytes()[..path.len()] != path.as_slice() {
                    issues.push(format!("{id} range {range} is not anchored on its path"));
                }

                let fragment = range.resolve(words);
                let seen = &mut first_bytes[fragment[0] as usize];
                if *seen {
                    issues.push(format!(
                        "{id} shares first byte {:?} with a sibling",
                        fragment[0] as char
                    ));
                }
                *seen = true;

                let mut spelled = path.clone();
                spelled.extend_from_slice(fragment);

                match node.terminal {
                    Some(t) => {
                        terminal_count += 1;
                        if words.get(t).map(str::as_bytes) != Some(spelled.as_slice()) {
                            issues.push(format!(
                                "{id} is terminal for word {t} but spells {:?}",
                                String::from_utf8_lossy(&spelled)
                            ));
                        }
                    }
                    None if node.is_leaf() => {
                        issues.push(format!("leaf {id} is not terminal"));
                    }
                    None => {}
                }

                if !node.is_leaf() {
                    stack.push((id, spelled));
                }
            }
        }

        if visited.len() != self.nodes.len() {
            issues.push(format!(
                "{} of {} nodes are unreachable",
                self.nodes.len() - visited.len(),
                self.nodes.len()
            ));
        }
        if terminal_count != self.count {
            issues.push(format!(
                "{terminal_count} terminal nodes but {} stored words",
                self.count
            ));
        }
        for (i, slot) in self.terminals.iter().enumerate() {
            if let Some(node) = slot {
                if self.nodes.try_get(*node).and_then(|n| n.terminal).is_none() {
                    issues.push(format!("word {i} maps to non-terminal {node}"));
                }
            }
        }

        issues
    }
}
