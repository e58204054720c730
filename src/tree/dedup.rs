//! Structural deduplication of repeated siblings.
//!
//! Consecutive siblings with the same structural fingerprint collapse into
//! one representative plus a repeat count. The fingerprint covers tag, style
//! overrides, and recursive child shape, but deliberately ignores text and
//! identifying attributes, so differently-worded repeats of the same layout
//! (list rows, card grids) still collapse. Only adjacent runs merge: the
//! locality reflects how list/grid markup actually repeats, and merging
//! non-adjacent twins would reorder content.

use super::{Node, Repeated};

/// Collapse repeated sibling runs, bottom-up.
pub fn deduplicate(node: Node) -> Node {
    let mut node = node;
    if node.children.is_empty() {
        return node;
    }

    // Children first, so run grouping sees canonical subtrees.
    let children: Vec<Node> = node.children.drain(..).map(deduplicate).collect();

    let mut grouped = Vec::with_capacity(children.len());
    let mut run: Vec<Node> = Vec::new();
    let mut run_hash = 0u32;

    for child in children {
        let hash = fingerprint(&child);
        if !run.is_empty() && hash == run_hash {
            run.push(child);
            continue;
        }
        flush_run(&mut grouped, &mut run);
        run_hash = hash;
        run.push(child);
    }
    flush_run(&mut grouped, &mut run);

    node.children = grouped;
    node
}

fn flush_run(out: &mut Vec<Node>, run: &mut Vec<Node>) {
    if run.is_empty() {
        return;
    }
    let count = run.len();
    let mut representative = run.remove(0);
    run.clear();
    if count > 1 {
        representative.repeated = Some(Repeated {
            count,
            note: format!("{count} identical elements with this structure"),
        });
    }
    out.push(representative);
}

/// 32-bit structural fingerprint of a subtree.
///
/// Stability is only needed within one run; the hash is djb2 over a
/// deterministic structure string.
pub(crate) fn fingerprint(node: &Node) -> u32 {
    djb2(&structure_string(node))
}

fn structure_string(node: &Node) -> String {
    let mut s = node.tag.clone();

    if let Some(css) = &node.css {
        let mut pairs: Vec<(&str, &str)> = css.iter().collect();
        pairs.sort_unstable();
        s.push_str("|css:");
        for (i, (k, v)) in pairs.iter().enumerate() {
            if i > 0 {
                s.push(',');
            }
            s.push_str(k);
            s.push('=');
            s.push_str(v);
        }
    }

    if !node.children.is_empty() {
        s.push_str(&format!("|ch:{}", node.children.len()));
        s.push('|');
        for (i, child) in node.children.iter().enumerate() {
            if i > 0 {
                s.push(',');
            }
            s.push_str(&fingerprint(child).to_string());
        }
    }

    // Shape markers for replaced/form elements; text stays excluded.
    if node.tag == "img" {
        s.push_str("|img");
    }
    if node.tag == "svg" {
        s.push_str("|svg");
    }
    if let Some(input_type) = &node.input_type {
        s.push_str("|input:");
        s.push_str(input_type);
    }

    s
}

fn djb2(s: &str) -> u32 {
    let mut hash: u32 = 5381;
    for byte in s.bytes() {
        hash = hash.wrapping_shl(5).wrapping_add(hash).wrapping_add(byte as u32);
    }
    hash
}
