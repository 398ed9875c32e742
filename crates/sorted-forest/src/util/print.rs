use super::{get_l, get_r, in_order, level_order};
use crate::types::Node;

/// Indented structural dump of the subtree under `node`.
///
/// `label` renders a single node; absent children are printed as `∅`.
pub fn print<N, F>(arena: &[N], node: Option<u32>, tab: &str, label: F) -> String
where
    N: Node,
    F: Fn(u32, &N) -> String,
{
    let mut out = String::new();
    // (node, indentation, edge prefix)
    let mut pending: Vec<(Option<u32>, String, &str)> = vec![(node, tab.to_string(), "")];
    while let Some((curr, tab, edge)) = pending.pop() {
        if !edge.is_empty() {
            out.push('\n');
            out.push_str(&tab);
            out.push_str(edge);
        }
        match curr {
            None => out.push('∅'),
            Some(i) => {
                out.push_str(&label(i, &arena[i as usize]));
                let child_tab = format!("{tab}  ");
                pending.push((get_r(arena, i), child_tab.clone(), "R="));
                pending.push((get_l(arena, i), child_tab, "L="));
            }
        }
    }
    out
}

fn bracketed<I: IntoIterator<Item = String>>(items: I) -> String {
    let items: Vec<String> = items.into_iter().collect();
    if items.is_empty() {
        "[ ]".to_string()
    } else {
        format!("[ {} ]", items.join(", "))
    }
}

/// Renders node labels in breadth-first order, e.g. `[ D(b), C(b), F(b) ]`.
pub fn level_order_string<N, F>(arena: &[N], root: Option<u32>, label: F) -> String
where
    N: Node,
    F: Fn(&N) -> String,
{
    bracketed(
        level_order(arena, root)
            .into_iter()
            .map(|i| label(&arena[i as usize])),
    )
}

/// Renders node labels in ascending order, e.g. `[ 2, 6, 7, 10 ]`.
pub fn in_order_string<N, F>(arena: &[N], root: Option<u32>, label: F) -> String
where
    N: Node,
    F: Fn(&N) -> String,
{
    bracketed(
        in_order(arena, root)
            .into_iter()
            .map(|i| label(&arena[i as usize])),
    )
}
