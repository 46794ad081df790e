use std::fmt::Debug;

use super::node::Link;

/// Debug printer for subtrees.
pub fn print<E: Debug, I>(link: &Link<E, I>, tab: &str) -> String {
    match link.as_deref() {
        None => "∅".to_string(),
        Some(node) => {
            let left = print(&node.left, &format!("{tab}  "));
            let right = print(&node.right, &format!("{tab}  "));
            format!(
                "Node [bf={} size={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                node.balance, node.size, node.value
            )
        }
    }
}
