use std::fmt::Debug;

use crate::types::ValueNode;

/// Debug printer for the subtree under `node`.
///
/// One line per node with its arena index and value, children indented
/// under `L=` / `R=` markers; `∅` for an empty slot.
pub fn print<T, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    T: Debug,
    N: ValueNode<T>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<T, N>(arena, n.left(), &format!("{tab}  "));
            let right = print::<T, N>(arena, n.right(), &format!("{tab}  "));
            format!("Node[{i}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}", n.value())
        }
    }
}
