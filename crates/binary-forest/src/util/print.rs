use std::fmt::Debug;

use crate::types::KvNode;

/// Debug printer for parent-linked trees.
///
/// `describe` adds variant-specific metadata (height, color, ...) after the
/// node index; return an empty string to print nothing extra.
pub fn print<K, V, N, F>(arena: &[N], node: Option<u32>, tab: &str, describe: &F) -> String
where
    K: Debug,
    V: Debug,
    N: KvNode<K, V>,
    F: Fn(&N) -> String,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print(arena, n.l(), &format!("{tab}  "), describe);
            let right = print(arena, n.r(), &format!("{tab}  "), describe);
            let meta = describe(n);
            let meta = if meta.is_empty() {
                String::new()
            } else {
                format!(" [{meta}]")
            };
            format!(
                "Node[{i}]{meta} {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.key(),
                n.value()
            )
        }
    }
}
