//! Dense identifier assignment.

use tracing::instrument;

use crate::domain::arena::TreeArena;
use crate::domain::layers::Layers;

/// Assigns every node its position in flattened layer-major order.
///
/// Must run after [`crate::domain::layers::rebuild`] so `layers` reflects the
/// current shape. Returns the number of ids handed out.
#[instrument(level = "debug", skip(arena, layers))]
pub fn rebuild(arena: &mut TreeArena, layers: &Layers) -> usize {
    let mut next_id = 0;
    for idx in layers.flatten() {
        if let Some(node) = arena.get_node_mut(idx) {
            node.id = next_id;
            next_id += 1;
        }
    }
    next_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layers;

    #[test]
    fn test_ids_follow_layer_major_order() {
        let mut arena = TreeArena::new();
        let a = arena.create_root("A").unwrap();
        let b = arena.create_child("B", a);
        let c = arena.create_child("C", b);
        let d = arena.create_child("D", a);

        let layers = layers::rebuild(&mut arena);
        let assigned = rebuild(&mut arena, &layers);

        assert_eq!(assigned, 4);
        let id = |idx| arena.get_node(idx).unwrap().id;
        assert_eq!((id(a), id(b), id(d), id(c)), (0, 1, 2, 3));
    }

    #[test]
    fn test_ids_on_empty_arena() {
        let mut arena = TreeArena::new();
        let layers = layers::rebuild(&mut arena);
        assert_eq!(rebuild(&mut arena, &layers), 0);
    }
}
