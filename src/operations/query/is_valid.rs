use std::collections::HashMap;

use crate::tessellation::SolidMesh;

/// Checks that a solid mesh is closed and consistently wound.
///
/// Valid means every index is in range, no triangle repeats a vertex, and
/// every directed edge `a -> b` appears exactly once with its reverse
/// `b -> a` also appearing exactly once.
pub struct IsValid<'a> {
    mesh: &'a SolidMesh,
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(mesh: &'a SolidMesh) -> Self {
        Self { mesh }
    }

    /// Executes the validation, returning `true` if the mesh is closed.
    #[must_use]
    pub fn execute(&self) -> bool {
        let vertex_count = self.mesh.vertices.len();
        if self.mesh.indices.is_empty() {
            return false;
        }

        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        for &[a, b, c] in &self.mesh.indices {
            if [a, b, c].iter().any(|&i| i as usize >= vertex_count) {
                return false;
            }
            if a == b || b == c || c == a {
                return false;
            }
            for edge in [(a, b), (b, c), (c, a)] {
                *directed.entry(edge).or_insert(0) += 1;
            }
        }

        directed
            .iter()
            .all(|(&(a, b), &count)| count == 1 && directed.get(&(b, a)) == Some(&1))
    }
}
