pub mod edge;
pub mod end_arc;
pub mod outline;
pub mod permutation;

pub use edge::{EdgeType, Side};
pub use end_arc::EndArc;
pub use outline::Outline;
pub use permutation::{Permutation, Permutations};
