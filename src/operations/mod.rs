pub mod creation;
pub mod query;
pub mod shaping;

pub use creation::{BuildSolid, GenerateFace};
pub use query::{IsValid, SignedArea};
pub use shaping::Extrude;
