mod build_solid;
mod generate_face;

pub use build_solid::BuildSolid;
pub use generate_face::GenerateFace;
