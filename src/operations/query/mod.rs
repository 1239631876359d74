mod area;
mod is_valid;

pub use area::SignedArea;
pub use is_valid::IsValid;
