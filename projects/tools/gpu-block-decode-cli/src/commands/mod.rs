pub mod astc;
pub mod bc7;
pub mod footprints;
