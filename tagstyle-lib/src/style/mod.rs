pub mod declaration;
pub mod properties;
