//! The bundled font table and its consistency checks

pub mod table;
pub mod validate;

pub use table::FONTS;
pub use validate::validate_mappings;
