pub mod directive;
pub mod literal;
pub mod optab;
pub mod record;
