//! Command implementations.

pub mod agroforestry;
pub mod calculate;
pub mod rice;
pub mod species;

pub use self::agroforestry::execute_agroforestry;
pub use self::calculate::execute_calculate;
pub use self::rice::execute_rice;
pub use self::species::execute_species;
