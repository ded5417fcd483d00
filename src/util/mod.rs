pub mod helper;
pub mod testing;
pub mod validation;
