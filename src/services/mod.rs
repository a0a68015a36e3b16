pub mod assembly;
pub mod export;

pub use self::assembly::{AssembledPage, Interactions, PageAssembler};
