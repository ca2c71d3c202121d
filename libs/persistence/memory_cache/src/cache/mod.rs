pub mod memory;
pub mod r#trait;

pub use memory::Memory;
