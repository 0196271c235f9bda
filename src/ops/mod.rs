pub mod reveal;
pub mod scan;
