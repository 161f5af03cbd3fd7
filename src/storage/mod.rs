pub mod write_atomic;
