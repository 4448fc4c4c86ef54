pub mod bonds;
