pub mod carousel;
pub mod history;
pub mod motion;
pub mod scroll;
pub mod table;
