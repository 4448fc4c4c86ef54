pub mod ai_panel;
pub mod chart;
pub mod hero;
pub mod nav;
pub mod newsletter;
pub mod price_table;
pub mod spotlight;
