pub mod chart_panel;
pub mod header;
pub mod layout;
pub mod metric_card;
pub mod tables;
