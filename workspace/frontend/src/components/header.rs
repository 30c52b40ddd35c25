mod analytics_header;
mod filter_select;
mod header_frame;

pub use analytics_header::AnalyticsHeader;
pub use header_frame::{action_button, FilterBinding, HeaderFrame};
