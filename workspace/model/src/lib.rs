//! Headless state of the analytics dashboard UI.
//!
//! Everything here is plain data plus total transitions over small closed
//! enumerations, so it runs (and is tested) natively while the `frontend`
//! crate renders it in the browser.

pub mod chart;
pub mod composer;
pub mod error;
pub mod filter;
pub mod metric;
pub mod navigation;
pub mod page;
pub mod tabs;
pub mod theme;

pub use chart::{ChartKind, ChartPanelState, ChartView, Dataset, SeriesPoint, SeriesSpec, Tooltip};
pub use error::{ModelError, ParseIdError, SelectionError};
pub use filter::{FilterConfig, FilterOption, FilterValue};
pub use metric::{MetricCardState, MetricDescriptor, MetricDetail};
pub use navigation::{NavEntry, NavigationShell};
pub use page::{NavGroup, NavItem, PageId};
pub use tabs::{TabConfig, TabSet};
pub use theme::{Accent, Brand, ChartColor, Icon, Token, Tone};
