//! Chart panels over resident, constant datasets.

use tracing::trace;

use crate::error::{ModelError, SelectionError};
use crate::tabs::{TabConfig, TabSet};
use crate::theme::ChartColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSpec {
    pub key: &'static str,
    pub name: &'static str,
    pub color: ChartColor,
}

/// One category (date, brand, attribute) with a value per series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub category: &'static str,
    pub values: &'static [f64],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dataset {
    pub category_axis: &'static str,
    pub series: &'static [SeriesSpec],
    pub points: &'static [SeriesPoint],
}

impl Dataset {
    /// Checks that every point carries exactly one value per series.
    pub fn validate(&self) -> Result<(), ModelError> {
        let expected = self.series.len();
        match self.points.iter().find(|p| p.values.len() != expected) {
            Some(p) => Err(ModelError::RaggedDataset {
                category: p.category,
                expected,
                found: p.values.len(),
            }),
            None => Ok(()),
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.points.iter().map(|p| p.category)
    }

    /// Values of series `index` across all categories.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| p.values.get(index).copied().unwrap_or_default())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Area,
    StackedArea,
    Line,
    Bar,
    Radar,
    Donut,
}

/// A named way of looking at a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartView {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ChartKind,
    pub dataset: &'static Dataset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipEntry {
    pub name: &'static str,
    pub value: f64,
    pub color: ChartColor,
}

/// Every series' value at the hovered category.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub category: &'static str,
    pub entries: Vec<TooltipEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanelState {
    views: Vec<ChartView>,
    tabs: TabSet,
    hovered: Option<usize>,
}

impl ChartPanelState {
    pub fn new(views: impl IntoIterator<Item = ChartView>) -> Result<Self, ModelError> {
        let views: Vec<ChartView> = views.into_iter().collect();
        for view in &views {
            view.dataset.validate()?;
        }
        let tabs = TabSet::new(views.iter().map(|v| TabConfig::new(v.id, v.label)))?;
        Ok(Self {
            views,
            tabs,
            hovered: None,
        })
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    /// Whether a view switch should be offered at all.
    pub fn has_view_switch(&self) -> bool {
        self.views.len() > 1
    }

    pub fn active_view(&self) -> &ChartView {
        &self.views[self.tabs.active_index()]
    }

    /// Switches the rendered dataset and clears any hover.
    pub fn set_view(&mut self, id: &str) -> Result<(), SelectionError> {
        self.tabs.select(id)?;
        self.hovered = None;
        trace!(view = id, "chart view switched");
        Ok(())
    }

    /// Marks the category at `index` as hovered; out of range is ignored.
    pub fn hover(&mut self, index: usize) {
        if index < self.active_view().dataset.points.len() {
            self.hovered = Some(index);
        }
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn tooltip(&self) -> Option<Tooltip> {
        let dataset = self.active_view().dataset;
        let point = dataset.points.get(self.hovered?)?;
        let entries = dataset
            .series
            .iter()
            .zip(point.values)
            .map(|(series, value)| TooltipEntry {
                name: series.name,
                value: *value,
                color: series.color,
            })
            .collect();
        Some(Tooltip {
            category: point.category,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static VISIBILITY: Dataset = Dataset {
        category_axis: "date",
        series: &[
            SeriesSpec { key: "visibility", name: "Visibility Score", color: ChartColor::Blue },
            SeriesSpec { key: "presence", name: "Presence %", color: ChartColor::Green },
        ],
        points: &[
            SeriesPoint { category: "Jan 18", values: &[6.8, 68.0] },
            SeriesPoint { category: "Jan 19", values: &[7.2, 71.0] },
        ],
    };

    static MENTIONS: Dataset = Dataset {
        category_axis: "date",
        series: &[
            SeriesSpec { key: "mentions", name: "Total Mentions", color: ChartColor::Green },
            SeriesSpec { key: "citations", name: "Citations", color: ChartColor::Purple },
        ],
        points: &[SeriesPoint { category: "Jan 18", values: &[156.0, 89.0] }],
    };

    static RAGGED: Dataset = Dataset {
        category_axis: "date",
        series: &[SeriesSpec { key: "a", name: "A", color: ChartColor::Red }],
        points: &[SeriesPoint { category: "Jun 17", values: &[1.0, 2.0] }],
    };

    fn panel() -> ChartPanelState {
        ChartPanelState::new([
            ChartView { id: "visibility", label: "Visibility & Presence", kind: ChartKind::Area, dataset: &VISIBILITY },
            ChartView { id: "mentions", label: "Mentions & Citations", kind: ChartKind::Line, dataset: &MENTIONS },
        ])
        .unwrap()
    }

    #[test]
    fn defaults_to_first_view() {
        let panel = panel();
        assert_eq!(panel.active_view().id, "visibility");
        assert!(panel.has_view_switch());
        assert_eq!(panel.tooltip(), None);
    }

    #[test]
    fn tooltip_lists_every_series() {
        let mut panel = panel();
        panel.hover(1);
        let tooltip = panel.tooltip().unwrap();
        assert_eq!(tooltip.category, "Jan 19");
        assert_eq!(
            tooltip.entries,
            vec![
                TooltipEntry { name: "Visibility Score", value: 7.2, color: ChartColor::Blue },
                TooltipEntry { name: "Presence %", value: 71.0, color: ChartColor::Green },
            ]
        );
    }

    #[test]
    fn set_view_swaps_dataset_and_resets_hover() {
        let mut panel = panel();
        panel.hover(0);
        panel.set_view("mentions").unwrap();
        assert_eq!(panel.active_view().dataset, &MENTIONS);
        assert_eq!(panel.hovered(), None);
        assert_eq!(panel.tooltip(), None);
    }

    #[test]
    fn unknown_view_changes_nothing() {
        let mut panel = panel();
        panel.hover(1);
        assert!(panel.set_view("bogus").is_err());
        assert_eq!(panel.active_view().id, "visibility");
        assert_eq!(panel.hovered(), Some(1));
    }

    #[test]
    fn out_of_range_hover_is_ignored() {
        let mut panel = panel();
        panel.set_view("mentions").unwrap();
        panel.hover(5);
        assert_eq!(panel.hovered(), None);
    }

    #[test]
    fn ragged_dataset_is_rejected() {
        let err = ChartPanelState::new([ChartView {
            id: "x",
            label: "X",
            kind: ChartKind::Bar,
            dataset: &RAGGED,
        }])
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::RaggedDataset { category: "Jun 17", expected: 1, found: 2 }
        );
    }

    #[test]
    fn column_extracts_series_values() {
        assert_eq!(VISIBILITY.column(1), vec![68.0, 71.0]);
        assert_eq!(VISIBILITY.categories().collect::<Vec<_>>(), ["Jan 18", "Jan 19"]);
    }
}
