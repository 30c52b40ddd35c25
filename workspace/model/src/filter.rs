//! Closed filter enumerations threaded through the page composers.

use tracing::debug;

/// A dropdown-selectable value drawn from a closed enumeration.
pub trait FilterValue: Copy + Eq + Sized + 'static {
    /// Every option, in dropdown order.
    const ALL: &'static [Self];

    /// Label shown next to the dropdown.
    fn heading() -> &'static str;

    /// Wire value handed to change callbacks.
    fn value(self) -> &'static str;

    fn label(self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.value() == value)
    }

    /// Parses `value`, falling back to the first option when it is unknown.
    fn parse_or_first(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            let first = Self::ALL[0];
            debug!(
                filter = Self::heading(),
                value,
                fallback = first.value(),
                "unknown filter value"
            );
            first
        })
    }
}

macro_rules! filter_enum {
    (
        $(#[$meta:meta])*
        $name:ident, heading = $heading:literal, default = $default:ident,
        { $($variant:ident => ($value:literal, $label:literal)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl FilterValue for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn heading() -> &'static str {
                $heading
            }

            fn value(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.value())
            }
        }
    };
}

filter_enum! {
    /// Reporting window.
    TimeRange, heading = "Period", default = SevenDays, {
        OneDay => ("1d", "1D"),
        SevenDays => ("7d", "7D"),
        ThirtyDays => ("30d", "30D"),
        NinetyDays => ("90d", "90D"),
    }
}

filter_enum! {
    VisibilityFilter, heading = "Visibility", default = All, {
        All => ("all", "All Models"),
        TopTier => ("top-tier", "Top Tier"),
        Emerging => ("emerging", "Emerging"),
    }
}

filter_enum! {
    ModelFilter, heading = "Model Filter", default = All, {
        All => ("all", "All Models"),
        OpenAi => ("openai", "OpenAI"),
        Claude => ("claude", "Claude"),
        Gemini => ("gemini", "Gemini"),
    }
}

filter_enum! {
    CompetitorFilter, heading = "Competitor", default = All, {
        All => ("all", "All Competitors"),
        Top3 => ("top-3", "Top 3"),
        Direct => ("direct", "Direct Competitors"),
    }
}

filter_enum! {
    SentimentFilter, heading = "Sentiment Type", default = All, {
        All => ("all", "All Sentiment"),
        Positive => ("positive", "Positive Only"),
        Negative => ("negative", "Negative Only"),
        Neutral => ("neutral", "Neutral Only"),
    }
}

filter_enum! {
    CategoryFilter, heading = "Category", default = All, {
        All => ("all", "All Categories"),
        Product => ("product", "Product"),
        Service => ("service", "Service"),
        Brand => ("brand", "Brand"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Renderable description of one dropdown. The owner of the current value
/// also owns the change callback; the description carries neither state nor
/// behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub heading: &'static str,
    pub value: &'static str,
    pub options: Vec<FilterOption>,
}

impl FilterConfig {
    pub fn of<F: FilterValue>(current: F) -> Self {
        Self {
            heading: F::heading(),
            value: current.value(),
            options: F::ALL
                .iter()
                .map(|o| FilterOption {
                    value: o.value(),
                    label: o.label(),
                })
                .collect(),
        }
    }

    pub fn selected_label(&self) -> Option<&'static str> {
        self.options
            .iter()
            .find(|o| o.value == self.value)
            .map(|o| o.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_values_match_the_page_defaults() {
        assert_eq!(TimeRange::default().value(), "7d");
        assert_eq!(VisibilityFilter::default(), VisibilityFilter::All);
        assert_eq!(CompetitorFilter::default().label(), "All Competitors");
    }

    #[test]
    fn unknown_value_falls_back_to_first_option() {
        assert_eq!(TimeRange::parse_or_first("30d"), TimeRange::ThirtyDays);
        assert_eq!(TimeRange::parse_or_first("forever"), TimeRange::OneDay);
        assert_eq!(ModelFilter::parse_or_first(""), ModelFilter::All);
    }

    #[test]
    fn config_lists_options_in_order() {
        let config = FilterConfig::of(SentimentFilter::Negative);
        assert_eq!(config.heading, "Sentiment Type");
        assert_eq!(config.value, "negative");
        let values: Vec<_> = config.options.iter().map(|o| o.value).collect();
        assert_eq!(values, ["all", "positive", "negative", "neutral"]);
        assert_eq!(config.selected_label(), Some("Negative Only"));
    }

    #[test]
    fn display_uses_wire_value() {
        assert_eq!(CompetitorFilter::Top3.to_string(), "top-3");
    }
}
