use crate::theme::{Accent, Icon, Tone};

/// Hover disclosure content of a metric card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDetail {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub period: &'static str,
}

/// Display values of one metric card. All fields are authored literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDescriptor {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    /// Authored per metric; the sign of `delta` is never consulted.
    pub is_positive: bool,
    pub icon: Icon,
    pub accent: Accent,
    pub description: &'static str,
    pub detail: MetricDetail,
}

impl MetricDescriptor {
    pub fn delta_tone(&self) -> Tone {
        Tone::from_positive(self.is_positive)
    }

    /// Progress towards target in percent, derived from the leading number
    /// of the display value and capped at 100.
    pub fn target_progress(&self) -> u8 {
        match leading_number(self.value) {
            Some(n) if n > 0.0 => (n * 10.0).floor().min(100.0) as u8,
            _ => 0,
        }
    }
}

/// Longest numeric prefix of `text`, e.g. `"74%"` -> 74 and `"1,247"` -> 1.
pub fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
        }
        if frac > end + 1 || end > digits_start {
            end = frac;
        }
    }
    text[..end].parse().ok()
}

/// Transient hover state of a card; resets whenever the pointer leaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricCardState {
    detail_open: bool,
}

impl MetricCardState {
    pub fn pointer_enter(&mut self) {
        self.detail_open = true;
    }

    pub fn pointer_leave(&mut self) {
        self.detail_open = false;
    }

    pub fn toggle(&mut self) {
        self.detail_open = !self.detail_open;
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Token;

    const DETAIL: MetricDetail = MetricDetail {
        title: "t",
        description: "d",
        details: &["one", "two"],
        period: "vs last 7 days",
    };

    fn metric(value: &'static str, delta: &'static str, is_positive: bool) -> MetricDescriptor {
        MetricDescriptor {
            label: "Metric",
            value,
            delta,
            is_positive,
            icon: Icon::Eye,
            accent: Accent::Primary,
            description: "",
            detail: DETAIL,
        }
    }

    #[test]
    fn delta_tone_comes_from_authored_flag() {
        let visibility = metric("8.4", "+12.5%", true);
        assert_eq!(visibility.delta_tone().badge(), Token::PositiveBadge);

        // Lower rank is better, but the card is authored as negative.
        let rank = metric("2.3", "-0.4", false);
        assert_eq!(rank.delta_tone().badge(), Token::NegativeBadge);

        let odd = metric("1", "+3", false);
        assert_eq!(odd.delta_tone(), Tone::Negative);
    }

    #[test]
    fn progress_uses_leading_number() {
        assert_eq!(metric("8.4", "", true).target_progress(), 84);
        assert_eq!(metric("74%", "", true).target_progress(), 100);
        assert_eq!(metric("1,247", "", true).target_progress(), 10);
        assert_eq!(metric("2.3", "", true).target_progress(), 23);
        assert_eq!(metric("n/a", "", true).target_progress(), 0);
    }

    #[test]
    fn leading_number_matches_prefix() {
        assert_eq!(leading_number(" 12.5x"), Some(12.5));
        assert_eq!(leading_number("-0.4"), Some(-0.4));
        assert_eq!(leading_number(".5"), Some(0.5));
        assert_eq!(leading_number("7."), Some(7.0));
        assert_eq!(leading_number("abc"), None);
        assert_eq!(leading_number("-"), None);
    }

    #[test]
    fn detail_panel_resets_on_leave() {
        let mut state = MetricCardState::default();
        state.pointer_enter();
        assert!(state.is_detail_open());
        state.pointer_leave();
        assert!(!state.is_detail_open());
        state.toggle();
        assert!(state.is_detail_open());
    }
}
