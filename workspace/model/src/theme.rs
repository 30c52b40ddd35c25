//! Semantic styling vocabulary.
//!
//! Components ask for a [`Token`] instead of spelling out utility classes, and
//! every per-row colour or icon is a closed enum so no label can go unmapped.

/// Semantic class requested from the styling layer (Tailwind + daisyUI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    PrimaryText,
    SecondaryText,
    CardSurface,
    GlassSurface,
    TagSurface,
    HighlightTag,
    PositiveIndicator,
    NegativeIndicator,
    WarningIndicator,
    PositiveBadge,
    NegativeBadge,
    ActiveNav,
    IdleNav,
    ActiveTab,
    IdleTab,
}

impl Token {
    pub fn class(self) -> &'static str {
        match self {
            Token::PrimaryText => "text-base-content",
            Token::SecondaryText => "text-base-content/70",
            Token::CardSurface => "card bg-base-100 shadow",
            Token::GlassSurface => "card bg-base-100/60 backdrop-blur shadow-lg",
            Token::TagSurface => "badge badge-ghost",
            Token::HighlightTag => "badge badge-primary",
            Token::PositiveIndicator => "text-success",
            Token::NegativeIndicator => "text-error",
            Token::WarningIndicator => "text-warning",
            Token::PositiveBadge => "badge badge-success badge-outline",
            Token::NegativeBadge => "badge badge-error badge-outline",
            Token::ActiveNav => "active",
            Token::IdleNav => "",
            Token::ActiveTab => "tab tab-active",
            Token::IdleTab => "tab",
        }
    }
}

/// Direction a value should be read in, authored per metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Positive,
    Negative,
    Warning,
    Neutral,
}

impl Tone {
    pub fn from_positive(is_positive: bool) -> Self {
        if is_positive { Tone::Positive } else { Tone::Negative }
    }

    pub fn text(self) -> Token {
        match self {
            Tone::Positive => Token::PositiveIndicator,
            Tone::Negative => Token::NegativeIndicator,
            Tone::Warning => Token::WarningIndicator,
            Tone::Neutral => Token::SecondaryText,
        }
    }

    pub fn badge(self) -> Token {
        match self {
            Tone::Positive => Token::PositiveBadge,
            Tone::Negative => Token::NegativeBadge,
            Tone::Warning | Tone::Neutral => Token::TagSurface,
        }
    }
}

/// Gradient backdrop behind a metric icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Primary,
    Secondary,
    Warm,
    Violet,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Primary => "bg-gradient-to-br from-blue-500 to-cyan-400",
            Accent::Secondary => "bg-gradient-to-br from-green-500 to-emerald-400",
            Accent::Warm => "bg-gradient-to-br from-orange-500 to-amber-400",
            Accent::Violet => "bg-gradient-to-br from-purple-500 to-fuchsia-400",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    BarChart,
    FileText,
    Lightbulb,
    Settings,
    Brain,
    Heart,
    Quote,
    Search,
    Zap,
    BookOpen,
    Puzzle,
    User,
    Sparkles,
    TrendingUp,
    Eye,
    Target,
    Trophy,
    Message,
    Activity,
    Filter,
    Download,
    Info,
    Award,
    Star,
    Alert,
    Clock,
    Globe,
}

impl Icon {
    /// Font Awesome class list for this icon.
    pub fn class(self) -> &'static str {
        match self {
            Icon::BarChart => "fas fa-chart-column",
            Icon::FileText => "fas fa-file-lines",
            Icon::Lightbulb => "fas fa-lightbulb",
            Icon::Settings => "fas fa-gear",
            Icon::Brain => "fas fa-brain",
            Icon::Heart => "fas fa-heart",
            Icon::Quote => "fas fa-quote-right",
            Icon::Search => "fas fa-magnifying-glass",
            Icon::Zap => "fas fa-bolt",
            Icon::BookOpen => "fas fa-book-open",
            Icon::Puzzle => "fas fa-puzzle-piece",
            Icon::User => "fas fa-user",
            Icon::Sparkles => "fas fa-wand-magic-sparkles",
            Icon::TrendingUp => "fas fa-arrow-trend-up",
            Icon::Eye => "fas fa-eye",
            Icon::Target => "fas fa-bullseye",
            Icon::Trophy => "fas fa-trophy",
            Icon::Message => "fas fa-message",
            Icon::Activity => "fas fa-wave-square",
            Icon::Filter => "fas fa-filter",
            Icon::Download => "fas fa-download",
            Icon::Info => "fas fa-circle-info",
            Icon::Award => "fas fa-award",
            Icon::Star => "fas fa-star",
            Icon::Alert => "fas fa-circle-exclamation",
            Icon::Clock => "fas fa-clock",
            Icon::Globe => "fas fa-globe",
        }
    }
}

/// Closed chart palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartColor {
    Blue,
    Green,
    Purple,
    Amber,
    Red,
}

impl ChartColor {
    /// Slice colours, in order, for charts coloured by category.
    pub const PALETTE: [ChartColor; 5] = [
        ChartColor::Blue,
        ChartColor::Green,
        ChartColor::Purple,
        ChartColor::Amber,
        ChartColor::Red,
    ];

    pub fn cycle(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    pub fn hex(self) -> &'static str {
        match self {
            ChartColor::Blue => "#3B82F6",
            ChartColor::Green => "#22C55E",
            ChartColor::Purple => "#8B5CF6",
            ChartColor::Amber => "#F59E0B",
            ChartColor::Red => "#EF4444",
        }
    }
}

/// Brands tracked in competitor comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    Ai8Digital,
    Soroco,
    Mixpanel,
    Nintex,
    CompetitorE,
}

impl Brand {
    pub const OWN: Brand = Brand::Ai8Digital;

    pub fn name(self) -> &'static str {
        match self {
            Brand::Ai8Digital => "AI8 Digital",
            Brand::Soroco => "Soroco",
            Brand::Mixpanel => "Mixpanel",
            Brand::Nintex => "Nintex",
            Brand::CompetitorE => "Competitor E",
        }
    }

    pub fn color(self) -> ChartColor {
        match self {
            Brand::Ai8Digital => ChartColor::Blue,
            Brand::Soroco => ChartColor::Green,
            Brand::Mixpanel => ChartColor::Purple,
            Brand::Nintex => ChartColor::Amber,
            Brand::CompetitorE => ChartColor::Red,
        }
    }

    pub fn is_own(self) -> bool {
        self == Self::OWN
    }

    /// Tag style used wherever a brand name is shown in a table.
    pub fn tag(self) -> Token {
        if self.is_own() { Token::HighlightTag } else { Token::TagSurface }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_follows_authored_flag() {
        assert_eq!(Tone::from_positive(true).badge(), Token::PositiveBadge);
        assert_eq!(Tone::from_positive(false).badge(), Token::NegativeBadge);
        assert_eq!(Tone::from_positive(false).text().class(), "text-error");
    }

    #[test]
    fn only_own_brand_is_highlighted() {
        assert_eq!(Brand::Ai8Digital.tag(), Token::HighlightTag);
        assert_eq!(Brand::Mixpanel.tag(), Token::TagSurface);
        assert_eq!(Brand::Soroco.color().hex(), "#22C55E");
    }

    #[test]
    fn palette_wraps_around() {
        assert_eq!(ChartColor::cycle(0), ChartColor::Blue);
        assert_eq!(ChartColor::cycle(6), ChartColor::Green);
    }
}
