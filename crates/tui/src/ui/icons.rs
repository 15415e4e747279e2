//! Terminal glyphs standing in for the site's icon set.

use folio_types::IconTag;

/// Icons drawn by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Bot,
    BarChart,
    PenTool,
    Target,
    Menu,
    Close,
    ArrowRight,
    ChevronRight,
    CheckCircle,
    Play,
    Linkedin,
    Mail,
    Github,
}

/// Icon used for any skill tag without a dedicated glyph.
pub const DEFAULT_SKILL_ICON: Icon = Icon::Target;

impl Icon {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Bot => "◈",
            Self::BarChart => "▁▃▇",
            Self::PenTool => "✎",
            Self::Target => "◎",
            Self::Menu => "☰",
            Self::Close => "✕",
            Self::ArrowRight => "→",
            Self::ChevronRight => "›",
            Self::CheckCircle => "✔",
            Self::Play => "▶",
            Self::Linkedin => "in",
            Self::Mail => "@",
            Self::Github => "gh",
        }
    }
}

impl From<IconTag> for Icon {
    fn from(tag: IconTag) -> Self {
        match tag {
            IconTag::Bot => Icon::Bot,
            IconTag::BarChart3 => Icon::BarChart,
            IconTag::PenTool => Icon::PenTool,
            IconTag::Target => Icon::Target,
            IconTag::Unknown => DEFAULT_SKILL_ICON,
        }
    }
}
