/// Colours used inline by slide templates.
#[derive(Debug)]
pub struct Palette {
    pub background: &'static str,
    pub primary_text: &'static str,
    pub secondary_text: &'static str,
    pub accent: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
    pub card_bg: &'static str,
    pub border_light: &'static str,
}

/// Warm neutral palette shared by most training slides.
pub const WARM: Palette = Palette {
    background: "#f5f5f0",
    primary_text: "#4a4035",
    secondary_text: "#6b5d52",
    accent: "#e8e4dc",
    success: "#8a7967",
    warning: "#A89078",
    danger: "#8B6B6B",
    card_bg: "#ebe9e3",
    border_light: "#d4cfc7",
};

/// Higher-contrast palette for agenda and quiz slides.
pub const BRIGHT: Palette = Palette {
    background: "#f8f7f4",
    primary_text: "#2d3436",
    secondary_text: "#636e72",
    accent: "#0984e3",
    success: "#00b894",
    warning: "#fdcb6e",
    danger: "#d63031",
    card_bg: "#ffffff",
    border_light: "#dfe6e9",
};

/// Parchment palette for printable one-pagers. `success` doubles as highlight.
pub const PARCHMENT: Palette = Palette {
    background: "#f8f6f1",
    primary_text: "#3d3026",
    secondary_text: "#65584d",
    accent: "#d8c6b5",
    success: "#f1e7dc",
    warning: "#A89078",
    danger: "#8B6B6B",
    card_bg: "#ffffff",
    border_light: "#d4cfc7",
};

/// Fixed canvas size in CSS pixels.
#[derive(Debug)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
}

pub const WIDESCREEN: Frame = Frame { width: 1280, height: 720 };

/// 210 x 297 at 820px wide.
pub const A4_PORTRAIT: Frame = Frame { width: 820, height: 1160 };
