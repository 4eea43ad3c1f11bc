// Roastery theme for beans-dash
// Dark espresso backgrounds with crema and caramel accents

use ratatui::style::Color;

pub struct Theme;

impl Theme {
    // Base colors - Dark roast backgrounds
    pub const BASE: Color = Color::Rgb(18, 12, 8);          // Espresso black
    pub const MANTLE: Color = Color::Rgb(24, 16, 11);       // Slightly lifted
    pub const PANEL_BG: Color = Color::Rgb(28, 19, 13);     // Main panels
    pub const SURFACE: Color = Color::Rgb(40, 28, 20);      // Elevated cards

    // Text colors
    pub const TEXT: Color = Color::Rgb(250, 242, 230);      // Milk foam
    pub const SUBTEXT: Color = Color::Rgb(200, 180, 160);   // Latte
    pub const OVERLAY: Color = Color::Rgb(140, 118, 98);    // Mocha
    pub const DIM: Color = Color::Rgb(80, 64, 52);          // Burnt

    // Accents
    pub const CREMA: Color = Color::Rgb(230, 180, 110);     // Crema gold
    pub const CARAMEL: Color = Color::Rgb(215, 130, 50);    // Caramel orange
    pub const CINNAMON: Color = Color::Rgb(190, 90, 50);    // Cinnamon
    pub const MINT: Color = Color::Rgb(120, 210, 150);      // Mint leaf
    pub const BERRY: Color = Color::Rgb(230, 85, 100);      // Berry red
    pub const STEAM: Color = Color::Rgb(170, 200, 220);     // Steam blue

    // Borders
    pub const BORDER_DIM: Color = Color::Rgb(70, 52, 40);
    pub const BORDER_BRIGHT: Color = Color::Rgb(200, 150, 90);

    pub const fn active_border() -> Color {
        Self::BORDER_BRIGHT
    }

    pub const fn inactive_border() -> Color {
        Self::BORDER_DIM
    }

    /// Table and section headers
    pub const fn header() -> Color {
        Self::CREMA
    }

    pub const fn success() -> Color {
        Self::MINT
    }

    pub const fn error() -> Color {
        Self::BERRY
    }

    pub const fn info() -> Color {
        Self::STEAM
    }

    /// Focused input or highlighted menu entry
    pub const fn selection() -> Color {
        Self::CARAMEL
    }

    /// Placeholder shown while a value is still loading
    pub const fn skeleton() -> Color {
        Self::DIM
    }
}
