//! Theme table: four named palettes, exactly one active at a time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
/// Named desktop theme.
pub enum ThemeName {
    /// Blue Luna palette. Also the fallback for unknown names.
    WindowsXp,
    /// Teal desktop with grey bevelled chrome. Active at startup.
    #[default]
    Windows95,
    /// Light platinum palette.
    MacOs,
    /// Walnut cabinet with a brass dial.
    OldRadio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Palette applied to the shell chrome and window frames.
pub struct ThemeDescriptor {
    /// Display name shown in the theme selector.
    pub name: &'static str,
    /// Desktop background.
    pub desktop: &'static str,
    /// Top strip background.
    pub taskbar: &'static str,
    /// Window body background.
    pub window_background: &'static str,
    /// Window border colour(s).
    pub window_border: &'static str,
    /// Window title bar background.
    pub title_bar: &'static str,
    /// Window title text colour.
    pub title_text: &'static str,
    /// Body text colour.
    pub text: &'static str,
    /// Desktop icon label colour.
    pub icon_text: &'static str,
    /// Desktop icon label shadow.
    pub icon_shadow: &'static str,
}

const WINDOWS_XP: ThemeDescriptor = ThemeDescriptor {
    name: "Windows XP",
    desktop: "#3a6ea5",
    taskbar: "linear-gradient(to bottom, #1f2f86 0%, #2754e6 8%, #2b5aeb 40%, #2d5ff4 88%, #2d5ff4 93%, #2b5cee 95%, #2851da 96%, #2851da 100%)",
    window_background: "#ECE9D8",
    window_border: "#0054E3",
    title_bar: "linear-gradient(to bottom, #0058ee 0%, #3a93ff 3%, #288eff 5%, #127dff 16%, #036ffc 22%, #0262ee 33%, #0057e5 50%, #0054e3 66%, #004fe0 72%, #004bda 77%, #0042cc 88%, #003fc5 95%, #003bbb 100%)",
    title_text: "white",
    text: "black",
    icon_text: "white",
    icon_shadow: "1px 1px 1px black",
};

const WINDOWS_95: ThemeDescriptor = ThemeDescriptor {
    name: "Windows 95",
    desktop: "#008080",
    taskbar: "#c0c0c0",
    window_background: "#c0c0c0",
    window_border: "#ffffff #808080 #808080 #ffffff",
    title_bar: "#000080",
    title_text: "white",
    text: "black",
    icon_text: "white",
    icon_shadow: "1px 1px 1px black",
};

const MAC_OS: ThemeDescriptor = ThemeDescriptor {
    name: "macOS",
    desktop: "#f0f0f0",
    taskbar: "rgba(255, 255, 255, 0.8)",
    window_background: "white",
    window_border: "#cccccc",
    title_bar: "linear-gradient(to bottom, #f6f6f6, #e6e6e6)",
    title_text: "black",
    text: "black",
    icon_text: "black",
    icon_shadow: "none",
};

const OLD_RADIO: ThemeDescriptor = ThemeDescriptor {
    name: "Old Radio",
    desktop: "#5c3317",
    taskbar: "linear-gradient(to bottom, #a0522d, #8b4513)",
    window_background: "#f4e1c1",
    window_border: "#8b7765",
    title_bar: "linear-gradient(to bottom, #cd853f, #8b4513)",
    title_text: "#ffd700",
    text: "#2f2f2f",
    icon_text: "#ffd700",
    icon_shadow: "1px 1px 2px #2f4f4f",
};

impl ThemeName {
    /// Every theme in selector order.
    pub const ALL: [Self; 4] = [Self::WindowsXp, Self::Windows95, Self::MacOs, Self::OldRadio];

    /// Resolves a display name; unknown names fall back to Windows XP.
    pub fn resolve(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|theme| theme.display_name() == name.trim())
            .unwrap_or(Self::WindowsXp)
    }

    /// Display name, also the persisted form.
    pub fn display_name(self) -> &'static str {
        self.descriptor().name
    }

    /// Palette for this theme.
    pub fn descriptor(self) -> &'static ThemeDescriptor {
        match self {
            Self::WindowsXp => &WINDOWS_XP,
            Self::Windows95 => &WINDOWS_95,
            Self::MacOs => &MAC_OS,
            Self::OldRadio => &OLD_RADIO,
        }
    }

    /// Stable token for `data-ui-theme` selectors.
    pub fn token(self) -> &'static str {
        match self {
            Self::WindowsXp => "windows-xp",
            Self::Windows95 => "windows-95",
            Self::MacOs => "macos",
            Self::OldRadio => "old-radio",
        }
    }
}

impl ThemeDescriptor {
    /// Inline CSS custom properties consumed by the shell stylesheet.
    pub fn css_variables(&self) -> String {
        format!(
            "--desktop-bg: {}; --taskbar-bg: {}; --window-bg: {}; --window-border: {}; \
             --titlebar-bg: {}; --titlebar-text: {}; --text-color: {}; --icon-text: {}; \
             --icon-shadow: {};",
            self.desktop,
            self.taskbar,
            self.window_background,
            self.window_border,
            self.title_bar,
            self.title_text,
            self.text,
            self.icon_text,
            self.icon_shadow,
        )
    }
}
