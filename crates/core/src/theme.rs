//! Named color themes selectable per form.
//!
//! Styling-only: a theme never changes behavior, but the *selection* is part
//! of the form entity and is persisted with it. Each theme carries the style
//! tokens a client applies to the background, header, and buttons.

use serde::{Deserialize, Serialize};

/// The closed set of form themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Purple,
    Blue,
    Green,
    Red,
    Indigo,
}

/// Style tokens of one theme, as handed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub background: &'static str,
    pub header: &'static str,
    pub button: &'static str,
}

impl Theme {
    /// Every theme, in display order.
    pub const ALL: [Theme; 5] = [
        Theme::Purple,
        Theme::Blue,
        Theme::Green,
        Theme::Red,
        Theme::Indigo,
    ];

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Purple => "Purple",
            Theme::Blue => "Blue",
            Theme::Green => "Green",
            Theme::Red => "Red",
            Theme::Indigo => "Indigo",
        }
    }

    /// The style token set of this theme.
    pub fn tokens(&self) -> ThemeTokens {
        match self {
            Theme::Purple => ThemeTokens {
                background: "bg-purple-100",
                header: "bg-purple-600",
                button: "bg-purple-500 hover:bg-purple-600",
            },
            Theme::Blue => ThemeTokens {
                background: "bg-blue-100",
                header: "bg-blue-600",
                button: "bg-blue-500 hover:bg-blue-600",
            },
            Theme::Green => ThemeTokens {
                background: "bg-green-100",
                header: "bg-green-600",
                button: "bg-green-500 hover:bg-green-600",
            },
            Theme::Red => ThemeTokens {
                background: "bg-red-100",
                header: "bg-red-600",
                button: "bg-red-500 hover:bg-red-600",
            },
            Theme::Indigo => ThemeTokens {
                background: "bg-indigo-100",
                header: "bg-indigo-600",
                button: "bg-indigo-500 hover:bg-indigo-600",
            },
        }
    }
}
