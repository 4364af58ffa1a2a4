use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Light/dark presentation state: an optional explicit preference layered
/// over the system color-scheme signal. The swap token is bumped on every
/// transition; a crossfade started under an older token is stale and its
/// completion is a no-op.
#[derive(Debug)]
pub struct ThemeController {
    preference: Option<Theme>,
    system: Theme,
    swap_token: u64,
}

impl ThemeController {
    pub fn new(preference: Option<Theme>, system: Theme) -> Self {
        Self {
            preference,
            system,
            swap_token: 0,
        }
    }

    pub fn preference(&self) -> Option<Theme> {
        self.preference
    }

    /// Explicit preference when stored, otherwise the system theme.
    pub fn effective(&self) -> Theme {
        self.preference.unwrap_or(self.system)
    }

    pub fn swap_token(&self) -> u64 {
        self.swap_token
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.swap_token
    }

    /// Flips the effective theme and pins the result as an explicit
    /// preference. Two toggles from an unset state leave the original
    /// theme pinned, not unset; only `reset` returns to follow-system.
    pub fn toggle(&mut self) -> Theme {
        let next = self.effective().flipped();
        self.preference = Some(next);
        self.swap_token += 1;
        next
    }

    /// Clears the explicit preference; the effective theme follows the
    /// system signal again.
    pub fn reset(&mut self) -> Theme {
        self.preference = None;
        self.swap_token += 1;
        self.effective()
    }

    /// Records a system color-scheme change. Returns true when the
    /// effective theme moved (no explicit preference pinned).
    pub fn set_system(&mut self, system: Theme) -> bool {
        if self.system == system {
            return false;
        }
        self.system = system;
        if self.preference.is_none() {
            self.swap_token += 1;
            true
        } else {
            false
        }
    }
}
