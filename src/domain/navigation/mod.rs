//! Navigation module - Pages and their URL paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A page of the site. Each route maps to exactly one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Chat,
    Dashboard,
    Onboard,
    Marketplace,
    Login,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Chat,
        Route::Dashboard,
        Route::Onboard,
        Route::Marketplace,
        Route::Login,
    ];

    /// Returns the URL path of this page.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Chat => "/chat",
            Route::Dashboard => "/dashboard",
            Route::Onboard => "/onboard",
            Route::Marketplace => "/marketplace",
            Route::Login => "/login",
        }
    }

    /// Resolves a URL path, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.iter().copied().find(|r| r.path() == normalized)
    }

    /// Label used in the header navigation.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Chat => "Chat",
            Route::Dashboard => "Dashboard",
            Route::Onboard => "Create Twin",
            Route::Marketplace => "Marketplace",
            Route::Login => "Login",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s)
            .ok_or_else(|| ValidationError::invalid_format("path", format!("no page at '{}'", s)))
    }
}
