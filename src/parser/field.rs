use tracing::debug;

use super::page::{Page, TextMode};

/// One field's ordered locators and the value used when none resolve.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub locators: &'static [&'static str],
    pub mode: TextMode,
    pub default: &'static str,
}

impl FieldRule {
    pub const fn raw(
        name: &'static str,
        locators: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        FieldRule {
            name,
            locators,
            mode: TextMode::Raw,
            default,
        }
    }

    pub const fn rendered(
        name: &'static str,
        locators: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        FieldRule {
            name,
            locators,
            mode: TextMode::Rendered,
            default,
        }
    }

    /// First locator that resolves wins. Absence is silent.
    pub fn find(&self, page: &Page) -> Option<String> {
        let found = self.locators.iter().find_map(|locator| {
            page.text_of(locator, self.mode).map(|text| (locator, text))
        });
        match found {
            Some((locator, text)) => {
                debug!(field = self.name, locator = *locator, "Field matched");
                Some(text)
            }
            None => {
                debug!(field = self.name, "No locator matched");
                None
            }
        }
    }

    pub fn extract(&self, page: &Page) -> String {
        self.find(page).unwrap_or_else(|| self.default.to_string())
    }
}

/// Raw text of every element under `locator`, joined with `" | "`.
/// No matches gives an empty string rather than a placeholder.
pub fn joined_tags(page: &Page, locator: &str) -> String {
    page.texts_of(locator).join(" | ")
}
