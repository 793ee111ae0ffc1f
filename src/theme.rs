use serde::{Deserialize, Serialize};

/// Presentation color scheme. Each session starts in `Light`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn toggle(&mut self) -> Self {
        *self = self.toggled();
        tracing::debug!(theme = ?*self, "theme applied");
        *self
    }
}
