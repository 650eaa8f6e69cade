use serde::Deserialize;
use std::fmt;

/// Identifier for the color scheme used to draw the game.  The simulation
/// only carries this value around; it is turned into colors by
/// [`crate::ui::Palette`].
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Theme {
    #[default]
    Night,
    Day,
}

impl Theme {
    pub(crate) fn toggled(self) -> Theme {
        match self {
            Theme::Night => Theme::Day,
            Theme::Day => Theme::Night,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Night => "night",
            Theme::Day => "day",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trip() {
        assert_eq!(Theme::Night.toggled(), Theme::Day);
        assert_eq!(Theme::Day.toggled(), Theme::Night);
    }
}
