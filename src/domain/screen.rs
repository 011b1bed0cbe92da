//! Menu screens and their sidebar labels.

/// The three screens of the app, selected from the sidebar menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    List,
    Create,
    EditDelete,
}

impl Screen {
    /// The menu label shown in the sidebar, 1:1 with the screen.
    pub fn menu_label(&self) -> &'static str {
        match self {
            Self::List => "Home",
            Self::Create => "Create Post",
            Self::EditDelete => "Edit/Delete Post",
        }
    }

    pub fn from_menu_label(s: &str) -> Option<Self> {
        match s {
            "Home" => Some(Self::List),
            "Create Post" => Some(Self::Create),
            "Edit/Delete Post" => Some(Self::EditDelete),
            _ => None,
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::List, Self::Create, Self::EditDelete]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_screen_is_list() {
        assert_eq!(Screen::default(), Screen::List);
    }

    #[test]
    fn menu_labels_round_trip() {
        for screen in Screen::all() {
            assert_eq!(Screen::from_menu_label(screen.menu_label()), Some(*screen));
        }
    }

    #[test]
    fn unknown_label_rejected() {
        assert_eq!(Screen::from_menu_label("Settings"), None);
        assert_eq!(Screen::from_menu_label(""), None);
    }
}
