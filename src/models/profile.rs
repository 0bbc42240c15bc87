pub const MAX_BIO_LEN: usize = 500;
pub const MAX_THEME_COLOR_LEN: usize = 20;
pub const MAX_CARD_STYLE_LEN: usize = 50;

/// Profile edits submitted from the profile form.
///
/// Each text field is `None` when the form left it out (the stored value is
/// kept), `Some(None)` when it was blank (the stored value is cleared) and
/// `Some(Some(text))` otherwise. `avatar_url` is only replaced when a new
/// avatar was stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub bio: Option<Option<String>>,
    pub theme_color: Option<Option<String>>,
    pub card_style: Option<Option<String>>,
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    /// Trim every submitted text field and turn blanks into `Some(None)`.
    pub fn normalized(self) -> Self {
        Self {
            bio: self.bio.map(blank_to_none),
            theme_color: self.theme_color.map(blank_to_none),
            card_style: self.card_style.map(blank_to_none),
            avatar_url: self.avatar_url,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        check_len("Bio", &self.bio, MAX_BIO_LEN)?;
        check_len("Theme color", &self.theme_color, MAX_THEME_COLOR_LEN)?;
        check_len("Card style", &self.card_style, MAX_CARD_STYLE_LEN)?;

        if let Some(Some(color)) = &self.theme_color {
            if !is_valid_theme_color(color) {
                return Err("Theme color must be a hex color like #aa00ff or a color name".to_string());
            }
        }
        Ok(())
    }
}

/// `#rgb`, `#rrggbb`, or a bare color name such as `crimson`.
pub fn is_valid_theme_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => !color.is_empty() && color.chars().all(|c| c.is_ascii_alphabetic()),
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_len(label: &str, value: &Option<Option<String>>, max: usize) -> Result<(), String> {
    match value {
        Some(Some(v)) if v.chars().count() > max => {
            Err(format!("{} must be at most {} characters", label, max))
        }
        _ => Ok(()),
    }
}
