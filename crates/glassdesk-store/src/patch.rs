use glassdesk_types::models::User;

/// Partial update of a user's profile.
///
/// `None` and empty strings keep the stored value. Media URLs arrive already
/// resolved (upload vs. reset vs. caller-supplied URL) by the API layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub birth_month: Option<String>,
    pub birth_date: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub side_menu_color: Option<String>,
    pub theme_mode: Option<String>,
    pub profile_picture: Option<String>,
    pub wallpaper: Option<String>,
}

impl ProfilePatch {
    pub fn apply_to(&self, user: &mut User) {
        merge(&mut user.email, &self.email);
        merge(&mut user.full_name, &self.full_name);
        merge(&mut user.birth_month, &self.birth_month);
        merge(&mut user.birth_date, &self.birth_date);
        merge(&mut user.birth_year, &self.birth_year);
        merge(&mut user.gender, &self.gender);
        merge(&mut user.side_menu_color, &self.side_menu_color);
        merge(&mut user.theme_mode, &self.theme_mode);
        merge(&mut user.profile_picture, &self.profile_picture);
        merge(&mut user.wallpaper, &self.wallpaper);
    }
}

fn merge(slot: &mut String, value: &Option<String>) {
    if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
        *slot = v.to_string();
    }
}
