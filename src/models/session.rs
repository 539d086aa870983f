/// Client-side record of the authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub first_name: String,
    pub is_logged_in: bool,
}

impl Session {
    pub fn logged_in(username: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            first_name: first_name.into(),
            is_logged_in: true,
        }
    }

    /// First name when known, username otherwise.
    pub fn display_name(&self) -> &str {
        if self.first_name.is_empty() {
            &self.username
        } else {
            &self.first_name
        }
    }
}
