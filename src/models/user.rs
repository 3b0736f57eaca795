/// The acting user. Passed into every mutating forum operation; there is
/// no global "logged in" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
}

impl CurrentUser {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            avatar: None,
        }
    }

    /// The single local profile of this build.
    pub fn local() -> Self {
        Self::new("user-1", "John Doe")
    }
}
