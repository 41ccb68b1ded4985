/// A jury member name in canonical form: surrounding whitespace trimmed and
/// inner whitespace runs collapsed to a single space.
///
/// Together with the case-insensitive unique index on `jury_members.name`
/// this keeps "Anna  Berg" and "anna berg" from becoming two jury members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedJuryName(String);

impl NormalizedJuryName {
    /// # Examples
    ///
    /// ```
    /// use storage::models::NormalizedJuryName;
    ///
    /// let name = NormalizedJuryName::new("  Anna   Berg ");
    /// assert_eq!(name.as_str(), "Anna Berg");
    /// ```
    pub fn new(raw: &str) -> Self {
        Self(raw.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
