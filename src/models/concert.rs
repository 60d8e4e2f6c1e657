use serde::{Deserialize, Serialize};

/// A concert record owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concert {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub location: String,
    #[serde(rename = "user_id")]
    pub owner_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewConcert {
    pub title: String,
    pub date: String,
    pub location: String,
}

impl Concert {
    /// Date as shown in lists. Falls back to the raw string when the backend
    /// stored something other than `YYYY-MM-DD`.
    pub fn display_date(&self) -> String {
        chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map(|d| d.format("%a, %b %d %Y").to_string())
            .unwrap_or_else(|_| self.date.clone())
    }
}
