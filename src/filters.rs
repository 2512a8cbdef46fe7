use crate::models::Book;

/// Query specification for the list endpoint. Every field is an optional
/// case-insensitive substring; empty or whitespace-only values are dropped
/// at construction time so they never influence matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilters {
    pub title: Option<String>,
    pub author: Option<String>,
    pub search: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl BookFilters {
    pub fn new(title: Option<String>, author: Option<String>, search: Option<String>) -> Self {
        BookFilters {
            title: non_empty(title),
            author: non_empty(author),
            search: non_empty(search),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.search.is_none()
    }

    /// Decides whether a single book matches this specification.
    /// All supplied fields are combined with logical AND; `search` matches
    /// against title OR author.
    pub fn matches(&self, book: &Book) -> bool {
        let title = book.title.to_lowercase();
        let author = book.author.to_lowercase();

        if let Some(search) = &self.search {
            let search = search.to_lowercase();
            if !title.contains(&search) && !author.contains(&search) {
                return false;
            }
        }

        if let Some(wanted) = &self.title {
            if !title.contains(&wanted.to_lowercase()) {
                return false;
            }
        }

        if let Some(wanted) = &self.author {
            if !author.contains(&wanted.to_lowercase()) {
                return false;
            }
        }

        true
    }
}
