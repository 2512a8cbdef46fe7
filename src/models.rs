use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
}

// TODO could build this using a macro, as it is just Book minus the ID field
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
}

impl NewBook {
    /// Checks the invariant the store relies on: title and author are
    /// non-empty. Runs before the record ever reaches the store.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.is_empty() {
            return Err(ApiError::InvalidInput(
                "book title cannot be empty".to_string(),
            ));
        }
        if self.author.is_empty() {
            return Err(ApiError::InvalidInput(
                "book author cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
