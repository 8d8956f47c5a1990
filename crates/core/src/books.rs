use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A stored book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book fields supplied by a client, used for both creation and partial updates
///
/// Missing fields decode to their empty value (`""` or `0`), which is what the
/// validation and merge rules look at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Author cannot be empty")]
    EmptyAuthor,

    #[error("Year cannot be empty")]
    EmptyYear,
}

impl NewBook {
    /// Check the fields required to create a book, reporting the first missing one
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.title.is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if self.author.is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        if self.year == 0 {
            return Err(BookValidationError::EmptyYear);
        }
        Ok(())
    }
}

impl Book {
    /// Merge a partial update. Empty strings and a zero year leave the field as is.
    ///
    /// Returns `true` when at least one field changed.
    pub fn apply(&mut self, patch: &NewBook) -> bool {
        let before = (self.title.clone(), self.author.clone(), self.year);

        if !patch.title.is_empty() {
            self.title = patch.title.clone();
        }
        if !patch.author.is_empty() {
            self.author = patch.author.clone();
        }
        if patch.year != 0 {
            self.year = patch.year;
        }

        before != (self.title.clone(), self.author.clone(), self.year)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PageParamError {
    #[error("Invalid page parameter. Page must be a positive integer")]
    InvalidPage,

    #[error("Invalid pageSize parameter. Page size must be a positive integer")]
    InvalidPageSize,
}

/// Limit/offset pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Build a page request from raw `page` and `pageSize` query values
    pub fn from_query(
        page: Option<&str>,
        page_size: Option<&str>,
    ) -> Result<Self, PageParamError> {
        let page = parse_positive(page, DEFAULT_PAGE).ok_or(PageParamError::InvalidPage)?;
        let page_size =
            parse_positive(page_size, DEFAULT_PAGE_SIZE).ok_or(PageParamError::InvalidPageSize)?;

        Ok(PageRequest { page, page_size })
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}

fn parse_positive(value: Option<&str>, default: u32) -> Option<u32> {
    match value {
        None => Some(default),
        Some(raw) => raw.parse::<u32>().ok().filter(|n| *n >= 1),
    }
}
