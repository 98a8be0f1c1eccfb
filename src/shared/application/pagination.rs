/// Page-number arithmetic shared by the catalog client and services
///
/// Pages are 1-based everywhere; a `PageNumber` can only hold a valid index.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

use crate::shared::errors::{FetchError, FetchResult};

/// A validated, 1-based page index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(NonZeroU32::MIN);

    /// Validate a raw page number; zero and negatives are rejected
    pub fn new(value: i64) -> FetchResult<Self> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(PageNumber)
            .ok_or(FetchError::InvalidPage { value })
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The page `offset` positions after this one
    pub fn offset(self, offset: u32) -> FetchResult<Self> {
        self.0
            .checked_add(offset)
            .map(PageNumber)
            .ok_or(FetchError::InvalidPage {
                value: self.get() as i64 + offset as i64,
            })
    }

    pub fn next(self) -> FetchResult<Self> {
        self.offset(1)
    }

    /// Every page in `[self, self + count - 1]`, in ascending order
    pub fn range(self, count: u32) -> FetchResult<Vec<PageNumber>> {
        if count == 0 {
            return Err(FetchError::InvalidPageCount { count });
        }
        (0..count).map(|offset| self.offset(offset)).collect()
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<i64> for PageNumber {
    type Error = FetchError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageNumber> for u32 {
    fn from(page: PageNumber) -> Self {
        page.get()
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-owned position for sequential "load more" paging
///
/// Services never store a cursor; each call takes one and hands back the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageCursor {
    page: PageNumber,
}

impl PageCursor {
    pub fn start() -> Self {
        Self::default()
    }

    pub fn at(page: PageNumber) -> Self {
        Self { page }
    }

    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Cursor for the following page
    pub fn advance(self) -> FetchResult<Self> {
        Ok(Self {
            page: self.page.next()?,
        })
    }
}
