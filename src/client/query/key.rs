use std::fmt;

/// Identifies a cacheable fetch: resource type plus request parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    CharacterPage { page: u32 },
    Character { id: i64 },
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CharacterPage { page } => write!(f, "characters[page={}]", page),
            Self::Character { id } => write!(f, "character[id={}]", id),
        }
    }
}
