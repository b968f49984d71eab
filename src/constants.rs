pub const TITLE_WEIGHT: u32 = 10;
pub const EXCERPT_WEIGHT: u32 = 1;
pub const CATEGORIES_WEIGHT: u32 = 1;
pub const TAGS_WEIGHT: u32 = 1;

pub const WORD_PATTERN: &str = r"\w+";
pub const WILDCARD: char = '*';

pub const STORE_EXTENSIONS: [&str; 2] = ["js", "json"];
pub const DEFAULT_RESULT_LIMIT: usize = 10;
