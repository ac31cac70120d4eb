mod entry;

pub use entry::{ContentType, EntryPage, PageRequest, MAX_PAGE_SIZE};
