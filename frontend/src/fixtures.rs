//! Mock sources and book records.
//!
//! Record `i` of [`MOCK_BOOKS`] is what the sequencer "finds" on source `i`
//! of [`SOURCES`]. The pairing is positional only.

use crate::types::BookRecord;

/// Number of mock sources, and of records a full run collects.
pub const SOURCE_COUNT: usize = 5;

/// Sites the sequencer pretends to scrape, in visiting order.
pub const SOURCES: [&str; SOURCE_COUNT] = [
    "bookstore.com",
    "amazon.com",
    "goodreads.com",
    "barnesnoble.com",
    "bookdepository.com",
];

/// Records appended to the results table, one per source.
pub const MOCK_BOOKS: [BookRecord; SOURCE_COUNT] = [
    BookRecord {
        id: "1",
        title: "The Great Gatsby",
        price: "$12.99",
        link: "https://example.com/gatsby",
    },
    BookRecord {
        id: "2",
        title: "To Kill a Mockingbird",
        price: "$14.50",
        link: "https://example.com/mockingbird",
    },
    BookRecord {
        id: "3",
        title: "1984",
        price: "$13.25",
        link: "https://example.com/1984",
    },
    BookRecord {
        id: "4",
        title: "Pride and Prejudice",
        price: "$11.99",
        link: "https://example.com/pride",
    },
    BookRecord {
        id: "5",
        title: "The Catcher in the Rye",
        price: "$15.75",
        link: "https://example.com/catcher",
    },
];
