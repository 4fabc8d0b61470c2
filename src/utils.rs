pub mod distinct_sorted_tokens;
pub use distinct_sorted_tokens::distinct_sorted_tokens;

pub mod read_review_records;
pub use read_review_records::{
    read_review_records_from_csv_reader, read_review_records_from_json_str,
    read_review_records_from_path, read_review_records_from_reader, ReviewFileFormat,
};

pub mod sort_frequencies;
pub use sort_frequencies::sort_frequencies;
