/// Name of the review column holding whitespace-separated reaction tokens.
pub const EMOJIS_FIELD: &str = "emojis";

/// Cell values that pandas reads back as missing by default.
pub const MISSING_FIELD_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// File extension that marks a gzip-compressed review file.
pub const GZIP_EXTENSION: &str = "gz";

pub const JSON_EXTENSION: &str = "json";
