/// Year-first layouts. These are unambiguous and accepted under every [`DateOrder`].
///
/// [`DateOrder`]: crate::extract::DateOrder
pub const ISO_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", // e.g., 2020-02-01
    "%Y/%m/%d", // e.g., 2020/02/01
    "%Y.%m.%d", // e.g., 2020.02.01
];

pub const ISO_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",    // e.g., 2020-04-10 08:31:00
    "%Y-%m-%dT%H:%M:%S",    // e.g., 2020-04-10T08:31:00
    "%Y-%m-%d %H:%M:%S%.f", // With fractional seconds
    "%Y-%m-%dT%H:%M:%S%.f", // With fractional seconds
    "%Y-%m-%d %H:%M",       // Without seconds
    "%+",                   // RFC 3339 / ISO 8601 format
];

// Two-digit year layouts come first: `%Y` would happily read "20" as the year 20.
pub const DAY_FIRST_DATE_FORMATS: &[&str] = &[
    "%d/%m/%y", // e.g., 01/02/20
    "%d-%m-%y",
    "%d.%m.%y",
    "%d/%m/%Y", // e.g., 01/02/2020
    "%d-%m-%Y",
    "%d.%m.%Y",
];

pub const MONTH_FIRST_DATE_FORMATS: &[&str] = &[
    "%m/%d/%y", // e.g., 02/01/20
    "%m-%d-%y",
    "%m.%d.%y",
    "%m/%d/%Y", // e.g., 02/01/2020
    "%m-%d-%Y",
    "%m.%d.%Y",
];

pub const DEFAULT_TABLE_NAME: &str = "unnamed";
