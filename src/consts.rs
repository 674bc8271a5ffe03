/// Calendar year of month-index 0
pub const EPOCH_YEAR: i32 = 1970;

/// Months in a calendar year
pub const MONTHS_PER_YEAR: i32 = 12;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;

/// Seconds in a civil day, used by the UTC timestamp fast path
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Year/month separator of the canonical text form
pub const DATE_SEPARATOR: char = '-';

/// Minimum width of the zero-padded year magnitude
pub const YEAR_WIDTH: usize = 4;

/// Width of the zero-padded month
pub const MONTH_WIDTH: usize = 2;

/// Token printed in place of a missing element
pub const NA_DISPLAY: &str = "<NA>";

/// Number of positions listed in warnings and errors before `etc.`
pub const MAX_REPORTED_LOCATIONS: usize = 5;

/// Formats accepted by the lenient parser out of the box
pub const DEFAULT_FORMATS: [&str; 6] = ["%Y-%m", "%Y/%m", "%m/%Y", "%b %Y", "%B %Y", "%Y-%m-%d"];

/// Wall-clock layout used when re-resolving a date in a non-UTC zone
pub(crate) const WALL_CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
