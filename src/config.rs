use chrono::NaiveDate;

pub const CHART_API_BASE: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; crypto-dashboard/0.1)";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Display name and Yahoo ticker for every supported cryptocurrency, in menu order.
pub const CRYPTO_CATALOG: &[(&str, &str)] = &[
    ("Arbitrum", "ARB-USD"),
    ("Artificial Superintelligence Alliance", "FET-USD"),
    ("Ethena", "ENA-USD"),
    ("Algorand", "ALGO-USD"),
    ("Filecoin", "FIL-USD"),
    ("Kaspa", "KAS-USD"),
    ("OKB", "OKB-USD"),
    ("Fantom", "FTM-USD"),
    ("Cosmos", "ATOM-USD"),
    ("Virtuals Protocol", "VIRTUAL-USD"),
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Look up a catalog entry by display name or ticker (case-insensitive).
pub fn lookup_crypto(name_or_ticker: &str) -> Option<(&'static str, &'static str)> {
    let wanted = name_or_ticker.trim();
    CRYPTO_CATALOG
        .iter()
        .find(|(name, ticker)| name.eq_ignore_ascii_case(wanted) || ticker.eq_ignore_ascii_case(wanted))
        .copied()
}

pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 25).unwrap_or(NaiveDate::MAX)
}

pub const DEFAULT_MONTH: u32 = 1;
