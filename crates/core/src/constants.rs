/// Key of the quantity component in balance mappings
pub const AMOUNT_KEY: &str = "amount";

/// Key of the fiat value component in balance mappings
pub const USD_VALUE_KEY: &str = "usd_value";

/// Key of the assets section in balance sheet mappings
pub const ASSETS_KEY: &str = "assets";

/// Key of the liabilities section in balance sheet mappings
pub const LIABILITIES_KEY: &str = "liabilities";
