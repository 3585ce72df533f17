use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Base currency assigned to lazily created user settings.
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Saving percentage assigned to lazily created user settings.
pub const DEFAULT_SAVING_PERCENTAGE: Decimal = dec!(20);

/// Budget period assigned to lazily created user settings.
pub const DEFAULT_BUDGET_PERIOD: &str = "monthly";

/// Divisor for converting a saving percentage into a fraction.
pub const PERCENT_DIVISOR: Decimal = dec!(100);

/// Decimal precision for display.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
