use soroban_sdk::contracterror;

/// Contract-level errors for the reward ledger and its math helpers.
/// Every error is fatal to the invocation: Soroban rolls back all storage
/// writes of a call that panics with one of these codes.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RewardsError {
    // Initialization errors (100-199)
    /// Ledger has already been initialized
    AlreadyInitialized = 100,
    /// Ledger has not been initialized
    NotInitialized = 101,

    // Tick errors (200-299)
    /// Invalid tick range: lower must be < upper
    InvalidTickRange = 200,
    /// Tick out of valid range
    InvalidTick = 201,

    // Liquidity errors (400-499)
    /// A tick or the active-liquidity counter would exceed its cap
    LiquidityOverflow = 400,
    /// Liquidity removal exceeds what is tracked
    LiquidityUnderflow = 401,

    // Authorization errors (600-699)
    /// Caller is neither the base pool nor the position manager
    Unauthorized = 600,

    // Math errors (700-799)
    /// Division by zero
    DivisionByZero = 700,
    /// Fixed-point intermediate exceeds the representable range
    ArithmeticOverflow = 701,
}
