// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Syntactic sugar for `Ok(())` or `Ok($value)`. Handy at the end of a builder scope
/// callback, which has to return a [`crate::CommonResult`].
///
/// ```
/// use r3bl_constraint_dsl::{CommonResult, ok};
///
/// fn nothing_to_do() -> CommonResult<()> { ok!() }
/// fn answer() -> CommonResult<u8> { ok!(42) }
///
/// assert!(nothing_to_do().is_ok());
/// assert_eq!(answer().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
