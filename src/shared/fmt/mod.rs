//! Human-readable formatting for prices, amounts and USD values.

pub mod num;
