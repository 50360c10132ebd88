//! Amount calculation: conversion to the base currency and VAT.

pub mod calculator;
pub mod error;
pub mod rates;

pub use calculator::{AmountBreakdown, AmountCalculator, parse_amount};
pub use error::CalculationError;
pub use rates::RateTable;

#[cfg(test)]
mod props;
