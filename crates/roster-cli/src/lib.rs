//! Library components of the MoneyWise cost calculator.

pub mod dispatch;
pub mod logging;
pub mod menu;
pub mod session;
