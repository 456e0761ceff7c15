pub mod budget_editor;
pub mod currency;
pub mod formatter;
pub mod locale;
pub mod number;

pub use crate::domain::model::{Amount, BudgetForm, BudgetItem, CurrencyConfig};
pub use crate::domain::ports::{BudgetApi, CurrencyConfigProvider};
pub use crate::utils::error::Result;
