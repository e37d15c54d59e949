pub mod profit_calculator;

pub use profit_calculator::ProfitCalculator;
