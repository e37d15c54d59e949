pub mod financing_calculator;

pub use financing_calculator::FinancingCalculator;
