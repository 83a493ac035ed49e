// Reports module - performance derivation and aggregations

pub mod contributions;
pub mod dividends;
pub mod investors;
pub mod performance;
pub mod range;

pub use contributions::{group_by_month, MonthlyContribution};
pub use dividends::{yearly_dividends, YearlyDividends};
pub use investors::{ranked, totals, InvestorShare, InvestorTotals};
pub use performance::{derive, fund_summary, monthly_rows, DerivedSnapshot, FundSummary};
pub use range::{filter_by_range, Range};
