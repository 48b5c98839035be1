//! Merges budget projections with realized amounts into the cash-flow matrix.

use std::collections::HashMap;

use parkfin_shared::types::CategoryId;
use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::debug;

use super::error::CashFlowError;
use super::types::{CashFlowMatrix, CategoryFlow};
use super::variance::{VarianceDirection, variance_pct};
use crate::actuals::ActualEntry;
use crate::budget::{BudgetLine, BudgetScope};
use crate::catalog::{Category, CategoryCatalog};
use crate::{MONTHS, MonthlyVector};

/// Builder for the projected vs real matrix.
pub struct CashFlowMatrixBuilder;

impl CashFlowMatrixBuilder {
    /// Builds the matrix for one year and scope.
    ///
    /// - `lines` are the lines of the budget in force; each carries its own
    ///   monthly vector, and lines of the same category are summed.
    /// - `actuals` rows for other years or scopes are ignored; several rows
    ///   for the same category and month are summed; missing months are 0.
    /// - Rows are emitted in catalog order for every active category and for
    ///   any inactive category that still has projections or actuals.
    ///
    /// # Errors
    ///
    /// Returns `CashFlowError::UnknownCategory` when a line or actual entry
    /// references a category absent from the catalog, and
    /// `CashFlowError::InvalidMonth` for an entry month outside 1-12.
    pub fn build(
        year: i32,
        scope: BudgetScope,
        catalog: &CategoryCatalog,
        lines: &[BudgetLine],
        actuals: &[ActualEntry],
    ) -> Result<CashFlowMatrix, CashFlowError> {
        let projected = Self::projected_vectors(catalog, lines)?;
        let real = Self::real_vectors(year, scope, catalog, actuals)?;

        let categories: Vec<&Category> = catalog
            .iter()
            .filter(|c| c.active || projected.contains_key(&c.id) || real.contains_key(&c.id))
            .collect();

        let rows: Vec<CategoryFlow> = categories
            .par_iter()
            .map(|category| {
                Self::row(
                    category,
                    projected.get(&category.id).copied().unwrap_or_default(),
                    real.get(&category.id).copied().unwrap_or_default(),
                )
            })
            .collect();

        debug!(
            year,
            scope = %scope,
            rows = rows.len(),
            lines = lines.len(),
            actuals = actuals.len(),
            "Cash-flow matrix built"
        );

        Ok(CashFlowMatrix { year, scope, rows })
    }

    fn projected_vectors(
        catalog: &CategoryCatalog,
        lines: &[BudgetLine],
    ) -> Result<HashMap<CategoryId, MonthlyVector>, CashFlowError> {
        let mut projected: HashMap<CategoryId, MonthlyVector> = HashMap::new();
        for line in lines {
            if !catalog.contains(line.category_id()) {
                return Err(CashFlowError::UnknownCategory(line.category_id()));
            }
            let months = projected.entry(line.category_id()).or_default();
            for (total, month) in months.iter_mut().zip(line.monthly()) {
                *total += *month;
            }
        }
        Ok(projected)
    }

    fn real_vectors(
        year: i32,
        scope: BudgetScope,
        catalog: &CategoryCatalog,
        actuals: &[ActualEntry],
    ) -> Result<HashMap<CategoryId, MonthlyVector>, CashFlowError> {
        let mut real: HashMap<CategoryId, MonthlyVector> = HashMap::new();
        for entry in actuals.iter().filter(|e| e.year == year && e.scope == scope) {
            if !catalog.contains(entry.category_id) {
                return Err(CashFlowError::UnknownCategory(entry.category_id));
            }
            let index = usize::from(entry.month)
                .checked_sub(1)
                .filter(|i| *i < MONTHS)
                .ok_or(CashFlowError::InvalidMonth {
                    category_id: entry.category_id,
                    month: entry.month,
                })?;
            real.entry(entry.category_id).or_default()[index] += entry.amount;
        }
        Ok(real)
    }

    fn row(category: &Category, projected: MonthlyVector, real: MonthlyVector) -> CategoryFlow {
        let mut variance = [Decimal::ZERO; MONTHS];
        for (slot, (p, r)) in variance.iter_mut().zip(projected.iter().zip(&real)) {
            *slot = variance_pct(*p, *r);
        }

        let annual_projected: Decimal = projected.iter().copied().sum();
        let annual_real: Decimal = real.iter().copied().sum();

        CategoryFlow {
            category_id: category.id,
            name: category.name.clone(),
            category_type: category.category_type,
            projected,
            real,
            variance_pct: variance,
            annual_projected,
            annual_real,
            annual_variance_pct: variance_pct(annual_projected, annual_real),
            direction: VarianceDirection::of(category.category_type, annual_projected, annual_real),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::BudgetLineInput;
    use crate::catalog::CategoryType;
    use parkfin_shared::types::{BudgetId, BudgetLineId, ParkId};
    use rust_decimal_macros::dec;

    const DONATIONS: CategoryId = CategoryId::from_u128(1);
    const MAINTENANCE: CategoryId = CategoryId::from_u128(2);

    fn catalog() -> CategoryCatalog {
        CategoryCatalog::new([
            Category::new(DONATIONS, "Donations", CategoryType::Income),
            Category::new(MAINTENANCE, "Maintenance", CategoryType::Expense),
        ])
        .unwrap()
    }

    fn line(category_id: CategoryId, amount: Decimal) -> BudgetLine {
        BudgetLine::new(BudgetLineInput {
            id: BudgetLineId::new(),
            budget_id: BudgetId::from_u128(1),
            category_id,
            concept: "line".to_string(),
            projected_amount: amount,
            monthly_distribution: None,
            distribution: Default::default(),
        })
        .unwrap()
    }

    #[test]
    fn test_donations_scenario() {
        let lines = [line(DONATIONS, dec!(120000))];
        let actuals = [ActualEntry::new(DONATIONS, 2025, 1, dec!(12000))];

        let matrix =
            CashFlowMatrixBuilder::build(2025, BudgetScope::Municipal, &catalog(), &lines, &actuals)
                .unwrap();

        let donations = matrix.row(DONATIONS).unwrap();
        assert_eq!(donations.projected[0], dec!(10000));
        assert_eq!(donations.real[0], dec!(12000));
        assert_eq!(donations.variance_pct[0], dec!(20.0));
        // February: planned, nothing realized
        assert_eq!(donations.variance_pct[1], dec!(-100));

        let maintenance = matrix.row(MAINTENANCE).unwrap();
        assert!(maintenance.variance_pct.iter().all(Decimal::is_zero));
        assert_eq!(matrix.cells().len(), 24);
    }

    #[test]
    fn test_lines_and_entries_are_summed() {
        let lines = [line(MAINTENANCE, dec!(1200)), line(MAINTENANCE, dec!(2400))];
        let actuals = [
            ActualEntry::new(MAINTENANCE, 2025, 3, dec!(100)),
            ActualEntry::new(MAINTENANCE, 2025, 3, dec!(250)),
        ];

        let matrix =
            CashFlowMatrixBuilder::build(2025, BudgetScope::Municipal, &catalog(), &lines, &actuals)
                .unwrap();
        let row = matrix.row(MAINTENANCE).unwrap();
        assert_eq!(row.projected[2], dec!(300));
        assert_eq!(row.real[2], dec!(350));
        assert_eq!(row.annual_projected, dec!(3600));
        assert_eq!(row.direction, VarianceDirection::Favorable);
    }

    #[test]
    fn test_unplanned_actuals_report_hundred_percent() {
        let actuals = [ActualEntry::new(MAINTENANCE, 2025, 6, dec!(75))];
        let matrix =
            CashFlowMatrixBuilder::build(2025, BudgetScope::Municipal, &catalog(), &[], &actuals)
                .unwrap();
        assert_eq!(matrix.row(MAINTENANCE).unwrap().variance_pct[5], dec!(100));
    }

    #[test]
    fn test_other_years_and_scopes_ignored() {
        let park = BudgetScope::Park(ParkId::from_u128(9));
        let actuals = [
            ActualEntry::new(DONATIONS, 2024, 1, dec!(500)),
            ActualEntry::new(DONATIONS, 2025, 1, dec!(700)).with_scope(park),
        ];
        let matrix =
            CashFlowMatrixBuilder::build(2025, BudgetScope::Municipal, &catalog(), &[], &actuals)
                .unwrap();
        assert!(matrix.row(DONATIONS).unwrap().real.iter().all(Decimal::is_zero));
    }

    #[test]
    fn test_unknown_category_in_actuals() {
        let stray = CategoryId::from_u128(77);
        let actuals = [ActualEntry::new(stray, 2025, 1, dec!(1))];
        let result =
            CashFlowMatrixBuilder::build(2025, BudgetScope::Municipal, &catalog(), &[], &actuals);
        assert_eq!(result.unwrap_err(), CashFlowError::UnknownCategory(stray));
    }

    #[test]
    fn test_unknown_category_in_lines() {
        let stray = CategoryId::from_u128(78);
        let lines = [line(stray, dec!(10))];
        let result =
            CashFlowMatrixBuilder::build(2025, BudgetScope::Municipal, &catalog(), &lines, &[]);
        assert_eq!(result.unwrap_err(), CashFlowError::UnknownCategory(stray));
    }

    #[test]
    fn test_invalid_month() {
        for month in [0, 13] {
            let actuals = [ActualEntry::new(DONATIONS, 2025, month, dec!(1))];
            let result =
                CashFlowMatrixBuilder::build(2025, BudgetScope::Municipal, &catalog(), &[], &actuals);
            assert_eq!(
                result.unwrap_err(),
                CashFlowError::InvalidMonth {
                    category_id: DONATIONS,
                    month,
                }
            );
        }
    }

    #[test]
    fn test_inactive_category_hidden_unless_referenced() {
        let mut retired = Category::new(CategoryId::from_u128(3), "Kiosk rent", CategoryType::Income);
        retired.active = false;
        let mut dormant = Category::new(CategoryId::from_u128(4), "Old grants", CategoryType::Income);
        dormant.active = false;
        let catalog = CategoryCatalog::new([retired.clone(), dormant]).unwrap();

        let actuals = [ActualEntry::new(retired.id, 2025, 2, dec!(40))];
        let matrix =
            CashFlowMatrixBuilder::build(2025, BudgetScope::Municipal, &catalog, &[], &actuals)
                .unwrap();

        assert_eq!(matrix.rows.len(), 1);
        assert_eq!(matrix.rows[0].name, "Kiosk rent");
    }

    #[test]
    fn test_inputs_untouched_and_deterministic() {
        let lines = vec![line(DONATIONS, dec!(1000)), line(MAINTENANCE, dec!(700))];
        let actuals = vec![ActualEntry::new(MAINTENANCE, 2025, 4, dec!(90))];
        let before = (lines.clone(), actuals.clone());

        let a = CashFlowMatrixBuilder::build(2025, BudgetScope::Municipal, &catalog(), &lines, &actuals)
            .unwrap();
        let b = CashFlowMatrixBuilder::build(2025, BudgetScope::Municipal, &catalog(), &lines, &actuals)
            .unwrap();

        assert_eq!(a, b);
        assert_eq!((lines, actuals), before);
    }
}
