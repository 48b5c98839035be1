//! Demo dataset generator for ParkFin development and testing.
//!
//! Writes a deterministic dataset with a small category tree, municipal and
//! park budgets over three years, and synthetic actuals for every budget
//! that is not a draft.
//!
//! Usage: cargo run --bin seeder [output-path]

use anyhow::Context;
use chrono::Utc;
use parkfin_core::actuals::{ActualsProvider, SyntheticActuals};
use parkfin_core::budget::{
    Budget, BudgetLine, BudgetLineInput, BudgetScope, BudgetStatus, DistributionPolicy,
};
use parkfin_core::catalog::{Category, CategoryCatalog, CategoryType};
use parkfin_shared::AppConfig;
use parkfin_shared::types::{BudgetId, BudgetLineId, CategoryId, ParkId};
use parkfin_store::{CategoryLink, Dataset};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const ENTRANCE_FEES: CategoryId = CategoryId::from_u128(1);
const EVENT_RENTALS: CategoryId = CategoryId::from_u128(2);
const DONATIONS: CategoryId = CategoryId::from_u128(3);
const GRANTS: CategoryId = CategoryId::from_u128(4);
const MAINTENANCE: CategoryId = CategoryId::from_u128(10);
const TREE_CARE: CategoryId = CategoryId::from_u128(11);
const IRRIGATION: CategoryId = CategoryId::from_u128(12);
const STAFF: CategoryId = CategoryId::from_u128(13);
const UTILITIES: CategoryId = CategoryId::from_u128(14);
const EVENTS: CategoryId = CategoryId::from_u128(15);
const SIGNAGE: CategoryId = CategoryId::from_u128(16);

const RIVERSIDE: ParkId = ParkId::from_u128(100);
const HILLTOP: ParkId = ParkId::from_u128(101);

/// Summer-heavy weights for outdoor activity, January first.
const SUMMER: [Decimal; 12] = [
    dec!(1),
    dec!(1),
    dec!(2),
    dec!(3),
    dec!(4),
    dec!(6),
    dec!(8),
    dec!(8),
    dec!(5),
    dec!(3),
    dec!(1),
    dec!(1),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seeder=info,parkfin_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.data.dataset_path.clone());

    let dataset = demo_dataset(config.data.synthetic_seed, config.data.synthetic_variance_pct)?;
    info!(
        categories = dataset.categories.len(),
        budgets = dataset.budgets.len(),
        lines = dataset.budget_lines.len(),
        actuals = dataset.actuals.len(),
        "Demo dataset generated"
    );

    dataset
        .save(&path)
        .await
        .with_context(|| format!("Failed to write dataset to {path}"))?;

    Ok(())
}

fn categories() -> Vec<Category> {
    let mut signage = Category::new(SIGNAGE, "Signage", CategoryType::Expense);
    signage.active = false;

    vec![
        Category::new(ENTRANCE_FEES, "Entrance fees", CategoryType::Income),
        Category::new(EVENT_RENTALS, "Event rentals", CategoryType::Income),
        Category::new(DONATIONS, "Donations", CategoryType::Income),
        Category::new(GRANTS, "Grants", CategoryType::Income),
        Category::new(MAINTENANCE, "Maintenance", CategoryType::Expense),
        Category::new(TREE_CARE, "Tree care", CategoryType::Expense),
        Category::new(IRRIGATION, "Irrigation", CategoryType::Expense),
        Category::new(STAFF, "Staff", CategoryType::Expense),
        Category::new(UTILITIES, "Utilities", CategoryType::Expense),
        Category::new(EVENTS, "Events", CategoryType::Expense),
        signage,
    ]
}

fn category_links() -> Vec<CategoryLink> {
    [TREE_CARE, IRRIGATION]
        .into_iter()
        .map(|child| CategoryLink {
            child,
            parent: MAINTENANCE,
        })
        .collect()
}

fn budget(n: u128, name: &str, year: i32, scope: BudgetScope, status: BudgetStatus) -> Budget {
    let mut budget = Budget::new(name, year, scope);
    budget.id = BudgetId::from_u128(n);
    budget.status = status;
    budget
}

/// One planned line: category, concept, base amount, summer-weighted.
type PlanItem = (CategoryId, &'static str, Decimal, bool);

const MUNICIPAL_PLAN: [PlanItem; 10] = [
    (ENTRANCE_FEES, "Gate fees", dec!(420000), true),
    (EVENT_RENTALS, "Pavilion rentals", dec!(96000), true),
    (DONATIONS, "Friends of the parks", dec!(120000), false),
    (GRANTS, "State conservation grant", dec!(250000), false),
    (MAINTENANCE, "Grounds upkeep", dec!(180000), false),
    (TREE_CARE, "Pruning and planting", dec!(64000), false),
    (IRRIGATION, "Summer watering", dec!(48000), true),
    (STAFF, "Rangers and crews", dec!(410000), false),
    (UTILITIES, "Water and power", dec!(72000), false),
    (EVENTS, "Summer concerts", dec!(58000), true),
];

const PARK_PLAN: [PlanItem; 5] = [
    (ENTRANCE_FEES, "Gate fees", dec!(84000), true),
    (DONATIONS, "Adopt-a-bench", dec!(12000), false),
    (MAINTENANCE, "Grounds upkeep", dec!(36000), false),
    (IRRIGATION, "Summer watering", dec!(9000), true),
    (STAFF, "Park ranger", dec!(52000), false),
];

/// Turns a plan into lines for `budget`, scaling every amount by `factor`.
fn plan_lines(
    budget: &Budget,
    plan: &[PlanItem],
    factor: Decimal,
    next_id: &mut u128,
) -> anyhow::Result<Vec<BudgetLine>> {
    plan.iter()
        .map(|&(category_id, concept, amount, summer)| {
            *next_id += 1;
            let distribution = if summer {
                DistributionPolicy::Seasonal { weights: SUMMER }
            } else {
                DistributionPolicy::Even
            };
            BudgetLine::new(BudgetLineInput {
                id: BudgetLineId::from_u128(*next_id),
                budget_id: budget.id,
                category_id,
                concept: concept.to_string(),
                projected_amount: amount * factor,
                monthly_distribution: None,
                distribution,
            })
            .with_context(|| format!("Invalid demo line {concept}"))
        })
        .collect()
}

fn demo_dataset(seed: u64, variance_pct: Decimal) -> anyhow::Result<Dataset> {
    let municipal = [
        budget(1, "Parks 2024", 2024, BudgetScope::Municipal, BudgetStatus::Archived),
        budget(2, "Parks 2025", 2025, BudgetScope::Municipal, BudgetStatus::Active),
        budget(3, "Parks 2026", 2026, BudgetScope::Municipal, BudgetStatus::Draft),
    ];
    let parks = [
        budget(10, "Riverside 2025", 2025, BudgetScope::Park(RIVERSIDE), BudgetStatus::Active),
        budget(11, "Hilltop 2025", 2025, BudgetScope::Park(HILLTOP), BudgetStatus::Approved),
    ];

    let mut next_id = 0;
    let mut lines = Vec::new();
    for (budget, factor) in municipal.iter().zip([dec!(0.94), dec!(1), dec!(1.06)]) {
        lines.extend(plan_lines(budget, &MUNICIPAL_PLAN, factor, &mut next_id)?);
    }
    for (budget, factor) in parks.iter().zip([dec!(1), dec!(0.6)]) {
        lines.extend(plan_lines(budget, &PARK_PLAN, factor, &mut next_id)?);
    }
    let catalog = CategoryCatalog::new(categories())?;
    let mut budgets: Vec<Budget> = municipal.into_iter().chain(parks).collect();
    for budget in &mut budgets {
        budget.recompute_totals(&lines, &catalog)?;
    }

    // Every budget past the draft stage gets a year of bookings, archived
    // ones included, so each is fed to the synthetic feed on its own.
    let mut actuals = Vec::new();
    for budget in budgets.iter().filter(|b| b.status != BudgetStatus::Draft) {
        let mut open = budget.clone();
        open.status = BudgetStatus::Active;
        let feed = SyntheticActuals::new(seed, variance_pct, vec![open], lines.clone());
        actuals.extend(feed.actuals(budget.year, budget.scope));
    }

    Ok(Dataset {
        generated_at: Some(Utc::now()),
        categories: categories(),
        category_links: category_links(),
        budgets,
        budget_lines: lines,
        actuals,
    })
}
