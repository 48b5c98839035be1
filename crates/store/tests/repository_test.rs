//! Store and repository tests.

use parkfin_core::actuals::ActualEntry;
use parkfin_core::budget::{
    Budget, BudgetError, BudgetLine, BudgetLineInput, BudgetScope, BudgetStatus,
};
use parkfin_core::catalog::{CatalogError, Category, CategoryType};
use parkfin_shared::types::{BudgetId, BudgetLineId, CategoryId, ParkId};
use parkfin_store::{
    ActualsRepository, BudgetFilter, BudgetRepository, CatalogRepository, CategoryLink, Dataset,
    Store, StoreError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const DONATIONS: CategoryId = CategoryId::from_u128(1);
const MAINTENANCE: CategoryId = CategoryId::from_u128(2);
const TREE_CARE: CategoryId = CategoryId::from_u128(3);

fn line(n: u128, budget_id: BudgetId, category_id: CategoryId, amount: Decimal) -> BudgetLine {
    BudgetLine::new(BudgetLineInput {
        id: BudgetLineId::from_u128(n),
        budget_id,
        category_id,
        concept: format!("line {n}"),
        projected_amount: amount,
        monthly_distribution: None,
        distribution: Default::default(),
    })
    .unwrap()
}

fn dataset() -> (Dataset, Budget) {
    let mut budget = Budget::new("Parks 2025", 2025, BudgetScope::Municipal);
    budget.status = BudgetStatus::Active;
    let mut draft = Budget::new("Riverside 2026", 2026, BudgetScope::Park(ParkId::from_u128(7)));
    draft.status = BudgetStatus::Draft;

    let dataset = Dataset {
        generated_at: None,
        categories: vec![
            Category::new(DONATIONS, "Donations", CategoryType::Income),
            Category::new(MAINTENANCE, "Maintenance", CategoryType::Expense),
            Category::new(TREE_CARE, "Tree care", CategoryType::Expense),
        ],
        category_links: vec![CategoryLink {
            child: TREE_CARE,
            parent: MAINTENANCE,
        }],
        budget_lines: vec![
            line(1, budget.id, DONATIONS, dec!(120000)),
            line(2, budget.id, MAINTENANCE, dec!(60000)),
            line(3, budget.id, TREE_CARE, dec!(24000)),
            line(4, draft.id, DONATIONS, dec!(5000)),
        ],
        budgets: vec![budget.clone(), draft],
        actuals: vec![
            ActualEntry::new(DONATIONS, 2025, 1, dec!(12000)),
            ActualEntry::new(DONATIONS, 2024, 1, dec!(9000)),
        ],
    };
    (dataset, budget)
}

#[tokio::test]
async fn test_totals_recomputed_on_load() {
    let (dataset, budget) = dataset();
    let store = Store::from_dataset(dataset).unwrap();
    let repo = BudgetRepository::new(store);

    let loaded = repo.get_budget(budget.id).await.unwrap();
    assert_eq!(loaded.total_income(), dec!(120000));
    assert_eq!(loaded.total_expenses(), dec!(84000));
}

#[tokio::test]
async fn test_list_budgets_filters() {
    let (dataset, _) = dataset();
    let repo = BudgetRepository::new(Store::from_dataset(dataset).unwrap());

    assert_eq!(repo.list_budgets(BudgetFilter::default()).await.len(), 2);
    let all = repo.list_budgets(BudgetFilter::default()).await;
    assert_eq!(all[0].year, 2026);

    let municipal = repo
        .list_budgets(BudgetFilter {
            year: None,
            scope: Some(BudgetScope::Municipal),
        })
        .await;
    assert_eq!(municipal.len(), 1);
    assert_eq!(municipal[0].name, "Parks 2025");

    let none = repo
        .list_budgets(BudgetFilter {
            year: Some(2030),
            scope: None,
        })
        .await;
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_get_budget_with_lines() {
    let (dataset, budget) = dataset();
    let repo = BudgetRepository::new(Store::from_dataset(dataset).unwrap());

    let (loaded, lines) = repo.get_budget_with_lines(budget.id).await.unwrap();
    assert_eq!(loaded.id, budget.id);
    assert_eq!(lines.len(), 3);

    let missing = BudgetId::from_u128(999);
    assert!(matches!(
        repo.get_budget(missing).await,
        Err(StoreError::BudgetNotFound(id)) if id == missing
    ));
}

#[tokio::test]
async fn test_duplicate_creates_draft_copy() {
    let (dataset, budget) = dataset();
    let store = Store::from_dataset(dataset).unwrap();
    let repo = BudgetRepository::new(store.clone());

    let (copy, lines) = repo
        .duplicate_budget(budget.id, Some("Parks 2026".to_string()), Some(2026))
        .await
        .unwrap();

    assert_ne!(copy.id, budget.id);
    assert_eq!(copy.status, BudgetStatus::Draft);
    assert_eq!(copy.year, 2026);
    assert_eq!(copy.total_expenses(), dec!(84000));
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.budget_id() == copy.id));

    let (_, stored_lines) = repo.get_budget_with_lines(copy.id).await.unwrap();
    assert_eq!(stored_lines, lines);
    assert_eq!(store.snapshot().await.budgets.len(), 3);
}

#[tokio::test]
async fn test_status_transitions() {
    let (dataset, budget) = dataset();
    let repo = BudgetRepository::new(Store::from_dataset(dataset).unwrap());

    let archived = repo
        .set_status(budget.id, BudgetStatus::Archived)
        .await
        .unwrap();
    assert_eq!(archived.status, BudgetStatus::Archived);

    let rejected = repo.set_status(budget.id, BudgetStatus::Active).await;
    assert!(matches!(
        rejected,
        Err(StoreError::Budget(BudgetError::InvalidStatusTransition {
            from: BudgetStatus::Archived,
            to: BudgetStatus::Active,
        }))
    ));
}

#[tokio::test]
async fn test_catalog_and_actuals() {
    let (dataset, _) = dataset();
    let store = Store::from_dataset(dataset).unwrap();

    let catalog = CatalogRepository::new(store.clone()).catalog().await;
    assert_eq!(catalog.len(), 3);
    let hierarchy = CatalogRepository::new(store.clone()).hierarchy().await;
    assert_eq!(hierarchy.root_of(TREE_CARE), MAINTENANCE);

    let actuals = ActualsRepository::new(store);
    assert_eq!(actuals.list_actuals(2025, BudgetScope::Municipal).await.len(), 1);
    assert!(
        actuals
            .list_actuals(2025, BudgetScope::Park(ParkId::from_u128(7)))
            .await
            .is_empty()
    );
}

#[tokio::test]
async fn test_orphan_line_rejected() {
    let (mut dataset, _) = dataset();
    let stray = BudgetId::from_u128(404);
    dataset.budget_lines.push(line(9, stray, DONATIONS, dec!(1)));

    assert!(matches!(
        Store::from_dataset(dataset),
        Err(StoreError::OrphanLine { budget_id, .. }) if budget_id == stray
    ));
}

#[tokio::test]
async fn test_hierarchy_cycle_rejected() {
    let (mut dataset, _) = dataset();
    dataset.category_links.push(CategoryLink {
        child: MAINTENANCE,
        parent: TREE_CARE,
    });

    assert!(matches!(
        Store::from_dataset(dataset),
        Err(StoreError::Catalog(CatalogError::Cycle(_)))
    ));
}

#[tokio::test]
async fn test_invalid_line_in_json_rejected() {
    let json = r#"{
        "categories": [{ "id": "00000000-0000-0000-0000-000000000001", "name": "Donations", "type": "income" }],
        "budgets": [],
        "budget_lines": [{
            "budget_id": "00000000-0000-0000-0000-000000000001",
            "category_id": "00000000-0000-0000-0000-000000000001",
            "concept": "Gala",
            "projected_amount": "-10"
        }]
    }"#;
    assert!(matches!(Dataset::from_json(json), Err(StoreError::Parse(_))));
}

#[tokio::test]
async fn test_save_and_reload() {
    let (dataset, budget) = dataset();
    let store = Store::from_dataset(dataset).unwrap();
    let path = std::env::temp_dir()
        .join(format!("parkfin-store-{}", BudgetId::new()))
        .join("dataset.json");

    store.save(&path).await.unwrap();
    let reloaded = parkfin_store::open(&path).await.unwrap();
    let repo = BudgetRepository::new(reloaded);
    let (loaded, lines) = repo.get_budget_with_lines(budget.id).await.unwrap();

    assert_eq!(loaded.total_income(), dec!(120000));
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].monthly()[0], dec!(10000));

    if let Some(dir) = path.parent() {
        let _ = tokio::fs::remove_dir_all(dir).await;
    }
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let result = parkfin_store::open("/nonexistent/parkfin/dataset.json").await;
    assert!(matches!(result, Err(StoreError::Io { .. })));
}
