//! Integration test for the electronics fixture set.
//!
//! Three vendors each stock the whole cart:
//!
//! | Vendor      | Shipping | Laptop | Mouse | Keyboard | Alone |
//! |-------------|----------|--------|-------|----------|-------|
//! | TechStore   | 20       | 899    | 35    | 75       | 1029  |
//! | ElectroMart | 15       | 950    | 28    | 65       | 1058  |
//! | BudgetTech  | 25       | 880    | 40    | 80       | 1025  |
//!
//! Splitting the order buys the laptop from BudgetTech and the mouse and
//! keyboard from ElectroMart: 880 + 28 + 65 = 973 in items, 25 + 15 = 40 in
//! shipping, 1013 in total.

use rust_decimal::Decimal;
use testresult::TestResult;

use cartwise::{
    analysis::analyze_deal,
    cart::Cart,
    comparisons::{all_vendor_comparisons, single_vendor_cost},
    deals::{DealError, best_deal},
    fixtures::Fixture,
};

#[test]
fn best_deal_splits_across_two_vendors() -> TestResult {
    let fixture = Fixture::from_set("electronics")?;

    let deal = best_deal(fixture.cart(), fixture.vendors())?;

    assert_eq!(
        deal.selection().iter().collect::<Vec<_>>(),
        [
            ("Laptop", "BudgetTech"),
            ("Mouse", "ElectroMart"),
            ("Keyboard", "ElectroMart"),
        ]
    );
    assert_eq!(deal.breakdown().items_cost(), Decimal::from(973));
    assert_eq!(deal.breakdown().shipping_cost(), Decimal::from(40));
    assert_eq!(deal.breakdown().vendors_used(), ["BudgetTech", "ElectroMart"]);
    assert_eq!(deal.breakdown().vendor_count(), 2);
    assert_eq!(deal.total_cost(), Decimal::new(101_300, 2));

    Ok(())
}

#[test]
fn tech_store_alone_costs_1029() -> TestResult {
    let fixture = Fixture::from_set("electronics")?;
    let tech_store = fixture
        .vendors()
        .first()
        .ok_or("Expected TechStore to be listed first")?;

    let comparison = single_vendor_cost(fixture.cart(), tech_store).ok_or("not applicable")?;

    assert_eq!(comparison.items_cost(), Decimal::from(1009));
    assert_eq!(comparison.total(), Decimal::new(102_900, 2));

    Ok(())
}

#[test]
fn comparisons_rank_single_vendors() -> TestResult {
    let fixture = Fixture::from_set("electronics")?;

    let ranked: Vec<(String, Decimal)> = all_vendor_comparisons(fixture.cart(), fixture.vendors())
        .into_iter()
        .map(|comparison| (comparison.vendor().to_string(), comparison.total()))
        .collect();

    assert_eq!(
        ranked,
        [
            ("BudgetTech".to_string(), Decimal::from(1025)),
            ("TechStore".to_string(), Decimal::from(1029)),
            ("ElectroMart".to_string(), Decimal::from(1058)),
        ]
    );

    Ok(())
}

#[test]
fn analysis_matches_serialized_report() -> TestResult {
    let fixture = Fixture::from_set("electronics")?;

    let analysis = analyze_deal(fixture.cart(), fixture.vendors())?;
    let report = serde_json::to_value(&analysis)?;

    assert_eq!(report["optimal"]["total_cost"], "1013");
    assert_eq!(report["optimal"]["selection"]["Laptop"], "BudgetTech");
    assert_eq!(report["optimal"]["breakdown"]["vendor_count"], 2);
    assert_eq!(report["comparisons"][0]["vendor"], "BudgetTech");
    assert_eq!(report["savings"]["vs_cheapest_single_vendor"], "12");
    assert_eq!(report["savings"]["vs_most_expensive_vendor"], "45");
    assert_eq!(report["savings"]["percentage_saved"], "4.25");

    Ok(())
}

#[test]
fn unknown_item_is_unavailable() -> TestResult {
    let fixture = Fixture::from_set("electronics")?;

    let result = analyze_deal(&Cart::new(["NonExistentItem"]), fixture.vendors());

    assert_eq!(
        result,
        Err(DealError::ItemUnavailable("NonExistentItem".to_string()))
    );

    Ok(())
}

#[test]
fn empty_cart_is_rejected() -> TestResult {
    let fixture = Fixture::from_set("electronics")?;

    assert_eq!(
        best_deal(&Cart::default(), fixture.vendors()),
        Err(DealError::EmptyCart)
    );

    Ok(())
}

#[test]
fn repeated_runs_are_identical() -> TestResult {
    let fixture = Fixture::from_set("electronics")?;

    let first = serde_json::to_string(&fixture.request().analyze()?)?;
    let second = serde_json::to_string(&fixture.request().analyze()?)?;

    assert_eq!(first, second);

    Ok(())
}
