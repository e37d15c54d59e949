// Unit tests for invoice draft sessions and the draft store
//
// - Totals are recomputed from the current state after every change
// - Line items are addressed by index; bad indices fail without side effects
// - The store caps open drafts and applies failing changes atomically
// - Idle drafts are evicted; a draft holds at most MAX_LINE_ITEMS items

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use dealerdesk::core::AppError;
use dealerdesk::invoices::{
    DraftStore, DraftSweeper, InvoiceDraftSession, LineItemField, MAX_LINE_ITEMS,
};
use dealerdesk::taxes::Jurisdiction;

#[test]
fn test_draft_totals_follow_every_change() {
    let mut draft = InvoiceDraftSession::new(Jurisdiction::ON);
    draft.set_base_price(dec!(400));
    draft.set_package_fee(dec!(100));
    assert_eq!(draft.calculation().unwrap().grand_total(), dec!(565));

    let index = draft.add_line_item().unwrap();
    draft
        .update_line_item(index, LineItemField::Quantity(2))
        .unwrap();
    draft
        .update_line_item(index, LineItemField::UnitPrice(dec!(50)))
        .unwrap();
    draft.set_discount(dec!(20));

    let calculation = draft.calculation().unwrap();
    assert_eq!(calculation.subtotal(), dec!(580));
    assert_eq!(calculation.grand_total(), dec!(655.40));

    draft.set_jurisdiction(Jurisdiction::AB);
    assert_eq!(draft.calculation().unwrap().grand_total(), dec!(609));
}

#[test]
fn test_blank_line_item_contributes_nothing() {
    let mut draft = InvoiceDraftSession::new(Jurisdiction::BC);
    draft.set_base_price(dec!(1000));
    let before = draft.calculation().unwrap();

    draft.add_line_item().unwrap();
    let after = draft.calculation().unwrap();

    assert_eq!(draft.line_items()[0].quantity, 1);
    assert_eq!(draft.line_items()[0].unit_price, Decimal::ZERO);
    assert_eq!(before, after);
}

#[test]
fn test_remove_shifts_later_items() {
    let mut draft = InvoiceDraftSession::new(Jurisdiction::ON);
    for name in ["Mats", "Tint", "Guard"] {
        let index = draft.add_line_item().unwrap();
        draft
            .update_line_item(index, LineItemField::Description(name.to_string()))
            .unwrap();
    }

    let removed = draft.remove_line_item(1).unwrap();

    assert_eq!(removed.description, "Tint");
    let names: Vec<&str> = draft
        .line_items()
        .iter()
        .map(|i| i.description.as_str())
        .collect();
    assert_eq!(names, vec!["Mats", "Guard"]);
}

#[test]
fn test_bad_index_and_values_are_rejected() {
    let mut draft = InvoiceDraftSession::new(Jurisdiction::ON);
    draft.add_line_item().unwrap();

    assert!(matches!(
        draft.update_line_item(5, LineItemField::Quantity(2)),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(draft.remove_line_item(1), Err(AppError::Validation(_))));
    assert!(draft
        .update_line_item(0, LineItemField::UnitPrice(dec!(-1)))
        .is_err());
    assert_eq!(draft.line_items()[0].unit_price, Decimal::ZERO);
}

#[tokio::test]
async fn test_store_lifecycle() {
    let store = DraftStore::new(2, Jurisdiction::SK);

    let (first, session) = store.create(None).await.unwrap();
    assert_eq!(session.jurisdiction(), Jurisdiction::SK);
    let (second, _) = store.create(Some(Jurisdiction::NS)).await.unwrap();
    assert_ne!(first, second);

    assert!(matches!(store.create(None).await, Err(AppError::Validation(_))));

    let updated = store
        .update(first, |draft| {
            draft.set_base_price(dec!(100));
            Ok(())
        })
        .await
        .unwrap();
    // GST 5% + PST 6%
    assert_eq!(updated.calculation().unwrap().grand_total(), dec!(111));

    store.discard(first).await.unwrap();
    assert!(matches!(store.get(first).await, Err(AppError::NotFound(_))));
    assert_eq!(store.len().await, 1);

    store.create(None).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_drafts_are_independent() {
    let store = Arc::new(DraftStore::new(64, Jurisdiction::ON));

    let handles: Vec<_> = (1..=16)
        .map(|n| {
            let store = store.clone();
            tokio::spawn(async move {
                let (id, _) = store.create(None).await.unwrap();
                store
                    .update(id, |draft| {
                        draft.set_base_price(Decimal::from(n * 100));
                        Ok(())
                    })
                    .await
                    .unwrap();
                (id, n)
            })
        })
        .collect();

    for handle in handles {
        let (id, n) = handle.await.unwrap();
        let draft = store.get(id).await.unwrap();
        assert_eq!(draft.base_price(), Decimal::from(n * 100));
    }
    assert_eq!(store.len().await, 16);
}

#[test]
fn test_line_item_limit_per_draft() {
    let mut draft = InvoiceDraftSession::new(Jurisdiction::ON);
    for _ in 0..MAX_LINE_ITEMS {
        draft.add_line_item().unwrap();
    }

    assert!(matches!(draft.add_line_item(), Err(AppError::Validation(_))));
    assert_eq!(draft.line_items().len(), MAX_LINE_ITEMS);
}

#[tokio::test]
async fn test_store_rejects_line_item_over_limit_without_change() {
    let store = DraftStore::new(4, Jurisdiction::ON);
    let (id, _) = store.create(None).await.unwrap();

    for _ in 0..MAX_LINE_ITEMS {
        store
            .update(id, |draft| draft.add_line_item().map(|_| ()))
            .await
            .unwrap();
    }

    let result = store
        .update(id, |draft| draft.add_line_item().map(|_| ()))
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(store.get(id).await.unwrap().line_items().len(), MAX_LINE_ITEMS);
}

#[tokio::test]
async fn test_abandoned_drafts_do_not_exhaust_the_store() {
    let store = Arc::new(DraftStore::new(2, Jurisdiction::ON).with_idle_timeout(Duration::ZERO));
    store.create(None).await.unwrap();
    store.create(None).await.unwrap();

    // Both drafts are idle, so a full store still accepts a new one
    store.create(None).await.unwrap();
    assert_eq!(store.len().await, 1);

    let sweeper = DraftSweeper::new(store.clone(), Duration::from_secs(60));
    assert_eq!(sweeper.sweep().await, 1);
    assert!(store.is_empty().await);
}
