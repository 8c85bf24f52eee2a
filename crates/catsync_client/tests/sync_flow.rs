//! End-to-end sync flows against the mock service.

use catsync_actions::UpdateAction;
use catsync_client::{
    ClientError, MockService, ProductRevision, RetryConfig, SyncOutcome, Syncer, SyncerConfig,
};
use catsync_model::{LocalizedString, ProductData, Reference};

fn named(en: &str) -> ProductData {
    ProductData::new().with_name(LocalizedString::of("en", en))
}

fn syncer(mock: MockService) -> Syncer<MockService> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    Syncer::new(mock, SyncerConfig::new().with_retry(RetryConfig::no_retry()))
}

#[test]
fn sync_applies_the_computed_action_list() {
    let mock = MockService::new();
    mock.push_fetch(Ok(Some(ProductRevision::new("p1", 3, named("Auto")))));
    mock.push_update(Ok(ProductRevision::new("p1", 4, named("Car"))));
    let syncer = syncer(mock);

    let outcome = syncer.sync("p1", &named("Car")).unwrap();
    assert_eq!(
        outcome,
        SyncOutcome::Updated {
            actions: 1,
            version: 4,
        }
    );

    let updates = syncer.service().recorded_updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].id, "p1");
    assert_eq!(updates[0].version, 3);
    assert_eq!(
        updates[0].actions,
        vec![UpdateAction::ChangeName {
            name: LocalizedString::of("en", "Car"),
        }]
    );
    assert_eq!(syncer.stats().updated, 1);
}

#[test]
fn version_conflict_refetches_and_recomputes() {
    let target = named("Car").with_categories(vec![Reference::category("A")]);

    let mock = MockService::new();
    // First round: stale fetch, conflicting update.
    mock.push_fetch(Ok(Some(ProductRevision::new("p1", 3, named("Auto")))));
    mock.push_update(Err(ClientError::VersionConflict {
        expected: 3,
        actual: Some(5),
    }));
    // Second round: someone already renamed the product remotely, so the
    // recomputed list only carries the category change.
    mock.push_fetch(Ok(Some(ProductRevision::new("p1", 5, named("Car")))));
    mock.push_update(Ok(ProductRevision::new("p1", 6, target.clone())));
    let syncer = syncer(mock);

    let outcome = syncer.sync("p1", &target).unwrap();
    assert_eq!(
        outcome,
        SyncOutcome::Updated {
            actions: 1,
            version: 6,
        }
    );

    let updates = syncer.service().recorded_updates();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].version, 3);
    assert_eq!(updates[0].actions.len(), 2);
    assert_eq!(updates[1].version, 5);
    assert_eq!(
        updates[1].actions,
        vec![UpdateAction::AddToCategory {
            category: Reference::category("A"),
        }]
    );
    assert_eq!(syncer.stats().conflict_recomputes, 1);
}

#[test]
fn conflict_cap_surfaces_the_conflict() {
    let mock = MockService::new();
    mock.push_fetch(Ok(Some(ProductRevision::new("p1", 1, named("Auto")))));
    mock.push_update(Err(ClientError::VersionConflict {
        expected: 1,
        actual: None,
    }));
    let config = SyncerConfig::new()
        .with_retry(RetryConfig::no_retry())
        .with_max_conflict_recomputes(0);
    let syncer = Syncer::new(mock, config);

    let err = syncer.sync("p1", &named("Car")).unwrap_err();
    assert!(matches!(err, ClientError::VersionConflict { .. }));
}

#[test]
fn resource_deleted_between_fetch_and_update_is_missing() {
    let mock = MockService::new();
    mock.push_fetch(Ok(Some(ProductRevision::new("p1", 1, named("Auto")))));
    mock.push_update(Err(ClientError::NotFound("p1".into())));
    let syncer = syncer(mock);

    let outcome = syncer.sync("p1", &named("Car")).unwrap();
    assert_eq!(outcome, SyncOutcome::Missing);
}

#[test]
fn independent_resources_do_not_affect_each_other() {
    let mock = MockService::new();
    mock.push_fetch(Err(ClientError::transport_fatal("boom")));
    mock.push_fetch(Ok(Some(ProductRevision::new("p2", 1, named("Car")))));
    let syncer = syncer(mock);

    assert!(syncer.sync("p1", &named("Car")).is_err());
    let outcome = syncer.sync("p2", &named("Car")).unwrap();
    assert_eq!(outcome, SyncOutcome::UpToDate);

    let stats = syncer.stats();
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.up_to_date, 1);
}
