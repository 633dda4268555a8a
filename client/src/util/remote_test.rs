use super::*;

#[test]
fn from_result_maps_outcomes() {
    assert_eq!(Remote::from_result(Ok::<_, ApiError>(3)), Remote::Ready(3));
    assert_eq!(
        Remote::<u8>::from_result(Err(ApiError::Unavailable)),
        Remote::Failed(ApiError::Unavailable)
    );
}

#[test]
fn accessors_follow_variant() {
    let loading = Remote::<u8>::default();
    assert!(loading.is_loading());
    assert!(loading.ready().is_none());

    let ready = Remote::Ready(vec![1, 2]);
    assert_eq!(ready.ready().map(Vec::len), Some(2));
    assert!(ready.error().is_none());

    let failed = Remote::<u8>::Failed(ApiError::Network("offline".to_owned()));
    assert_eq!(failed.error(), Some(&ApiError::Network("offline".to_owned())));
    assert!(!failed.is_loading());
}

#[test]
fn newer_fetch_supersedes_older_ticket() {
    let mut generation = Generation::default();
    let first = generation.begin();
    assert!(generation.is_current(first));

    let second = generation.begin();
    assert!(!generation.is_current(first));
    assert!(generation.is_current(second));
}

#[test]
fn stored_generation_drops_stale_and_disposed_results() {
    let generation = StoredValue::new(Generation::default());
    let first = generation.try_update_value(Generation::begin).unwrap();
    assert!(accepts(generation, first));

    let second = generation.try_update_value(Generation::begin).unwrap();
    assert!(!accepts(generation, first));
    assert!(accepts(generation, second));

    generation.dispose();
    assert!(!accepts(generation, second));
}
