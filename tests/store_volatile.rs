use alias_shortener::domain::repositories::{AliasStore, StoreError};
use alias_shortener::infrastructure::persistence::VolatileStore;
use alias_shortener::utils::alias_codec;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_aliases_are_unique_across_urls() {
    let store = VolatileStore::new();
    let mut aliases = HashSet::new();

    for i in 0..1_000 {
        let alias = store
            .create_alias(&format!("https://example.com/{i}"))
            .await
            .unwrap();
        assert!(aliases.insert(alias));
    }

    assert_eq!(store.count().await.unwrap(), 1_000);
}

#[tokio::test]
async fn test_every_alias_resolves_to_its_url() {
    let store = VolatileStore::new();

    let mut created = Vec::new();
    for i in 0..50 {
        let long_url = format!("https://example.com/{i}");
        let alias = store.create_alias(&long_url).await.unwrap();
        created.push((long_url, alias));
    }

    for (long_url, alias) in created {
        let token = alias_codec::parse(&alias).unwrap();
        assert_eq!(store.resolve_alias(token).await.unwrap(), long_url);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_for_distinct_urls() {
    const TASKS: usize = 64;
    let store = Arc::new(VolatileStore::new());

    let handles: Vec<_> = (0..TASKS)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                let long_url = format!("https://example.com/{i}");
                let alias = store.create_alias(&long_url).await?;
                Ok::<_, StoreError>((long_url, alias))
            })
        })
        .collect();

    let mut aliases = HashSet::new();
    for handle in handles {
        let (long_url, alias) = handle.await.unwrap().unwrap();
        let token = alias_codec::parse(&alias).unwrap();
        assert_eq!(store.resolve_alias(token).await.unwrap(), long_url);
        aliases.insert(alias);
    }

    assert_eq!(aliases.len(), TASKS);
    assert_eq!(store.count().await.unwrap(), TASKS as i64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicates_yield_single_record() {
    const TASKS: usize = 16;
    let store = Arc::new(VolatileStore::new());

    let handles: Vec<_> = (0..TASKS)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.create_alias("https://example.com/same").await })
        })
        .collect();

    let mut winners = Vec::new();
    for handle in handles {
        match handle.await.unwrap() {
            Ok(alias) => winners.push(alias),
            Err(e) => assert!(matches!(e, StoreError::DuplicateUrl(_))),
        }
    }

    assert_eq!(winners.len(), 1);

    let record = store
        .find_by_long_url("https://example.com/same")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.short_alias, winners[0]);
}

#[tokio::test]
async fn test_stores_are_independent() {
    let first = VolatileStore::new();
    let second = VolatileStore::new();

    first.create_alias("https://example.com/a").await.unwrap();

    assert!(second.create_alias("https://example.com/a").await.is_ok());
    assert_eq!(first.count().await.unwrap(), 1);
    assert_eq!(second.count().await.unwrap(), 1);
}
