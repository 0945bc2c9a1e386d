#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::time::Duration;

use paygtoken::store::MemoryTokenStore;
use paygtoken::test_support::{directory_with, golden_secret, service_over};
use paygtoken::types::DeviceId;
use paygtoken::utils::CancelSignal;

use common::fixtures::{DEVICE, auto_counter_request, fixed_now};

// The store sleeps inside every call, so without per-device serialization
// concurrent requests would all read the same maximum.
async fn issue_concurrently(n: usize) -> (Vec<u32>, Arc<MemoryTokenStore>) {
    common::init_logger();
    let directory = directory_with(vec![(DEVICE, Some(golden_secret())), ("OTHER", Some(golden_secret()))]).await;
    let store = Arc::new(MemoryTokenStore::with_latency(Duration::from_millis(5)));
    let service = Arc::new(service_over(directory, store.clone(), fixed_now()).unwrap());

    let mut handles = Vec::new();
    for _ in 0..n {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            let req = auto_counter_request(DEVICE, "unlock_relative", Some("1"));
            service.generate(&req, &CancelSignal::never()).await
        }));
    }

    let mut counters = Vec::new();
    for h in handles {
        let resp = h.await.unwrap();
        assert!(resp.is_ok(), "{:?}", resp.error);
        counters.push(resp.sequence_number);
    }
    (counters, store)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn two_concurrent_requests_get_distinct_counters() {
    let (mut counters, _) = issue_concurrently(2).await;
    counters.sort_unstable();
    assert_eq!(counters, vec![1, 2]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn many_concurrent_requests_get_a_dense_sequence() {
    let (mut counters, store) = issue_concurrently(16).await;
    counters.sort_unstable();
    assert_eq!(counters, (1..=16).collect::<Vec<u32>>());

    // append order follows assignment order
    let stored: Vec<u32> = store
        .tokens_for(&DeviceId::new(DEVICE))
        .await
        .iter()
        .map(|t| t.counter.as_u32())
        .collect();
    assert_eq!(stored, (1..=16).collect::<Vec<u32>>());
}
