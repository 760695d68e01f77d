//! Dispatch behavior: wiring, worker startup, fan-out, delivery policy.

mod common;

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use harbor::{Capabilities, DeliveryPolicy, Harbor, HarborConfig, HarborError};

use common::Probe;

const RECV_DEADLINE: Duration = Duration::from_secs(1);
const SILENCE: Duration = Duration::from_millis(100);

fn register_probe(harbor: &Harbor, name: &str) -> Arc<Probe> {
    let probe = Arc::new(Probe::default());
    harbor
        .register(
            name,
            probe.clone() as Arc<dyn Any + Send + Sync>,
            Capabilities::new()
                .with_errors(probe.clone())
                .with_warns(probe.clone())
                .with_closes(probe.clone())
                .with_infos(probe.clone()),
        )
        .unwrap();
    probe
}

#[tokio::test]
async fn error_events_are_tagged_and_keep_producer_order() {
    let harbor = Harbor::new(HarborConfig::default());
    let probe = register_probe(&harbor, "svc-a");

    let (tx, mut rx) = mpsc::channel(16);
    harbor.subscribe_errors(tx);
    harbor.ready().unwrap();

    let producer = probe.errors.get().unwrap();
    producer.send("e1".into()).await.unwrap();
    producer.send("e2".into()).await.unwrap();

    let first = timeout(RECV_DEADLINE, rx.recv()).await.unwrap().unwrap();
    assert_eq!(first.name, "svc-a");
    assert_eq!(first.error.to_string(), "e1");

    let second = timeout(RECV_DEADLINE, rx.recv()).await.unwrap().unwrap();
    assert_eq!(second.name, "svc-a");
    assert_eq!(second.error.to_string(), "e2");
}

#[tokio::test]
async fn info_events_reach_every_subscriber() {
    let harbor = Harbor::new(HarborConfig::default());
    let probe = register_probe(&harbor, "svc-b");

    let (tx1, mut rx1) = mpsc::channel(16);
    let (tx2, mut rx2) = mpsc::channel(16);
    harbor.subscribe_infos(tx1);
    harbor.subscribe_infos(tx2);
    harbor.ready().unwrap();

    probe
        .infos
        .get()
        .unwrap()
        .send("warming up".into())
        .await
        .unwrap();

    for rx in [&mut rx1, &mut rx2] {
        let ev = timeout(RECV_DEADLINE, rx.recv()).await.unwrap().unwrap();
        assert_eq!(ev.name, "svc-b");
        assert_eq!(ev.message, "warming up");
    }
}

#[tokio::test]
async fn warn_and_close_categories_are_distinct() {
    let harbor = Harbor::new(HarborConfig::default());
    let probe = register_probe(&harbor, "svc-c");

    let (warn_tx, mut warn_rx) = mpsc::channel(16);
    let (close_tx, mut close_rx) = mpsc::channel(16);
    harbor.subscribe_warns(warn_tx);
    harbor.subscribe_closes(close_tx);
    harbor.ready().unwrap();

    probe.warns.get().unwrap().send("slow".into()).await.unwrap();
    probe
        .closes
        .get()
        .unwrap()
        .send("listener dropped".into())
        .await
        .unwrap();

    let warn = timeout(RECV_DEADLINE, warn_rx.recv()).await.unwrap().unwrap();
    assert_eq!(warn.error.to_string(), "slow");

    let close = timeout(RECV_DEADLINE, close_rx.recv()).await.unwrap().unwrap();
    assert_eq!(close.error.to_string(), "listener dropped");
}

#[tokio::test]
async fn events_pushed_before_ready_are_buffered() {
    let harbor = Harbor::new(HarborConfig::default());
    let probe = register_probe(&harbor, "early");

    // The producer queue absorbs pushes made before workers exist.
    probe.errors.get().unwrap().send("boot".into()).await.unwrap();

    let (tx, mut rx) = mpsc::channel(16);
    harbor.subscribe_errors(tx);
    harbor.ready().unwrap();

    let ev = timeout(RECV_DEADLINE, rx.recv()).await.unwrap().unwrap();
    assert_eq!(ev.name, "early");
    assert_eq!(ev.error.to_string(), "boot");
}

#[tokio::test]
async fn registration_after_ready_gets_no_worker() {
    let harbor = Harbor::new(HarborConfig::default());
    harbor.ready().unwrap();

    let probe = register_probe(&harbor, "latecomer");
    let (tx, mut rx) = mpsc::channel(16);
    harbor.subscribe_errors(tx);

    probe.errors.get().unwrap().send("lost".into()).await.unwrap();
    assert!(timeout(SILENCE, rx.recv()).await.is_err());
}

#[tokio::test]
async fn ready_twice_is_an_error() {
    let harbor = Harbor::new(HarborConfig::default());
    harbor.ready().unwrap();

    let err = harbor.ready().unwrap_err();
    assert!(matches!(err, HarborError::AlreadyReady));
}

#[tokio::test]
async fn drop_policy_skips_full_subscribers_without_stalling_others() {
    let cfg = HarborConfig {
        delivery: DeliveryPolicy::Drop,
        ..HarborConfig::default()
    };
    let harbor = Harbor::new(cfg);
    let probe = register_probe(&harbor, "chatty");

    // Stalled subscriber: capacity 1, never drained.
    let (stalled_tx, _stalled_rx) = mpsc::channel(1);
    let (healthy_tx, mut healthy_rx) = mpsc::channel(16);
    harbor.subscribe_infos(stalled_tx);
    harbor.subscribe_infos(healthy_tx);
    harbor.ready().unwrap();

    let producer = probe.infos.get().unwrap();
    for n in 1..=3 {
        producer.send(format!("msg-{n}")).await.unwrap();
    }

    for n in 1..=3 {
        let ev = timeout(RECV_DEADLINE, healthy_rx.recv()).await.unwrap().unwrap();
        assert_eq!(ev.message, format!("msg-{n}"));
    }
}
