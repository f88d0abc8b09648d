use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use scanvenger_common::network::host::OsGuess;
use scanvenger_common::network::target::Target;
use scanvenger_core::report;
use scanvenger_core::scanner::{self, ProgressCallback, ScanMode};

use crate::mock::{MockProber, context};

#[tokio::test]
async fn discovery_reports_only_live_hosts() {
    let prober = Arc::new(
        MockProber::new()
            .named_host(Ipv4Addr::new(192, 168, 1, 1), 64, &[], "gw.lab.local")
            .host(Ipv4Addr::new(192, 168, 1, 20), 128, &[])
            .host(Ipv4Addr::new(192, 168, 1, 200), 250, &[]),
    );
    let ctx = context(&prober, 50);
    let target: Target = "192.168.1.0/24".parse().unwrap();

    let mut hosts = scanner::run(&ctx, target, ScanMode::Discovery, None).await;
    hosts.sort_by_key(|h| h.addr);

    assert_eq!(hosts.len(), 3);
    assert_eq!(hosts[0].hostname, "gw.lab.local");
    assert_eq!(hosts[0].os, OsGuess::Linux);
    assert_eq!(hosts[1].os, OsGuess::Windows);
    assert_eq!(hosts[1].hostname, "192.168.1.20");
    assert_eq!(hosts[2].os, OsGuess::Unknown(250));
    assert!(hosts.iter().all(|h| h.open_ports.is_empty()));

    // Discovery never opens a connection
    assert_eq!(prober.connects(), 0);
}

#[tokio::test]
async fn unreachable_single_host_yields_nothing() {
    let prober = Arc::new(MockProber::new());
    let ctx = context(&prober, 50);
    let target: Target = "10.0.0.9".parse().unwrap();

    let hosts = scanner::run(&ctx, target, ScanMode::Discovery, None).await;
    assert!(hosts.is_empty());
}

#[tokio::test]
async fn empty_subnet_writes_header_only_report() {
    let prober = Arc::new(MockProber::new());
    let ctx = context(&prober, 50);
    let target: Target = "192.168.1.0/24".parse().unwrap();

    let hosts = scanner::run(&ctx, target, ScanMode::Discovery, None).await;
    assert!(hosts.is_empty());

    let path = std::env::temp_dir().join(format!("scanvenger-empty-{}.txt", std::process::id()));
    report::write(&hosts, &path).await.unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(contents.lines().count(), 4);
    assert!(contents.lines().nth(1).unwrap().starts_with("IP Address"));
}

#[tokio::test]
async fn progress_reaches_every_host() {
    let prober = Arc::new(MockProber::new().host(Ipv4Addr::new(10, 1, 1, 1), 60, &[]));
    let ctx = context(&prober, 50);
    let target: Target = "10.1.1.0/24".parse().unwrap();

    let calls = Arc::new(AtomicUsize::new(0));
    let last = Arc::new(AtomicUsize::new(0));
    let on_progress: ProgressCallback = {
        let calls = Arc::clone(&calls);
        let last = Arc::clone(&last);
        Arc::new(move |done: usize, total: usize| {
            assert_eq!(total, 254);
            calls.fetch_add(1, Ordering::SeqCst);
            last.fetch_max(done, Ordering::SeqCst);
        })
    };

    let hosts = scanner::run(&ctx, target, ScanMode::Discovery, Some(on_progress)).await;

    assert_eq!(hosts.len(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 254);
    assert_eq!(last.load(Ordering::SeqCst), 254);
}

#[tokio::test]
async fn single_host_is_a_sweep_of_one() {
    let addr = Ipv4Addr::new(10, 2, 2, 2);
    let prober = Arc::new(MockProber::new().host(addr, 128, &[]));
    let ctx = context(&prober, 50);

    let seen = Arc::new(AtomicUsize::new(0));
    let on_progress: ProgressCallback = {
        let seen = Arc::clone(&seen);
        Arc::new(move |done: usize, total: usize| {
            assert_eq!((done, total), (1, 1));
            seen.fetch_add(1, Ordering::SeqCst);
        })
    };

    let hosts = scanner::run(&ctx, Target::Host { addr }, ScanMode::Discovery, Some(on_progress)).await;

    assert_eq!(seen.load(Ordering::SeqCst), 1);
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].os, OsGuess::Windows);
}
