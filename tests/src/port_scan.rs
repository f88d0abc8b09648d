use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use scanvenger_common::config::LimiterScope;
use scanvenger_common::network::host::OsGuess;
use scanvenger_common::network::target::Target;
use scanvenger_common::ports::{ADMIN_PORTS, PortList, WEB_PORTS};
use scanvenger_core::scanner::{self, ScanMode};

use crate::mock::{MockProber, context};

#[tokio::test]
async fn web_preset_against_a_linux_host() {
    let prober = Arc::new(MockProber::new().host(Ipv4Addr::new(10, 0, 0, 5), 50, &[443, 80]));
    let ctx = context(&prober, 50);
    let target: Target = "10.0.0.0/24".parse().unwrap();

    let hosts = scanner::run(&ctx, target, ScanMode::ports(WEB_PORTS), None).await;

    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].addr, Ipv4Addr::new(10, 0, 0, 5));
    assert_eq!(hosts[0].open_ports, vec![80, 443]);
    assert_eq!(hosts[0].os, OsGuess::Linux);
    // Only the live host gets port probes
    assert_eq!(prober.connects(), WEB_PORTS.len());
}

#[tokio::test]
async fn linux_hosts_never_report_windows_services() {
    let prober = Arc::new(
        MockProber::new()
            .host(Ipv4Addr::new(10, 0, 0, 2), 64, &[22, 445, 3389])
            .host(Ipv4Addr::new(10, 0, 0, 3), 64, &[445, 5985])
            .host(Ipv4Addr::new(10, 0, 0, 4), 128, &[22, 445, 3389]),
    );
    let ctx = context(&prober, 50);
    let target: Target = "10.0.0.0/24".parse().unwrap();
    let ports = PortList::parse("22,445,3389,5985");

    let mut hosts = scanner::run(&ctx, target, ScanMode::ports(&ports), None).await;
    hosts.sort_by_key(|h| h.addr);

    // 10.0.0.3 only had Windows services open, so nothing is left to report
    assert_eq!(hosts.len(), 2);
    assert_eq!(hosts[0].addr, Ipv4Addr::new(10, 0, 0, 2));
    assert_eq!(hosts[0].open_ports, vec![22]);
    assert_eq!(hosts[1].os, OsGuess::Windows);
    assert_eq!(hosts[1].open_ports, vec![22, 445, 3389]);
}

#[tokio::test]
async fn live_host_without_open_ports_is_dropped() {
    let prober = Arc::new(MockProber::new().host(Ipv4Addr::new(172, 16, 0, 1), 120, &[]));
    let ctx = context(&prober, 50);
    let target: Target = "172.16.0.1".parse().unwrap();

    let hosts = scanner::run(&ctx, target, ScanMode::ports(ADMIN_PORTS), None).await;

    assert!(hosts.is_empty());
    assert_eq!(prober.connects(), ADMIN_PORTS.len());
}

#[tokio::test]
async fn limiter_caps_port_probes_across_the_sweep() {
    let mut prober = MockProber::new().connect_delay(Duration::from_millis(2));
    for last in 1..=254u8 {
        prober = prober.host(Ipv4Addr::new(10, 9, 9, last), 64, &[22]);
    }
    let prober = Arc::new(prober);
    let ctx = context(&prober, 16);
    let target: Target = "10.9.9.0/24".parse().unwrap();
    let ports = [22, 80, 443, 8080];

    let hosts = scanner::run(&ctx, target, ScanMode::ports(&ports), None).await;

    assert_eq!(hosts.len(), 254);
    assert_eq!(prober.connects(), 254 * ports.len());
    assert!(ctx.limiter().peak() <= 16, "limiter peak {}", ctx.limiter().peak());
    assert!(prober.peak() <= 16, "observed {} connects at once", prober.peak());
    assert!(prober.peak() > 1);
    assert_eq!(ctx.limiter().in_flight(), 0);
}

#[tokio::test]
async fn gating_every_probe_with_one_slot_still_completes() {
    let prober = Arc::new(
        MockProber::new()
            .host(Ipv4Addr::new(10, 3, 3, 7), 60, &[80])
            .host(Ipv4Addr::new(10, 3, 3, 8), 110, &[443]),
    );
    let ctx = context(&prober, 1).with_scope(LimiterScope::AllProbes);
    let target: Target = "10.3.3.0/24".parse().unwrap();

    let hosts = scanner::run(&ctx, target, ScanMode::ports(WEB_PORTS), None).await;

    assert_eq!(hosts.len(), 2);
    assert_eq!(ctx.limiter().peak(), 1);
    assert_eq!(prober.peak(), 1);
}
