#![cfg(test)]
use pnet::datalink::{MacAddr, NetworkInterface};
use routeip_common::network::interface::find_owning_interface;
use std::net::IpAddr;

use crate::util::{IFF_LOOPBACK, IFF_UP, ni, v4, v6};

/*************************************************************
             Matching a resolved address to its owner
**************************************************************/

#[test]
fn single_route_host_owns_10_0_0_5() {
    let interfaces: Vec<NetworkInterface> = vec![lo(), eth0()];
    let ip: IpAddr = "10.0.0.5".parse().unwrap();
    assert_eq!(Some(&eth0()), find_owning_interface(&interfaces, ip));
}

#[test]
fn vpn_address_belongs_to_tun0() {
    let interfaces: Vec<NetworkInterface> = iface_all();
    let ip: IpAddr = "10.96.0.57".parse().unwrap();
    assert_eq!(Some(&tun0()), find_owning_interface(&interfaces, ip));
}

#[test]
fn global_ipv6_belongs_to_enp9s0() {
    let interfaces: Vec<NetworkInterface> = iface_all();
    let ip: IpAddr = "2a02:908:8c1:b880::b054".parse().unwrap();
    assert_eq!(Some(&enp9s0()), find_owning_interface(&interfaces, ip));
}

#[test]
fn address_on_downed_interface_is_unowned() {
    let interfaces: Vec<NetworkInterface> = iface_all();
    let ip: IpAddr = "192.168.1.42".parse().unwrap();
    let selected = find_owning_interface(&interfaces, ip);
    assert!(selected.is_none(), "Expected no interface, received: {selected:?}");
}

#[test]
fn nothing_owns_an_address_when_no_interfaces_exist() {
    let ip: IpAddr = "10.0.0.5".parse().unwrap();
    assert!(find_owning_interface(&[], ip).is_none());
}

/*************************************************************
                  Mock interfaces for testing
**************************************************************/

fn iface_all() -> Vec<NetworkInterface> {
    vec![lo(), enp9s0(), tun0(), wlan0_down(), eth0()]
}

fn lo() -> NetworkInterface {
    ni(
        "lo",
        1,
        Some(MacAddr::new(0, 0, 0, 0, 0, 0)),
        &[v4(127, 0, 0, 1, 8), v6("::1", 128)],
        IFF_UP | IFF_LOOPBACK,
    )
}

fn enp9s0() -> NetworkInterface {
    ni(
        "enp9s0",
        2,
        Some(MacAddr::new(0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46)),
        &[
            v4(192, 168, 0, 32, 24),
            v6("2a02:908:8c1:b880::b054", 128),
            v6("fe80::b3dd:5c39:7c29:48b6", 64),
        ],
        69699,
    )
}

fn tun0() -> NetworkInterface {
    ni("tun0", 5, None, &[v4(10, 96, 0, 57, 16)], 69841)
}

fn wlan0_down() -> NetworkInterface {
    ni(
        "wlan0",
        3,
        Some(MacAddr::new(0x34, 0xcf, 0xf6, 0x9a, 0x11, 0x22)),
        &[v4(192, 168, 1, 42, 24)],
        4098,
    )
}

fn eth0() -> NetworkInterface {
    ni(
        "eth0",
        4,
        Some(MacAddr::new(0x52, 0x54, 0x00, 0x12, 0x34, 0x56)),
        &[v4(10, 0, 0, 5, 24)],
        69699,
    )
}
