use arpkt::arp::*;
use arpkt::ether::*;
use arpkt::Cursor;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

static FRAME_BYTES: [u8; 60] = [
    0x6c, 0xf0, 0x49, 0xb2, 0xde, 0x6e, 0x30, 0x46, 0x9a, 0x23, 0xfb, 0xfa, 0x08, 0x06, 0x00, 0x01,
    0x08, 0x00, 0x06, 0x04, 0x00, 0x02, 0x30, 0x46, 0x9a, 0x23, 0xfb, 0xfa, 0x0a, 0x00, 0x00, 0x8a,
    0x6c, 0xf0, 0x49, 0xb2, 0xde, 0x6e, 0x0a, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

fn parse_l2(buf: &[u8]) {
    let ethpkt = EtherPacket::parse(Cursor::new(buf)).unwrap();
    assert!(ethpkt.ethertype() == EtherType::ARP);
    assert!(ethpkt.src_addr() == EtherAddr([0x30, 0x46, 0x9a, 0x23, 0xfb, 0xfa]));
}

fn parse_arp(buf: &[u8]) {
    let ethpkt = EtherPacket::parse(Cursor::new(buf)).unwrap();
    assert!(ethpkt.ethertype() == EtherType::ARP);

    let arppkt = ArpPacket::parse(ethpkt.payload()).unwrap();
    assert!(arppkt.check_header_len());
    assert!(arppkt.hardware_type() == Hardware::ETHERNET);
    assert!(arppkt.operation() == Operation::REPLY);

    let addrs = arppkt.addrs();
    assert!(addrs.sha == &FRAME_BYTES[22..28]);
    assert!(addrs.spa == &[10, 0, 0, 138]);
    assert!(addrs.tpa == &[10, 0, 0, 1]);
}

pub fn b1(c: &mut Criterion) {
    c.bench_function("parse_l2", |b| {
        b.iter(|| {
            parse_l2(black_box(&FRAME_BYTES[..]));
        })
    });
}

pub fn b2(c: &mut Criterion) {
    c.bench_function("parse_arp", |b| {
        b.iter(|| {
            parse_arp(black_box(&FRAME_BYTES[..]));
        })
    });
}

criterion_group!(benches, b1, b2);
criterion_main!(benches);
