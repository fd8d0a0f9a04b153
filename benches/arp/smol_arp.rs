use criterion::{black_box, criterion_group, criterion_main, Criterion};
use smoltcp::wire;

static FRAME_BYTES: [u8; 60] = [
    0x6c, 0xf0, 0x49, 0xb2, 0xde, 0x6e, 0x30, 0x46, 0x9a, 0x23, 0xfb, 0xfa, 0x08, 0x06, 0x00, 0x01,
    0x08, 0x00, 0x06, 0x04, 0x00, 0x02, 0x30, 0x46, 0x9a, 0x23, 0xfb, 0xfa, 0x0a, 0x00, 0x00, 0x8a,
    0x6c, 0xf0, 0x49, 0xb2, 0xde, 0x6e, 0x0a, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

fn smol_parse(buf: &[u8]) {
    let ethpkt = wire::EthernetFrame::new_checked(buf).unwrap();
    assert!(ethpkt.ethertype() == wire::EthernetProtocol::Arp);

    let arppkt = wire::ArpPacket::new_checked(ethpkt.payload()).unwrap();
    assert!(arppkt.hardware_type() == wire::ArpHardware::Ethernet);
    assert!(arppkt.operation() == wire::ArpOperation::Reply);
    assert!(arppkt.source_hardware_addr() == &FRAME_BYTES[22..28]);
    assert!(arppkt.source_protocol_addr() == &[10, 0, 0, 138]);
    assert!(arppkt.target_protocol_addr() == &[10, 0, 0, 1]);
}

fn smol_build(buf: &mut [u8]) {
    let mut ethpkt = wire::EthernetFrame::new_unchecked(buf);
    ethpkt.set_dst_addr(wire::EthernetAddress::BROADCAST);
    ethpkt.set_src_addr(wire::EthernetAddress([0x6c, 0xf0, 0x49, 0xb2, 0xde, 0x6e]));
    ethpkt.set_ethertype(wire::EthernetProtocol::Arp);

    let mut arppkt = wire::ArpPacket::new_unchecked(ethpkt.payload_mut());
    arppkt.set_hardware_type(wire::ArpHardware::Ethernet);
    arppkt.set_protocol_type(wire::EthernetProtocol::Ipv4);
    arppkt.set_hardware_len(6);
    arppkt.set_protocol_len(4);
    arppkt.set_operation(wire::ArpOperation::Request);
    arppkt.set_source_hardware_addr(&[0x6c, 0xf0, 0x49, 0xb2, 0xde, 0x6e]);
    arppkt.set_source_protocol_addr(&[10, 0, 0, 1]);
    arppkt.set_target_hardware_addr(&[0; 6]);
    arppkt.set_target_protocol_addr(&[10, 0, 0, 138]);
}

pub fn b1(c: &mut Criterion) {
    c.bench_function("smol_arp_parse", |b| {
        b.iter(|| {
            smol_parse(black_box(&FRAME_BYTES[..]));
        })
    });
}

pub fn b2(c: &mut Criterion) {
    c.bench_function("smol_arp_build", |b| {
        let mut buf = [0; 42];
        b.iter(|| {
            smol_build(black_box(&mut buf[..]));
        })
    });
}

criterion_group!(benches, b1, b2);
criterion_main!(benches);
