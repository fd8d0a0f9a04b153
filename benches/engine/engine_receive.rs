use arpkt::arp::Hardware;
use arpkt::ipv4::Ipv4Addr;
use arpkt_net::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

static REQUEST_BYTES: [u8; 42] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0x08, 0x06, 0x00, 0x01,
    0x08, 0x00, 0x06, 0x04, 0x00, 0x01, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0x0a, 0x00, 0x00, 0x02,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0a, 0x00, 0x00, 0x01,
];

struct Host {
    addr: Ipv4Addr,
}

impl Routes for Host {
    fn next_hop(&self, dst: Ipv4Addr) -> Option<Ipv4Addr> {
        Some(dst)
    }
}

impl Neighbours for Host {
    fn lookup(&self, _pa: Ipv4Addr, _ifindex: u32) -> Option<HwAddr> {
        None
    }

    fn update(&mut self, _pa: Ipv4Addr, _ha: &HwAddr, _ifindex: u32) -> Result<()> {
        Ok(())
    }
}

impl PendingQueue for Host {
    fn enqueue(&mut self, _next_hop: Ipv4Addr, _ifindex: u32, _pkt: Mbuf) {}

    fn drain(&mut self, _pa: Ipv4Addr, _ifindex: u32) -> Vec<Mbuf> {
        Vec::new()
    }
}

impl HostAddrs for Host {
    fn is_local(&self, ip: Ipv4Addr) -> bool {
        ip == self.addr
    }

    fn ifaddr(&self, _ifindex: u32) -> Option<Ipv4Addr> {
        Some(self.addr)
    }
}

struct Sink {
    sent: usize,
}

impl NetDevice for Sink {
    fn name(&self) -> &str {
        "eth0"
    }

    fn index(&self) -> u32 {
        1
    }

    fn hw_addr(&self) -> &[u8] {
        &[0x02, 0x00, 0x00, 0x00, 0x00, 0x01]
    }

    fn link_type(&self) -> Hardware {
        Hardware::ETHERNET
    }

    fn flags(&self) -> DevFlags {
        DevFlags::UP | DevFlags::BROADCAST
    }

    fn transmit(&mut self, _pkt: Mbuf) -> Result<()> {
        self.sent += 1;
        Ok(())
    }
}

pub fn b(c: &mut Criterion) {
    c.bench_function("engine_answer_request", |b| {
        let mp = Mempool::new(&MempoolConf::default());
        let mut arp = Arp::new(
            Host {
                addr: Ipv4Addr::new(10, 0, 0, 1),
            },
            mp.clone(),
            ArpConf::default(),
        );
        let mut dev = Sink { sent: 0 };

        b.iter(|| {
            let mut pkt = mp.try_alloc().unwrap();
            pkt.extend_from_slice(black_box(&REQUEST_BYTES[..]));
            pkt.set_l2_len(14);
            pkt.set_pkt_type(PacketType::Broadcast);
            arp.receive(pkt, &mut dev).unwrap();
        });
        assert!(dev.sent > 0);
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
