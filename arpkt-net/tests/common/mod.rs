#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use arpkt::arp::Hardware;
use arpkt::ipv4::{IpProtocol, Ipv4Addr, Ipv4Packet, IPV4_HEADER_LEN, IPV4_HEADER_TEMPLATE};
use arpkt::{Buf, CursorMut};
use arpkt_net::*;

pub const DEV_HW: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x01];
pub const DEV_IP: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 1);
pub const GATEWAY: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 254);
pub const PEER_HW: [u8; 6] = [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff];
pub const PEER_IP: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 2);

/// A device that records what it sends.
#[derive(Debug)]
pub struct TestDevice {
    pub name: String,
    pub index: u32,
    pub hw_addr: Vec<u8>,
    pub flags: DevFlags,
    pub sent: Vec<Vec<u8>>,
    pub fail_tx: bool,
}

impl TestDevice {
    pub fn eth0() -> Self {
        Self {
            name: "eth0".to_string(),
            index: 1,
            hw_addr: DEV_HW.to_vec(),
            flags: DevFlags::UP | DevFlags::BROADCAST,
            sent: Vec::new(),
            fail_tx: false,
        }
    }
}

impl NetDevice for TestDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn index(&self) -> u32 {
        self.index
    }

    fn hw_addr(&self) -> &[u8] {
        &self.hw_addr
    }

    fn link_type(&self) -> Hardware {
        Hardware::ETHERNET
    }

    fn flags(&self) -> DevFlags {
        self.flags
    }

    fn transmit(&mut self, pkt: Mbuf) -> Result<()> {
        if self.fail_tx {
            return Err(ArpError::Device("link down".to_string()));
        }
        self.sent.push(pkt.data().to_vec());
        Ok(())
    }
}

/// Calls the engine made into its context, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Lookup(Ipv4Addr),
    Update(Ipv4Addr, HwAddr),
    Enqueue(Ipv4Addr),
    /// Buffers the pool had out when the drain happened.
    Drain(Ipv4Addr, u32),
}

#[derive(Debug)]
pub struct TestCtx {
    pub ifaddrs: HashMap<u32, Ipv4Addr>,
    /// (network, prefix length, gateway)
    pub routes: Vec<(Ipv4Addr, u8, Option<Ipv4Addr>)>,
    pub neighbours: HashMap<(Ipv4Addr, u32), HwAddr>,
    pub queue: Vec<(Ipv4Addr, u32, Mbuf)>,
    pub events: RefCell<Vec<Event>>,
    pub pool: Mempool,
    pub fail_update: bool,
}

impl TestCtx {
    pub fn new(pool: Mempool) -> Self {
        let mut ifaddrs = HashMap::new();
        ifaddrs.insert(1, DEV_IP);
        Self {
            ifaddrs,
            routes: vec![
                (Ipv4Addr::new(10, 0, 0, 0), 24, None),
                (Ipv4Addr::new(127, 0, 0, 0), 8, None),
                (Ipv4Addr::BROADCAST, 32, None),
                (Ipv4Addr::UNSPECIFIED, 0, Some(GATEWAY)),
            ],
            neighbours: HashMap::new(),
            queue: Vec::new(),
            events: RefCell::new(Vec::new()),
            pool,
            fail_update: false,
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }
}

fn mask(prefix: u8) -> u32 {
    if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(prefix))
    }
}

impl Routes for TestCtx {
    fn next_hop(&self, dst: Ipv4Addr) -> Option<Ipv4Addr> {
        self.routes
            .iter()
            .filter(|(net, prefix, _)| {
                u32::from(dst) & mask(*prefix) == u32::from(*net) & mask(*prefix)
            })
            .max_by_key(|(_, prefix, _)| *prefix)
            .map(|(_, _, gw)| gw.unwrap_or(dst))
    }
}

impl Neighbours for TestCtx {
    fn lookup(&self, pa: Ipv4Addr, ifindex: u32) -> Option<HwAddr> {
        self.events.borrow_mut().push(Event::Lookup(pa));
        self.neighbours.get(&(pa, ifindex)).cloned()
    }

    fn update(&mut self, pa: Ipv4Addr, ha: &HwAddr, ifindex: u32) -> Result<()> {
        self.events.borrow_mut().push(Event::Update(pa, ha.clone()));
        if self.fail_update {
            return Err(ArpError::NoMemory);
        }
        self.neighbours.insert((pa, ifindex), ha.clone());
        Ok(())
    }
}

impl PendingQueue for TestCtx {
    fn enqueue(&mut self, next_hop: Ipv4Addr, ifindex: u32, pkt: Mbuf) {
        self.events.borrow_mut().push(Event::Enqueue(next_hop));
        self.queue.push((next_hop, ifindex, pkt));
    }

    fn drain(&mut self, pa: Ipv4Addr, ifindex: u32) -> Vec<Mbuf> {
        self.events
            .borrow_mut()
            .push(Event::Drain(pa, self.pool.in_use()));
        let (drained, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.queue)
            .into_iter()
            .partition(|(hop, idx, _)| *hop == pa && *idx == ifindex);
        self.queue = kept;
        drained.into_iter().map(|(_, _, pkt)| pkt).collect()
    }
}

impl HostAddrs for TestCtx {
    fn is_local(&self, ip: Ipv4Addr) -> bool {
        ip.is_loopback() || self.ifaddrs.values().any(|addr| *addr == ip)
    }

    fn ifaddr(&self, ifindex: u32) -> Option<Ipv4Addr> {
        self.ifaddrs.get(&ifindex).copied()
    }
}

pub fn setup_with(conf: ArpConf, nb_mbufs: u32) -> (Arp<TestCtx>, TestDevice, Mempool) {
    let mut pool_conf = MempoolConf::new();
    pool_conf.set_nb_mbufs(nb_mbufs);
    let pool = Mempool::new(&pool_conf);
    let arp = Arp::new(TestCtx::new(pool.clone()), pool.clone(), conf);
    (arp, TestDevice::eth0(), pool)
}

pub fn setup() -> (Arp<TestCtx>, TestDevice, Mempool) {
    setup_with(ArpConf::default(), 16)
}

/// An ethernet/ipv4 arp header, written out by hand.
pub fn raw_arp(op: u16, sha: &[u8], spa: Ipv4Addr, tha: &[u8], tpa: Ipv4Addr) -> Vec<u8> {
    let mut v = vec![0x00, 0x01, 0x08, 0x00, 6, 4];
    v.extend_from_slice(&op.to_be_bytes());
    v.extend_from_slice(sha);
    v.extend_from_slice(&spa.octets());
    v.extend_from_slice(tha);
    v.extend_from_slice(&tpa.octets());
    v
}

/// A received frame: ethernet header in front of `payload`.
pub fn inbound(pool: &Mempool, src: &[u8], payload: &[u8], pkt_type: PacketType) -> Mbuf {
    let mut pkt = pool.try_alloc().unwrap();
    pkt.extend_from_slice(&[0xff; 6]);
    pkt.extend_from_slice(src);
    pkt.extend_from_slice(&[0x08, 0x06]);
    pkt.extend_from_slice(payload);
    pkt.set_l2_len(14);
    pkt.set_pkt_type(pkt_type);
    pkt
}

pub fn request_from_peer(pool: &Mempool, target: Ipv4Addr) -> Mbuf {
    let payload = raw_arp(1, &PEER_HW, PEER_IP, &[0; 6], target);
    inbound(pool, &PEER_HW, &payload, PacketType::Broadcast)
}

pub fn reply_from(pool: &Mempool, sha: &[u8], spa: Ipv4Addr) -> Mbuf {
    let payload = raw_arp(2, sha, spa, &DEV_HW, DEV_IP);
    inbound(pool, sha, &payload, PacketType::Host)
}

/// An outgoing udp datagram with no link header yet.
pub fn ipv4_packet(pool: &Mempool, dst: Ipv4Addr) -> Mbuf {
    let mut bytes = [0u8; IPV4_HEADER_LEN + 8];
    bytes[IPV4_HEADER_LEN..].copy_from_slice(&[0x13, 0x88, 0x13, 0x89, 0x00, 0x08, 0x00, 0x00]);
    {
        let mut buf = CursorMut::new(&mut bytes[..]);
        buf.advance(IPV4_HEADER_LEN);
        let mut ippkt = Ipv4Packet::prepend_header(buf, &IPV4_HEADER_TEMPLATE);
        ippkt.set_ttl(64);
        ippkt.set_protocol(IpProtocol::UDP);
        ippkt.set_src_addr(DEV_IP);
        ippkt.set_dst_addr(dst);
    }

    let mut pkt = pool.try_alloc().unwrap();
    pkt.extend_from_slice(&bytes);
    pkt
}
