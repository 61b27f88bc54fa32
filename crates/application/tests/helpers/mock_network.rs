#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_dig_application::ports::{DnsTransport, MessageCodec, ServerAddressResolver};
use ferrous_dig_application::services::{
    CnameChaser, IterativeResolver, ReferralExtractor, ServerListWalker, WalkerOptions,
};
use ferrous_dig_application::use_cases::ResolveQueryUseCase;
use ferrous_dig_domain::{
    ChaseQueryType, DelegationDepth, DnsClass, DomainError, FailoverMode, Question, RecordType,
    ResourceRecord, ResponseMessage, ServerIdentifier,
};
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What a scripted server does when queried.
#[derive(Clone)]
pub enum ServerBehavior {
    Reply(ResponseMessage),
    /// Reply only after the given delay.
    Delayed(Duration, ResponseMessage),
    Fail,
    /// Never answers.
    Hang,
    /// Answers with a zero-size message.
    Empty,
    /// Answers with bytes the codec cannot decode.
    Garbage,
}

/// In-memory network: servers are keyed by address, and optionally by the
/// queried name so one address can serve several zones.
///
/// The codec side encodes questions as JSON so the transport can see which
/// name is being asked.
#[derive(Clone, Default)]
pub struct MockNetwork {
    by_name: Arc<Mutex<HashMap<(IpAddr, String), ServerBehavior>>>,
    by_server: Arc<Mutex<HashMap<IpAddr, ServerBehavior>>>,
    calls: Arc<Mutex<Vec<(IpAddr, String)>>>,
    failing_calls: Arc<Mutex<Vec<usize>>>,
}

impl MockNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, server: &str, behavior: ServerBehavior) -> &Self {
        self.by_server
            .lock()
            .unwrap()
            .insert(ip(server), behavior);
        self
    }

    pub fn on_name(&self, server: &str, name: &str, behavior: ServerBehavior) -> &Self {
        self.by_name
            .lock()
            .unwrap()
            .insert((ip(server), normalize(name)), behavior);
        self
    }

    /// Makes the `n`th query sent over the network (1-based, counted across
    /// all servers) fail whatever the server would otherwise do.
    pub fn fail_call(&self, n: usize) -> &Self {
        self.failing_calls.lock().unwrap().push(n);
        self
    }

    pub fn calls(&self) -> Vec<(IpAddr, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, server: &str) -> usize {
        let target = ip(server);
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(addr, _)| *addr == target)
            .count()
    }

    fn behavior_for(&self, server: IpAddr, name: &str) -> Option<ServerBehavior> {
        let by_name = self.by_name.lock().unwrap();
        if let Some(behavior) = by_name.get(&(server, normalize(name))) {
            return Some(behavior.clone());
        }
        self.by_server.lock().unwrap().get(&server).cloned()
    }
}

#[async_trait]
impl DnsTransport for MockNetwork {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let question: Question = serde_json::from_slice(message_bytes)
            .map_err(|e| DomainError::MessageEncoding(e.to_string()))?;
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((server.ip(), normalize(&question.name)));
            calls.len()
        };

        let unreachable = || DomainError::Transport {
            server: server.to_string(),
            reason: "unreachable".to_string(),
        };

        if self.failing_calls.lock().unwrap().contains(&call_number) {
            return Err(unreachable());
        }

        match self.behavior_for(server.ip(), &question.name) {
            Some(ServerBehavior::Reply(reply)) => Ok(encode(&reply)),
            Some(ServerBehavior::Delayed(delay, reply)) => {
                tokio::time::sleep(delay).await;
                Ok(encode(&reply))
            }
            Some(ServerBehavior::Empty) => Ok(encode(&ResponseMessage::empty())),
            Some(ServerBehavior::Garbage) => Ok(b"\x00\x01garbage".to_vec()),
            Some(ServerBehavior::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(unreachable())
            }
            Some(ServerBehavior::Fail) | None => Err(unreachable()),
        }
    }
}

impl MessageCodec for MockNetwork {
    fn encode_query(&self, question: &Question) -> Result<Vec<u8>, DomainError> {
        serde_json::to_vec(question).map_err(|e| DomainError::MessageEncoding(e.to_string()))
    }

    fn decode_response(&self, bytes: &[u8]) -> Result<ResponseMessage, DomainError> {
        serde_json::from_slice(bytes).map_err(|e| DomainError::InvalidDnsResponse(e.to_string()))
    }
}

#[derive(Clone, Default)]
pub struct MockAddressResolver {
    hosts: Arc<Mutex<HashMap<String, IpAddr>>>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockAddressResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(self, hostname: &str, address: &str) -> Self {
        self.hosts
            .lock()
            .unwrap()
            .insert(normalize(hostname), ip(address));
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ServerAddressResolver for MockAddressResolver {
    async fn lookup(&self, hostname: &str) -> Result<IpAddr, DomainError> {
        self.lookups.lock().unwrap().push(normalize(hostname));
        self.hosts
            .lock()
            .unwrap()
            .get(&normalize(hostname))
            .copied()
            .ok_or_else(|| DomainError::AddressResolution {
                server: hostname.to_string(),
                reason: "no such host".to_string(),
            })
    }
}

// ── wiring ────────────────────────────────────────────────────────────────

pub const TEST_TIMEOUT: Duration = Duration::from_millis(50);

pub fn options(mode: FailoverMode) -> WalkerOptions {
    WalkerOptions {
        port: 53,
        timeout: TEST_TIMEOUT,
        mode,
    }
}

pub fn walker(network: &MockNetwork, resolver: &MockAddressResolver) -> ServerListWalker {
    walker_with(network, resolver, options(FailoverMode::Sequential))
}

pub fn walker_with(
    network: &MockNetwork,
    resolver: &MockAddressResolver,
    options: WalkerOptions,
) -> ServerListWalker {
    ServerListWalker::new(
        Arc::new(network.clone()),
        Arc::new(network.clone()),
        Arc::new(resolver.clone()),
        options,
    )
}

pub fn engine(network: &MockNetwork, depth: DelegationDepth) -> IterativeResolver {
    IterativeResolver::new(
        Arc::new(walker(network, &MockAddressResolver::new())),
        ReferralExtractor::new(),
        depth,
    )
}

pub fn chaser(network: &MockNetwork, chase_type: ChaseQueryType) -> CnameChaser {
    CnameChaser::new(
        Arc::new(engine(network, DelegationDepth::Adaptive { max_hops: 16 })),
        chase_type,
    )
}

pub fn use_case(network: &MockNetwork) -> ResolveQueryUseCase {
    ResolveQueryUseCase::new(Arc::new(chaser(network, ChaseQueryType::A)))
}

// ── messages ──────────────────────────────────────────────────────────────

pub fn ip(address: &str) -> IpAddr {
    address.parse().unwrap()
}

pub fn servers(entries: &[&str]) -> Vec<ServerIdentifier> {
    entries
        .iter()
        .map(|entry| ServerIdentifier::parse(entry).unwrap())
        .collect()
}

pub fn record(owner: &str, record_type: RecordType, data: &str) -> ResourceRecord {
    ResourceRecord::new(owner, record_type, DnsClass::IN, 300, data)
}

/// Non-authoritative reply pointing at `nameservers` for `zone`.
pub fn referral(zone: &str, nameservers: &[&str]) -> ResponseMessage {
    ResponseMessage {
        id: 1,
        authority: nameservers
            .iter()
            .map(|ns| record(zone, RecordType::NS, ns))
            .collect(),
        wire_size: 100 + nameservers.len() * 16,
        ..Default::default()
    }
}

pub fn answer(question: &Question, records: Vec<ResourceRecord>) -> ResponseMessage {
    ResponseMessage {
        id: 1,
        authoritative: true,
        questions: vec![question.clone()],
        wire_size: 60 + records.len() * 16,
        answers: records,
        ..Default::default()
    }
}

/// Authoritative reply with an empty answer section.
pub fn no_data(question: &Question) -> ResponseMessage {
    answer(question, Vec::new())
}

fn encode(reply: &ResponseMessage) -> Vec<u8> {
    serde_json::to_vec(reply).unwrap()
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}
