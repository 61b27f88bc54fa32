#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, CNAME, NS};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn name(text: &str) -> Name {
    Name::from_str(text).unwrap()
}

/// Empty reply carrying the query's ID and question.
pub fn reply_to(query: &Message) -> Message {
    let mut reply = Message::new(query.id(), MessageType::Response, OpCode::Query);
    for q in query.queries() {
        reply.add_query(q.clone());
    }
    reply
}

pub fn a_record(owner: &str, ip: Ipv4Addr) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(ip)))
}

pub fn ns_record(zone: &str, host: &str) -> Record {
    Record::from_rdata(name(zone), 172800, RData::NS(NS(name(host))))
}

pub fn cname_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
}

/// Referral to `host` for `zone`, with an A glue record when `glue` is given.
pub fn referral(query: &Message, zone: &str, host: &str, glue: Option<Ipv4Addr>) -> Message {
    let mut reply = reply_to(query);
    reply.add_name_server(ns_record(zone, host));
    if let Some(ip) = glue {
        reply.add_additional(a_record(host, ip));
    }
    reply
}

pub fn authoritative_answer(query: &Message, answers: Vec<Record>) -> Message {
    let mut reply = reply_to(query);
    reply.set_authoritative(true);
    for record in answers {
        reply.add_answer(record);
    }
    reply
}

pub fn nxdomain(query: &Message) -> Message {
    let mut reply = reply_to(query);
    reply.set_authoritative(true);
    reply.set_response_code(ResponseCode::NXDomain);
    reply
}

pub fn to_bytes(message: &Message) -> Vec<u8> {
    message.to_vec().unwrap()
}

/// Name of the first question, as presented on the wire (with trailing dot).
pub fn qname(query: &Message) -> String {
    query
        .queries()
        .first()
        .map(|q| q.name().to_utf8())
        .unwrap_or_default()
}
