mod dns_transport;
mod message_codec;
mod server_address_resolver;

pub use dns_transport::DnsTransport;
pub use message_codec::MessageCodec;
pub use server_address_resolver::ServerAddressResolver;
