pub mod codec;
pub mod lookup;
pub mod transport;

pub use codec::HickoryMessageCodec;
pub use lookup::SystemAddressResolver;
pub use transport::NetworkTransport;
