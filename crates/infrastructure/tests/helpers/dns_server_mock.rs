#![allow(dead_code)]

use super::builders::to_bytes;
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// Builds the reply for a decoded query; `None` means stay silent.
pub type Handler = Arc<dyn Fn(&Message) -> Option<Message> + Send + Sync>;

pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&Message) -> Option<Message> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// In-process DNS server on a loopback address. Several servers can share
/// one port on different 127.0.0.x addresses, the way real nameservers all
/// listen on 53.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// UDP server. Pass port 0 to let the OS pick one.
    pub async fn start(addr: SocketAddr, handler: Handler) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(addr).await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let Ok(query) = Message::from_vec(&buf[..len]) else {
                                continue;
                            };
                            if let Some(reply) = handler(&query) {
                                let _ = socket.send_to(&to_bytes(&reply), peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// TCP server speaking length-prefixed DNS, one query per connection.
    pub async fn start_tcp(addr: SocketAddr, handler: Handler) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    accepted = listener.accept() => {
                        let Ok((mut stream, _)) = accepted else {
                            continue;
                        };
                        let handler = handler.clone();
                        tokio::spawn(async move {
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                return;
                            }
                            let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                            if stream.read_exact(&mut query).await.is_err() {
                                return;
                            }
                            let Ok(query) = Message::from_vec(&query) else {
                                return;
                            };
                            if let Some(reply) = handler(&query) {
                                let bytes = to_bytes(&reply);
                                let _ = stream.write_all(&(bytes.len() as u16).to_be_bytes()).await;
                                let _ = stream.write_all(&bytes).await;
                            }
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
