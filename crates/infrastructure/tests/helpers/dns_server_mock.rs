#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock answers each query it receives.
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// Authoritative `A` answer, question echoed, id echoed.
    Answer(Ipv4Addr),
    /// Valid-looking answer with the question section removed.
    DropQuestion,
    /// Valid answer under a different transaction id.
    WrongId,
    /// Bytes that do not decode as a DNS message.
    Garbage,
    /// Never reply.
    Silent,
}

/// Localhost UDP DNS server for transport tests.
pub struct MockDnsServer {
    addr: SocketAddr,
    received_ids: Arc<Mutex<Vec<u16>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let received_ids = Arc::new(Mutex::new(Vec::new()));
        let ids = Arc::clone(&received_ids);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

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
                            ids.lock().unwrap().push(query.id());
                            if let Some(response) = Self::build_mock_response(&query, behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received_ids,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn received_ids(&self) -> Vec<u16> {
        self.received_ids.lock().unwrap().clone()
    }

    fn build_mock_response(query: &Message, behavior: MockBehavior) -> Option<Vec<u8>> {
        let mut response = Message::new();
        response
            .set_id(query.id())
            .set_message_type(MessageType::Response)
            .set_authoritative(true);

        match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::Garbage => return Some(vec![0xde, 0xad, 0xbe]),
            MockBehavior::Answer(addr) => {
                for question in query.queries() {
                    response.add_query(question.clone());
                    response.add_answer(Record::from_rdata(
                        question.name().clone(),
                        60,
                        RData::A(A(addr)),
                    ));
                }
            }
            MockBehavior::DropQuestion => {}
            MockBehavior::WrongId => {
                response.set_id(query.id().wrapping_add(1));
                for question in query.queries() {
                    response.add_query(question.clone());
                }
            }
        }

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        response.emit(&mut encoder).ok()?;
        Some(buf)
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
