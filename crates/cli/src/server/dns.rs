use rootward_infrastructure::dns::DnsPacketHandler;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

/// Plain DNS over UDP, no EDNS.
const MAX_DATAGRAM_SIZE: usize = 512;

pub async fn start_dns_server(
    bind_addr: String,
    handler: Arc<DnsPacketHandler>,
) -> anyhow::Result<()> {
    let socket = Arc::new(UdpSocket::bind(&bind_addr).await?);

    info!(bind_address = %socket.local_addr()?, "DNS server listening on UDP");

    serve_udp(socket, handler).await;
    Ok(())
}

/// Read datagrams forever, handling each one on its own task.
pub async fn serve_udp(socket: Arc<UdpSocket>, handler: Arc<DnsPacketHandler>) {
    let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                warn!(error = %e, "UDP recv error");
                continue;
            }
        };

        let packet: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        let handler = Arc::clone(&handler);
        let socket = Arc::clone(&socket);

        tokio::spawn(async move {
            let Some(reply) = handler.handle_packet(&packet, from).await else {
                return;
            };

            match socket.send_to(&reply, from).await {
                Ok(sent) => debug!(client = %from, bytes = sent, "Reply sent"),
                Err(e) => warn!(client = %from, error = %e, "Failed to send reply"),
            }
        });
    }
}
