use rootward_application::use_cases::HandleDnsQueryUseCase;
use rootward_domain::{Config, RootHints};
use rootward_infrastructure::dns::{
    DnsPacketHandler, IterativeResolver, UdpTransport, UpstreamTransport,
};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
    pub packet_handler: Arc<DnsPacketHandler>,
}

impl DnsServices {
    pub fn new(config: &Config, root_hints: RootHints) -> Self {
        info!(
            roots = root_hints.len(),
            upstream_port = config.resolver.upstream_port,
            "Initializing DNS services"
        );

        let transport: Arc<dyn UpstreamTransport> =
            Arc::new(UdpTransport::with_port(config.resolver.upstream_port));

        let resolver = Arc::new(IterativeResolver::new(
            transport,
            root_hints.clone(),
            config.resolver.clone(),
        ));

        let handler_use_case = Arc::new(HandleDnsQueryUseCase::new(resolver, root_hints));
        let packet_handler = Arc::new(DnsPacketHandler::new(handler_use_case.clone()));

        Self {
            handler_use_case,
            packet_handler,
        }
    }
}
