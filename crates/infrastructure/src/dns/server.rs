use crate::dns::forwarding::{MessageBuilder, RecordTypeMapper};
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use rootward_application::ports::ResolutionOutcome;
use rootward_application::use_cases::HandleDnsQueryUseCase;
use rootward_domain::DnsRequest;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Turns one client datagram into one reply datagram.
///
/// Returns `None` when the datagram should be dropped without a reply:
/// undecodable bytes, a message that is already a response, or a question
/// count other than one.
pub struct DnsPacketHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsPacketHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn handle_packet(&self, packet: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(packet) {
            Ok(message) => message,
            Err(e) => {
                warn!(client = %client, error = %e, "Dropping undecodable datagram");
                return None;
            }
        };

        if request.message_type() != MessageType::Query {
            debug!(client = %client, id = request.id(), "Dropping datagram with QR set");
            return None;
        }

        if request.queries().len() != 1 {
            warn!(
                client = %client,
                questions = request.queries().len(),
                "Dropping query without exactly one question"
            );
            return None;
        }

        let question = &request.queries()[0];
        let domain = question.name().to_utf8();

        info!(
            domain = %domain,
            record_type = ?question.query_type(),
            client = %client,
            "DNS query received"
        );

        if request.op_code() != OpCode::Query {
            warn!(op_code = ?request.op_code(), "Unsupported opcode");
            return Self::encode(&Self::error_response(&request, ResponseCode::NotImp));
        }

        let record_type = RecordTypeMapper::from_hickory(question.query_type());

        let record_class = match RecordTypeMapper::class_from_hickory(question.query_class()) {
            Some(rc) => rc,
            None => {
                warn!(record_class = ?question.query_class(), "Unsupported record class");
                return Self::encode(&Self::error_response(&request, ResponseCode::NotImp));
            }
        };

        let dns_request = DnsRequest::new(request.id(), domain, record_type, client.ip())
            .with_class(record_class);

        let outcome = self.use_case.execute(&dns_request).await;

        Self::encode(&Self::build_response(&request, &outcome))
    }

    /// Reply header: client id, question and RD echoed, QR and RA set.
    fn reply_skeleton(request: &Message) -> Message {
        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(true);
        for question in request.queries() {
            response.add_query(question.clone());
        }
        response
    }

    fn error_response(request: &Message, code: ResponseCode) -> Message {
        debug!(code = ?code, "Sending error response");
        let mut response = Self::reply_skeleton(request);
        response.set_response_code(code);
        response
    }

    pub fn build_response(request: &Message, outcome: &ResolutionOutcome) -> Message {
        match outcome {
            ResolutionOutcome::Answer(resolution) => {
                let mut response = Self::reply_skeleton(request);
                response
                    .set_authoritative(resolution.authoritative)
                    .set_response_code(resolution.response_code);
                for record in &resolution.answers {
                    response.add_answer(record.clone());
                }
                for record in &resolution.authorities {
                    response.add_name_server(record.clone());
                }
                response
            }
            ResolutionOutcome::NameError => Self::error_response(request, ResponseCode::NXDomain),
            ResolutionOutcome::ServerFailure(_) => {
                Self::error_response(request, ResponseCode::ServFail)
            }
        }
    }

    fn encode(response: &Message) -> Option<Vec<u8>> {
        match MessageBuilder::serialize_message(response) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(id = response.id(), error = %e, "Failed to encode reply");
                None
            }
        }
    }
}
