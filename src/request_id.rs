use http::{HeaderName, Request};
use uuid::Uuid;

use tower_http::request_id::{MakeRequestId, RequestId};

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");
pub const UNKNOWN_REQUEST_ID: &str = "unknown";

#[derive(Clone, Default)]
pub struct UuidRequestId {}

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _: &Request<B>) -> Option<RequestId> {
        let request_id = Uuid::new_v4().to_string().parse().ok()?;

        Some(RequestId::new(request_id))
    }
}
