use proxy_handler_sdk::{DiagnosticSink, HandlerError, Request, Response};

/// Echoes the request body back with a constant 200 status.
///
/// The response body mirrors the request body field exactly: an absent body
/// stays absent (`null` on the wire), an empty body stays empty, and base64
/// bodies pass through undecoded. No headers are set, so the gateway applies
/// its defaults.
pub struct EchoHandler<S> {
    sink: S,
}

impl<S: DiagnosticSink> EchoHandler<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Handle one invocation: emit the request path to the diagnostic sink,
    /// then return the body unchanged.
    ///
    /// Always succeeds. The `Result` is kept so the gateway contract stays
    /// two-outcome, but no input makes this handler produce an error.
    pub fn handle(&self, req: Request) -> Result<Response, HandlerError> {
        self.sink.emit(&req.path);

        Ok(Response {
            body: req.body,
            ..Response::new(200)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CapturingSink {
        messages: Mutex<Vec<String>>,
    }

    impl DiagnosticSink for CapturingSink {
        fn emit(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    fn request(path: &str, body: Option<&str>) -> Request {
        Request {
            path: path.to_string(),
            body: body.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn echoes_body_with_200() {
        let handler = EchoHandler::new(CapturingSink::default());

        let response = handler.handle(request("/hello", Some("world"))).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body.as_deref(), Some("world"));
    }

    #[test]
    fn echoes_empty_body() {
        let handler = EchoHandler::new(CapturingSink::default());

        let response = handler.handle(request("/", Some(""))).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body.as_deref(), Some(""));
    }

    #[test]
    fn echoes_json_body_verbatim() {
        let handler = EchoHandler::new(CapturingSink::default());

        let response = handler
            .handle(request("/a/b/c", Some(r#"{"k":1}"#)))
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body.as_deref(), Some(r#"{"k":1}"#));
    }

    #[test]
    fn echoes_missing_body_as_null() {
        let handler = EchoHandler::new(CapturingSink::default());

        let response = handler.handle(request("/hello", None)).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, None);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["body"], serde_json::Value::Null);
    }

    #[test]
    fn never_decodes_base64_bodies() {
        let handler = EchoHandler::new(CapturingSink::default());

        let req = Request {
            body: Some("aGVsbG8=".to_string()),
            is_base64_encoded: true,
            ..Default::default()
        };
        let response = handler.handle(req).unwrap();
        assert_eq!(response.body.as_deref(), Some("aGVsbG8="));
    }

    #[test]
    fn emits_the_path_exactly_once() {
        let sink = CapturingSink::default();
        let handler = EchoHandler::new(&sink);

        handler.handle(request("/hello", Some("world"))).unwrap();
        assert_eq!(*sink.messages.lock().unwrap(), vec!["/hello"]);
    }

    #[test]
    fn accepts_empty_and_unusual_paths() {
        let sink = CapturingSink::default();
        let handler = EchoHandler::new(&sink);

        for path in ["", "/", "/a b/%2F?x=1", "/☃"] {
            let response = handler.handle(request(path, None)).unwrap();
            assert_eq!(response.status, 200);
        }
        assert_eq!(sink.messages.lock().unwrap().len(), 4);
    }

    #[test]
    fn sets_no_headers() {
        let handler = EchoHandler::new(CapturingSink::default());

        let response = handler.handle(request("/hello", Some("world"))).unwrap();
        assert!(response.headers.is_empty());
    }

    #[test]
    fn identical_requests_yield_identical_responses() {
        let handler = EchoHandler::new(CapturingSink::default());

        let first = handler.handle(request("/hello", Some("world"))).unwrap();
        let second = handler.handle(request("/hello", Some("world"))).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}
