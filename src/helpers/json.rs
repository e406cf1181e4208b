use serde::Serialize;

/// Error body for requests rejected before they reach a handler.
#[derive(Serialize)]
pub(crate) struct JsonResponse {
    status: String,
    message: String,
    code: u32,
}

impl JsonResponse {
    pub(crate) fn build() -> JsonResponseBuilder {
        JsonResponseBuilder::default()
    }
}

#[derive(Default)]
pub(crate) struct JsonResponseBuilder {
    message: String,
}

impl JsonResponseBuilder {
    pub(crate) fn set_msg(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub(crate) fn unauthorized(self) -> String {
        let response = JsonResponse {
            status: "Error".to_string(),
            message: self.message,
            code: 401,
        };

        serde_json::to_string(&response).unwrap_or_default()
    }
}
