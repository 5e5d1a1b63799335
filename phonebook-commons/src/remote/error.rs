use failure::Fail;

#[derive(Debug, Fail)]
pub enum RemoteError {
    #[fail(display = "Request failed: {}", message)]
    Network { message: String },
    #[fail(display = "Unexpected status {}: {}", status, message)]
    Status { status: u16, message: String },
    #[fail(display = "Malformed payload: {}", message)]
    Payload {
        message: String,
        #[fail(cause)]
        cause: serde_json::Error,
    },
}
