use failure::Fail;

#[derive(Debug, Fail)]
pub enum ControllerError {
    #[fail(display = "Unknown record: {}", message)]
    UnknownRecord { message: String },
}
