use futures::future::{self, FutureExt, LocalBoxFuture};

use log::*;

use phonebook_commons::ctrl::Confirmation;

/// Confirmation through the blocking `window.confirm` dialog
pub struct WindowConfirmation;

impl Confirmation for WindowConfirmation {
    fn confirm(&self, message: &str) -> LocalBoxFuture<'static, bool> {
        let answer = web_sys::window().map(|window| window.confirm_with_message(message));

        future::ready(accepted(answer)).boxed_local()
    }
}

/// A missing window or a failing dialog counts as declined
fn accepted<E>(answer: Option<Result<bool, E>>) -> bool {
    match answer {
        Some(Ok(accepted)) => accepted,
        Some(Err(_)) => {
            warn!("Confirmation dialog failed");
            false
        }
        None => {
            warn!("No window available for confirmation");
            false
        }
    }
}
