use crate::models::{ContactMessage, ReservationRequest};
use crate::types::*;
use leptos::prelude::*;

#[cfg(feature = "ssr")]
fn site_config() -> crate::common::SiteConfig {
    use_context::<crate::common::SiteConfig>().unwrap_or_default()
}

/// Reservation server function - re-validates against the live clock, then
/// simulates the booking round trip. Nothing is stored or sent.
#[server(SubmitReservation, "/api")]
pub async fn submit_reservation(
    request: ReservationRequest,
) -> Result<ReservationConfirmation, ServerFnError> {
    use crate::common::ReservationError;
    use crate::models::WeeklySchedule;
    use crate::services::SimulatedSubmission;

    let config = site_config();
    let now = config.clock().now();

    if let Err(errors) = request.check(now, &WeeklySchedule::default()) {
        let err = ReservationError::Invalid(errors);
        log::warn!("Rejected reservation for {}: {}", request.email, err);
        return Err(ServerFnError::new(err));
    }

    let accepted = SimulatedSubmission::new(config.submit_delay)
        .run(request)
        .await;

    log::info!(
        "Reservation accepted: {} guest(s) on {} at {}",
        accepted.guests,
        accepted.date,
        accepted.time.value()
    );

    Ok(accepted.into())
}

/// Contact form server function
#[server(SubmitContact, "/api")]
pub async fn submit_contact(message: ContactMessage) -> Result<ContactReceipt, ServerFnError> {
    use crate::common::ContactError;
    use crate::services::SimulatedSubmission;

    let config = site_config();

    if let Err(errors) = message.check() {
        let err = ContactError::Invalid(errors);
        log::warn!("Rejected contact message: {}", err);
        return Err(ServerFnError::new(err));
    }

    let accepted = SimulatedSubmission::new(config.submit_delay)
        .run(message)
        .await;

    log::info!("Contact message received (subject: {:?})", accepted.subject);

    Ok(ContactReceipt {
        name: accepted.name,
        email: accepted.email,
        reset_after_ms: config.reset_after_ms(),
    })
}

/// Newsletter signup server function
#[server(SubscribeNewsletter, "/api")]
pub async fn subscribe_newsletter(email: String) -> Result<NewsletterReceipt, ServerFnError> {
    use crate::common::ContactError;
    use crate::models::is_valid_email;
    use crate::services::SimulatedSubmission;

    let config = site_config();

    if !is_valid_email(&email) {
        log::warn!("Rejected newsletter signup");
        return Err(ServerFnError::new(ContactError::InvalidEmail));
    }

    let email = SimulatedSubmission::new(config.submit_delay)
        .run(email)
        .await;

    log::info!("Newsletter signup accepted");

    Ok(NewsletterReceipt {
        email,
        reset_after_ms: config.reset_after_ms(),
    })
}
