use crate::application::contact_service::ContactService;
use crate::data::contact_repository::ContactRepository;
use crate::domain::error::DomainError;
use crate::infrastructure::mailer::Notifier;
use crate::presentation::dto::{ContactRequest, MessageResponse};
use crate::presentation::utils::request_id;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

pub async fn submit<C, N>(
    req: HttpRequest,
    service: web::Data<ContactService<C, N>>,
    payload: web::Json<ContactRequest>,
) -> Result<HttpResponse, DomainError>
where
    C: ContactRepository + 'static,
    N: Notifier + 'static,
{
    let contact = payload.into_inner().validate()?;
    let stored = service
        .submit(contact.name, contact.email, contact.message, contact.number)
        .await?;

    info!(request_id = %request_id(&req), contact_id = %stored.id, "contact message received");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Message sent successfully!")))
}
