use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::invoices::models::{
    CreateDraftRequest, DraftResponse, UpdateDraftRequest, UpdateLineItemRequest,
};
use crate::modules::invoices::services::DraftStore;

/// Open a draft session
/// POST /invoices/drafts
///
/// The body is optional. A present body must be JSON and is never replaced
/// by the default jurisdiction when it fails to parse.
pub async fn create_draft(
    req: HttpRequest,
    store: web::Data<DraftStore>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    if !body.is_empty() && !is_json(&req) {
        return Err(AppError::validation(format!(
            "Invalid request body: expected application/json, got '{}'",
            req.content_type()
        )));
    }

    let request = CreateDraftRequest::from_body(&body)?;
    let (id, draft) = store.create(request.jurisdiction()?).await?;

    Ok(HttpResponse::Created().json(DraftResponse::new(id, draft)?))
}

/// Get a draft with freshly computed totals
/// GET /invoices/drafts/{id}
pub async fn get_draft(
    store: web::Data<DraftStore>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let draft = store.get(id).await?;

    Ok(HttpResponse::Ok().json(DraftResponse::new(id, draft)?))
}

/// Set base price, package fee, discount or jurisdiction
/// PATCH /invoices/drafts/{id}
pub async fn update_draft(
    store: web::Data<DraftStore>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateDraftRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let draft = store.update(id, |draft| request.apply(draft)).await?;

    Ok(HttpResponse::Ok().json(DraftResponse::new(id, draft)?))
}

/// Discard a draft
/// DELETE /invoices/drafts/{id}
pub async fn discard_draft(
    store: web::Data<DraftStore>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    store.discard(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Append a blank line item
/// POST /invoices/drafts/{id}/line-items
pub async fn add_line_item(
    store: web::Data<DraftStore>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let draft = store
        .update(id, |draft| draft.add_line_item().map(|_| ()))
        .await?;

    Ok(HttpResponse::Created().json(DraftResponse::new(id, draft)?))
}

/// Change fields of one line item
/// PATCH /invoices/drafts/{id}/line-items/{index}
pub async fn update_line_item(
    store: web::Data<DraftStore>,
    path: web::Path<(Uuid, usize)>,
    request: web::Json<UpdateLineItemRequest>,
) -> Result<HttpResponse, AppError> {
    let (id, index) = path.into_inner();
    let fields = request.into_inner().into_fields();

    let draft = store
        .update(id, |draft| {
            fields
                .into_iter()
                .try_for_each(|field| draft.update_line_item(index, field))
        })
        .await?;

    Ok(HttpResponse::Ok().json(DraftResponse::new(id, draft)?))
}

/// Remove one line item
/// DELETE /invoices/drafts/{id}/line-items/{index}
pub async fn remove_line_item(
    store: web::Data<DraftStore>,
    path: web::Path<(Uuid, usize)>,
) -> Result<HttpResponse, AppError> {
    let (id, index) = path.into_inner();
    let draft = store
        .update(id, |draft| draft.remove_line_item(index).map(|_| ()))
        .await?;

    Ok(HttpResponse::Ok().json(DraftResponse::new(id, draft)?))
}

fn is_json(req: &HttpRequest) -> bool {
    let content_type = req.content_type();
    content_type == "application/json" || content_type.ends_with("+json")
}
