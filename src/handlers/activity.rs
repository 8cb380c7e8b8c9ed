use actix_web::{web, HttpResponse};
use log::info;
use serde::Deserialize;
use validator::Validate;
use uuid::Uuid;
use crate::db::ActivityStore;
use crate::models::activity::NewActivity;
use crate::errors::AppError;
use crate::utils::validation::{validate_payload, DateInput};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityRequest {
    #[validate(required(message = "Activity name is required"))]
    #[validate(length(min = 1, message = "Activity name cannot be empty"))]
    activity_name: Option<String>,

    #[validate(required(message = "Date is required"))]
    date: Option<DateInput>,
}

// Any status text is accepted; a missing one is stored as ""
#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    status: Option<String>,
}

// A malformed id fails like any other storage lookup would
fn parse_activity_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|err| AppError::InternalServerError(err.to_string()))
}

// GET /
pub async fn get_activities(
    store: web::Data<dyn ActivityStore>,
) -> Result<HttpResponse, AppError> {
    let activities = store.list().await?;
    Ok(HttpResponse::Ok().json(activities))
}

// POST /activities
pub async fn create_activity(
    store: web::Data<dyn ActivityStore>,
    payload: web::Json<CreateActivityRequest>,
) -> Result<HttpResponse, AppError> {
    // Validate payload
    validate_payload(&*payload)?;
    let CreateActivityRequest { activity_name, date } = payload.into_inner();

    // Parse date
    let date = date
        .as_ref()
        .and_then(DateInput::to_utc)
        .ok_or_else(|| AppError::BadRequest("Invalid date format".to_string()))?;

    // Insert activity into database
    let activity = store
        .create(NewActivity { activity_name: activity_name.unwrap_or_default(), date })
        .await?;
    info!("Created activity {}", activity.id);

    Ok(HttpResponse::Created().json(activity))
}

// PUT /:id
pub async fn update_activity_status(
    store: web::Data<dyn ActivityStore>,
    id: web::Path<String>,
    payload: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_activity_id(&id)?;
    let status = payload.into_inner().status.unwrap_or_default();

    // Update status in database
    let activity = store
        .update_status(id, &status)
        .await?
        .ok_or_else(AppError::activity_not_found)?;

    Ok(HttpResponse::Ok().json(activity))
}

// DELETE /:id
pub async fn delete_activity(
    store: web::Data<dyn ActivityStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_activity_id(&id)?;

    // Delete activity from database
    if !store.delete(id).await? {
        return Err(AppError::activity_not_found());
    }
    info!("Deleted activity {}", id);

    // Return response
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Activity deleted" })))
}
