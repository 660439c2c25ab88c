//! Dashboard summary API handler.
//!
//! ```text
//! GET /api/v1/dashboard
//! ```

use actix_web::{get, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::presentation::DashboardSummary;

/// Counts and the average GPA across every student.
pub(crate) async fn summarise(state: &HttpState) -> ApiResult<DashboardSummary> {
    let students = state.students.list().await?;
    let courses = state.courses.list().await?;
    Ok(DashboardSummary::from_records(&students, courses.len()))
}

/// Headline numbers for the dashboard.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["dashboard"],
    operation_id = "getDashboard",
    security([])
)]
#[get("/dashboard")]
pub async fn get_dashboard(state: web::Data<HttpState>) -> ApiResult<web::Json<DashboardSummary>> {
    summarise(&state).await.map(web::Json)
}
