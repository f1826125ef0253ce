use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct AttendanceInputDoc {
    pub event_id: Option<i32>,
    pub attendee_id: Option<i32>,
    pub status: Option<String>,
}

#[derive(ToSchema)]
pub struct RegisterInputDoc {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country_id: Option<String>,
}

#[derive(ToSchema)]
pub struct StatsDoc {
    pub attendee_count: u64,
    pub event_count: u64,
    pub accommodation_count: u64,
}

// Coverage is partial on purpose: the CRUD triples share one shape and the
// most interesting contracts (attendance, registration, search) are spelled
// out.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::admin::list_events,
        crate::routes::admin::create_event,
        crate::routes::admin::update_event,
        crate::routes::admin::delete_event,
        crate::routes::admin::list_attendance,
        crate::routes::admin::create_attendance,
        crate::routes::admin::stats,
        crate::routes::public::search_attendees,
        crate::routes::public::rsvp,
        crate::routes::public::register,
    ),
    components(
        schemas(
            HealthResponse,
            AttendanceInputDoc,
            RegisterInputDoc,
            StatsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "admin"),
        (name = "public")
    )
)]
pub struct ApiDoc;
