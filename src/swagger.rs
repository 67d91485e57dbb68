use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::ping::ping_handler,
        crate::handlers::vote::vote_action_handler,
        crate::handlers::admin::admin_action_handler,
    ),
    components(
        schemas(
            crate::handlers::vote::VoteActionReq,
            crate::handlers::admin::AdminActionReq,
            crate::models::Category,
            crate::models::GenericResponse,
            crate::models::ErrorResponse,
        )
    ),
    tags(
        (name = "Voting API", description = "Phone verified voting operations"),
        (name = "Admin API", description = "Admin bootstrap operations"),
        (name = "Debugging API", description = "Debugging operations")
    )
)]
pub struct ApiDoc;
