use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    pub uptime: f64,
    #[schema(example = "2024-01-01T00:00:00.000Z")]
    pub timestamp: String,
}

#[derive(ToSchema)]
pub struct MessageDoc {
    #[schema(example = "User not found")]
    pub message: String,
}

#[derive(ToSchema)]
pub struct UserDoc { pub id: u64, pub name: String, pub email: String, pub age: u32 }

#[derive(ToSchema)]
pub struct CreateUserRequestDoc {
    #[schema(example = "Dave")]
    pub name: String,
    #[schema(example = "dave@x.com")]
    pub email: String,
    #[schema(example = 22)]
    pub age: u32,
}

#[derive(ToSchema)]
pub struct UserCreatedDoc {
    #[schema(example = "User created successfully")]
    pub message: String,
    pub user: UserDoc,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::root,
        crate::routes::health::health,
        crate::routes::users::list_users,
        crate::routes::users::get_user,
        crate::routes::users::create_user,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            UserDoc,
            CreateUserRequestDoc,
            UserCreatedDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users")
    )
)]
pub struct ApiDoc;
