//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use bulletin_core::domain::{NewPost, Post, PostChanges};
use bulletin_shared::ApiResponse;
use bulletin_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state.posts.create(NewPost { title: req.title }).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(to_response(post))))
}

/// GET /api/posts
pub async fn find_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let posts: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id}
pub async fn find_one(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = state.posts.find_one(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// PATCH /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .update(path.into_inner(), PostChanges { title: req.title })
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// DELETE /api/posts/{id}
pub async fn remove(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = state.posts.remove(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        to_response(post),
        "Post deleted",
    )))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};

    use bulletin_core::PostService;
    use bulletin_infra::database::InMemoryPostRepository;
    use bulletin_shared::ApiResponse;
    use bulletin_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn test_state() -> AppState {
        AppState {
            posts: PostService::new(Arc::new(InMemoryPostRepository::new())),
            db: None,
        }
    }

    #[actix_web::test]
    async fn create_then_fetch_roundtrip() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(CreatePostRequest {
                title: "Test Post".to_owned(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: ApiResponse<PostResponse> = test::read_body_json(resp).await;
        let created = body.data.unwrap();
        assert_eq!(created.title, "Test Post");

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: ApiResponse<PostResponse> = test::read_body_json(resp).await;
        assert_eq!(body.data.unwrap().id, created.id);
    }

    #[actix_web::test]
    async fn update_and_delete_roundtrip() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(CreatePostRequest {
                title: "Test Post".to_owned(),
            })
            .to_request();
        let body: ApiResponse<PostResponse> =
            test::read_body_json(test::call_service(&app, req).await).await;
        let created = body.data.unwrap();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/posts/{}", created.id))
            .set_json(UpdatePostRequest {
                title: Some("Updated Post".to_owned()),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: ApiResponse<PostResponse> = test::read_body_json(resp).await;
        assert_eq!(body.data.unwrap().title, "Updated Post");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn missing_post_renders_404_problem() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/posts/999999")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["title"], "Not Found");
        assert_eq!(body["detail"], "Post with ID 999999 not found");
    }
}
