use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::error::Error;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::error::ApiError;
use crate::filters::BookFilters;
use crate::models::{Book, NewBook};
use crate::pagination::{Paginated, PaginationParams};
use crate::repo::BookRepo;

#[derive(Clone)]
struct AppState<R> {
    repo: R,
}

pub fn build_app<E: Error + 'static>(
    repo: impl BookRepo<E> + Send + Sync + Clone + 'static,
) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/books", get(list_books).post(insert_book))
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(AppState { repo })
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CatchPanicLayer::new()),
        )
}

#[derive(serde::Serialize)]
struct HealthStatus {
    status: &'static str,
}

async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

/// Raw query string for GET /books. Pagination values are kept as strings
/// so out-of-range or non-numeric input falls back to defaults instead of
/// failing extraction.
#[derive(serde::Deserialize)]
struct ListQuery {
    title: Option<String>,
    author: Option<String>,
    search: Option<String>,
    page: Option<String>,
    page_size: Option<String>,
}

async fn list_books<E, R>(
    State(state): State<AppState<R>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Paginated<Book>>, ApiError>
where
    E: Error,
    R: BookRepo<E>,
{
    let filters = BookFilters::new(query.title, query.author, query.search);
    let params = PaginationParams::from_raw(query.page.as_deref(), query.page_size.as_deref());

    let books = state.repo.list_books().await.map_err(internal_error)?;

    let matching = if filters.is_empty() {
        books
    } else {
        books.into_iter().filter(|b| filters.matches(b)).collect()
    };

    let page = Paginated::new(matching, params);

    info!(
        "Listing books: {} matched, returning page {} of {}",
        page.total, page.page, page.total_pages
    );

    Ok(Json(page))
}

async fn get_book<E, R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError>
where
    E: Error,
    R: BookRepo<E>,
{
    let id = parse_book_id(id)?;

    let book = state.repo.get_book(id).await.map_err(internal_error)?;

    match book {
        Some(book) => {
            info!("Retrieved book: {:?}", book);
            Ok(Json(book))
        }
        None => {
            info!("No book found with ID: {}", id);
            Err(not_found(id))
        }
    }
}

async fn insert_book<E, R>(
    State(mut state): State<AppState<R>>,
    Json(new_book): Json<NewBook>,
) -> Result<(StatusCode, Json<Book>), ApiError>
where
    E: Error,
    R: BookRepo<E>,
{
    new_book.validate()?;

    let inserted_book = state
        .repo
        .insert_book(new_book)
        .await
        .map_err(internal_error)?;

    info!("Created book: {:?}", inserted_book);

    Ok((StatusCode::CREATED, Json(inserted_book)))
}

async fn update_book<E, R>(
    State(mut state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(new_book): Json<NewBook>,
) -> Result<Json<Book>, ApiError>
where
    E: Error,
    R: BookRepo<E>,
{
    let id = parse_book_id(id)?;
    new_book.validate()?;

    let updated_book = state
        .repo
        .update_book(id, new_book)
        .await
        .map_err(internal_error)?;

    match updated_book {
        Some(book) => {
            info!("Updated book: {:?}", book);
            Ok(Json(book))
        }
        None => {
            info!("Tried to update non-existent book with ID: {}", id);
            Err(not_found(id))
        }
    }
}

async fn delete_book<E, R>(
    State(mut state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    E: Error,
    R: BookRepo<E>,
{
    let id = parse_book_id(id)?;

    let deleted = state.repo.delete_book(id).await.map_err(internal_error)?;

    if deleted {
        info!("Deleted book with ID: {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        info!("Tried to delete non-existent book with ID: {}", id);
        Err(not_found(id))
    }
}

fn not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("No book found with ID: {}", id))
}

fn internal_error<E: Error>(err: E) -> ApiError {
    ApiError::Internal(err.to_string())
}

fn parse_book_id(id: String) -> Result<i32, ApiError> {
    id.parse::<i32>()
        .map_err(|_| ApiError::InvalidInput(format!("Invalid book ID: {}", id)))
}
