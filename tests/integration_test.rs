use std::net::SocketAddr;

use book_api::start_server;

// Note: not reusing the application's models is a deliberate choice
#[derive(Debug, PartialEq, Eq, Clone, serde::Deserialize)]
struct Book {
    id: i32,
    title: String,
    author: String,
}

#[derive(Debug, serde::Serialize)]
struct BookInput {
    title: String,
    author: String,
}

#[derive(Debug, serde::Deserialize)]
struct BookPage {
    data: Vec<Book>,
    page: usize,
    page_size: usize,
    total: usize,
    total_pages: usize,
}

struct BookClient {
    client: reqwest::Client,
    base_url: String,
}

impl BookClient {
    fn new(addr: SocketAddr) -> BookClient {
        BookClient {
            client: reqwest::Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    async fn list_books_raw(&self, query: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .get(format!("{}/books{query}", self.base_url))
            .send()
            .await
    }

    async fn list_books(&self, query: &str) -> Result<BookPage, reqwest::Error> {
        self.list_books_raw(query).await?.json::<BookPage>().await
    }

    async fn get_book_raw(&self, id: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .get(format!("{}/books/{id}", self.base_url))
            .send()
            .await
    }

    async fn get_book(&self, id: i32) -> Result<Book, reqwest::Error> {
        self.get_book_raw(&id.to_string()).await?.json::<Book>().await
    }

    async fn insert_book_raw(
        &self,
        title: &str,
        author: &str,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let input = BookInput {
            title: title.to_string(),
            author: author.to_string(),
        };
        self.client
            .post(format!("{}/books", self.base_url))
            .json(&input)
            .send()
            .await
    }

    async fn insert_book(&self, title: &str, author: &str) -> Result<Book, reqwest::Error> {
        let response = self.insert_book_raw(title, author).await?;
        assert_eq!(201, response.status().as_u16());
        response.json::<Book>().await
    }

    async fn update_book_raw(
        &self,
        id: i32,
        title: &str,
        author: &str,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let input = BookInput {
            title: title.to_string(),
            author: author.to_string(),
        };
        self.client
            .put(format!("{}/books/{id}", self.base_url))
            .json(&input)
            .send()
            .await
    }

    async fn delete_book(&self, id: i32) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .delete(format!("{}/books/{id}", self.base_url))
            .send()
            .await
    }

    async fn health(&self) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
    }
}

// The store never assigns id 0, so it is reliably absent.
const MISSING_ID: i32 = 0;

async fn run_tests(client: BookClient) -> Result<(), reqwest::Error> {
    // Health endpoint is up and every response carries a request id
    let health = client.health().await?;
    assert_eq!(200, health.status().as_u16());
    assert!(health.headers().contains_key("x-request-id"));
    let body = health.json::<serde_json::Value>().await?;
    assert_eq!("ok", body["status"]);

    // Start with an empty book collection
    let page = client.list_books("").await?;
    assert!(page.data.is_empty());
    assert_eq!(1, page.page);
    assert_eq!(10, page.page_size);
    assert_eq!(0, page.total);
    assert_eq!(0, page.total_pages);

    // Add a couple of books
    let go_book = client.insert_book("Go", "D").await?;
    let rust_book = client.insert_book("Rust", "K").await?;
    assert_ne!(go_book.id, rust_book.id);

    let page = client.list_books("").await?;
    assert_eq!(2, page.total);
    assert_eq!(vec![go_book.clone(), rust_book.clone()], page.data);

    // Filtering: search matches title or author, case-insensitively
    let page = client.list_books("?search=go").await?;
    assert_eq!(1, page.total);
    assert_eq!(vec![go_book.clone()], page.data);

    let page = client.list_books("?title=RUST").await?;
    assert_eq!(vec![rust_book.clone()], page.data);

    let page = client.list_books("?author=d").await?;
    assert_eq!(vec![go_book.clone()], page.data);

    // Filters are AND-combined
    let page = client.list_books("?search=go&author=k").await?;
    assert_eq!(0, page.total);
    assert!(page.data.is_empty());

    // Validation failures are client errors
    let response = client.insert_book_raw("", "Somebody").await?;
    assert_eq!(400, response.status().as_u16());
    let body = response.json::<serde_json::Value>().await?;
    assert_eq!("book title cannot be empty", body["error"]);

    let response = client.insert_book_raw("Nameless", "").await?;
    assert_eq!(400, response.status().as_u16());

    // Retrieve a book, a missing book, and a malformed id
    let retrieved = client.get_book(go_book.id).await?;
    assert_eq!(go_book, retrieved);

    let response = client.get_book_raw(&MISSING_ID.to_string()).await?;
    assert_eq!(404, response.status().as_u16());

    let response = client.get_book_raw("not-a-number").await?;
    assert_eq!(400, response.status().as_u16());

    // Update a book: title/author change, id is preserved
    let response = client
        .update_book_raw(rust_book.id, "Rust in Action", "Tim McNamara")
        .await?;
    assert_eq!(200, response.status().as_u16());
    let updated = response.json::<Book>().await?;
    assert_eq!(rust_book.id, updated.id);
    assert_eq!("Rust in Action", updated.title);
    assert_eq!(updated, client.get_book(rust_book.id).await?);

    // Update a non-existent book -> 404
    let response = client.update_book_raw(MISSING_ID, "foo", "bar").await?;
    assert_eq!(404, response.status().as_u16());

    // Delete a book
    let response = client.delete_book(go_book.id).await?;
    assert_eq!(204, response.status().as_u16());

    let response = client.get_book_raw(&go_book.id.to_string()).await?;
    assert_eq!(404, response.status().as_u16());

    let page = client.list_books("").await?;
    assert_eq!(1, page.total);
    assert_eq!(vec![updated], page.data);

    // Delete a non-existent book -> 404
    let response = client.delete_book(MISSING_ID).await?;
    assert_eq!(404, response.status().as_u16());

    // Clear the collection before the pagination scenario
    let response = client.delete_book(rust_book.id).await?;
    assert_eq!(204, response.status().as_u16());

    // 15 books across two pages of 10
    let mut inserted_ids = Vec::new();
    for i in 1..=15 {
        let book = client
            .insert_book(&format!("Book {i:02}"), "Prolific Author")
            .await?;
        inserted_ids.push(book.id);
    }

    let second = client.list_books("?page=2&page_size=10").await?;
    assert_eq!(5, second.data.len());
    assert_eq!(2, second.page);
    assert_eq!(15, second.total);
    assert_eq!(2, second.total_pages);

    // Concatenating the pages reconstructs the full collection in order
    let first = client.list_books("?page=1&page_size=10").await?;
    let mut paged_ids: Vec<i32> = first.data.iter().map(|b| b.id).collect();
    paged_ids.extend(second.data.iter().map(|b| b.id));
    assert_eq!(inserted_ids, paged_ids);

    // A page past the end is empty, not an error
    let past = client.list_books("?page=3&page_size=10").await?;
    assert!(past.data.is_empty());
    assert_eq!(15, past.total);

    // Out-of-range and junk pagination values fall back to defaults
    let page = client.list_books("?page_size=101").await?;
    assert_eq!(10, page.page_size);
    let page = client.list_books("?page=zero").await?;
    assert_eq!(1, page.page);

    Ok(())
}

#[tokio::test]
async fn book_api_integration_test() {
    // Run the HTTP server on a free port, so we can run tests against it
    let (addr, server) = start_server("127.0.0.1:0").await;
    tokio::spawn(async move {
        server.await.unwrap();
    });

    let client = BookClient::new(addr);

    run_tests(client).await.unwrap();
}
