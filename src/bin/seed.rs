//! Seeds a running server with sample books: `cargo run --bin seed`.
//! Target defaults to http://localhost:8080, override with API_URL.

use std::env;

use book_api::{Book, NewBook};

fn sample_books() -> Vec<NewBook> {
    [
        ("The Go Programming Language", "Alan A. A. Donovan and Brian W. Kernighan"),
        ("Clean Code", "Robert C. Martin"),
        ("Design Patterns", "Erich Gamma, Richard Helm, Ralph Johnson, John Vlissides"),
        ("The Pragmatic Programmer", "Andrew Hunt and David Thomas"),
        ("Introduction to Algorithms", "Thomas H. Cormen"),
        ("Code Complete", "Steve McConnell"),
        ("Refactoring", "Martin Fowler"),
        ("The Clean Coder", "Robert C. Martin"),
        ("Head First Design Patterns", "Eric Freeman and Elisabeth Robson"),
        ("You Don't Know JS", "Kyle Simpson"),
        ("Eloquent JavaScript", "Marijn Haverbeke"),
        ("JavaScript: The Good Parts", "Douglas Crockford"),
        ("Python Crash Course", "Eric Matthes"),
        ("Effective Java", "Joshua Bloch"),
        ("Clean Architecture", "Robert C. Martin"),
        ("Domain-Driven Design", "Eric Evans"),
        ("Microservices Patterns", "Chris Richardson"),
        ("Building Microservices", "Sam Newman"),
        ("Site Reliability Engineering", "Betsy Beyer, Chris Jones, Jennifer Petoff, Niall Richard Murphy"),
        ("The DevOps Handbook", "Gene Kim, Jez Humble, Patrick Debois, John Willis"),
    ]
    .into_iter()
    .map(|(title, author)| NewBook {
        title: title.to_string(),
        author: author.to_string(),
    })
    .collect()
}

#[tokio::main]
async fn main() {
    let base_url = env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let books = sample_books();

    println!("Seeding {} books to {}/books", books.len(), base_url);

    let client = reqwest::Client::new();
    let mut created = 0;

    for book in &books {
        let response = match client
            .post(format!("{base_url}/books"))
            .json(book)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                eprintln!("Failed to create {:?}: {}", book.title, err);
                continue;
            }
        };

        if response.status() != reqwest::StatusCode::CREATED {
            eprintln!("Failed to create {:?}: status {}", book.title, response.status());
            continue;
        }

        match response.json::<Book>().await {
            Ok(created_book) => {
                println!("Created: {} (ID: {})", created_book.title, created_book.id);
                created += 1;
            }
            Err(err) => eprintln!("Failed to decode response for {:?}: {}", book.title, err),
        }
    }

    println!("Seeded {created} of {} books", books.len());
}
