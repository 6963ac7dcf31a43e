use std::process::exit;

use bookcatalog_client::{Client, ClientConfig, ClientResult};
use tracing_subscriber::EnvFilter;

fn print_result(label: &str, result: &ClientResult) {
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}:\n{}\n", label, json),
        Err(err) => eprintln!("{}: could not serialize result: {}", label, err),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    // Usage: basic_usage [isbn] [author] [title]
    // The base URL comes from BOOKS_API_BASE_URL.
    let args: Vec<String> = std::env::args().collect();
    let isbn = args.get(1).map(String::as_str).unwrap_or("1");
    let author = args.get(2).map(String::as_str).unwrap_or("Chinua Achebe");
    let title = args.get(3).map(String::as_str).unwrap_or("Things Fall Apart");

    let client = match ClientConfig::from_env().and_then(Client::new) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Could not create client: {}", err);
            exit(1);
        }
    };
    println!("Using catalog at {}\n", client.base_url());

    print_result("All books", &client.get_all_books().await);

    // Independent lookups can run side by side.
    let (by_isbn, by_author) = futures::join!(
        client.get_books_by_isbn(isbn),
        client.get_books_by_author(author)
    );
    print_result(&format!("ISBN {}", isbn), &by_isbn);
    print_result(&format!("Author {}", author), &by_author);

    let by_title = client.get_books_by_title(title).await;
    print_result(&format!("Title {}", title), &by_title);

    if !by_title.is_ok() {
        exit(2);
    }
}
