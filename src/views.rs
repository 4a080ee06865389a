//! HTML rendering for the storefront pages.
//!
//! Each page is a pure function from view models to markup. There is no
//! template engine and no state here; handlers own all data access.

use axum::response::Html;

use crate::api::Nav;
use crate::models::{Book, BookDetail, Category};

/// Escape text for interpolation into HTML bodies and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared chrome: header with search form, cart count, and category
/// navigation wrapped around a page body.
fn layout(nav: &Nav, title: &str, body: &str) -> Html<String> {
    let mut nav_links = String::new();
    for category in &nav.categories {
        nav_links.push_str(&format!(
            "<li><a href=\"/category/{}\">{}</a></li>",
            category.id,
            escape(&category.name)
        ));
    }

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Bookstall</title>
</head>
<body>
<header>
<a class="brand" href="/">Bookstall</a>
<form action="/search" method="post">
<input type="text" name="search" placeholder="Search books">
<button type="submit">Search</button>
</form>
<span class="cart-count">Cart ({count})</span>
<nav><ul>{nav_links}</ul></nav>
</header>
<main>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
        count = nav.cart_count,
        nav_links = nav_links,
        body = body,
    ))
}

fn book_list(books: &[Book]) -> String {
    if books.is_empty() {
        return "<p class=\"empty\">No books found.</p>".to_string();
    }

    let mut out = String::from("<ul class=\"books\">");
    for book in books {
        out.push_str(&format!(
            "<li class=\"book\"><a href=\"/book/{id}\">{title}</a>{author}{price}\
             <form action=\"/add-to-cart/{id}\" method=\"post\">\
             <button type=\"submit\">Add to cart</button></form></li>",
            id = book.id,
            title = escape(&book.title),
            author = book
                .author
                .as_deref()
                .map(|a| format!(" <em>by {}</em>", escape(a)))
                .unwrap_or_default(),
            price = book
                .price
                .map(|p| format!(" <span class=\"price\">${:.2}</span>", p))
                .unwrap_or_default(),
        ));
    }
    out.push_str("</ul>");
    out
}

/// Landing page: the navigation categories double as the page body.
pub fn home_page(nav: &Nav) -> Html<String> {
    let mut body = String::from("<h1>Browse by category</h1><ul class=\"categories\">");
    for category in &nav.categories {
        body.push_str(&format!(
            "<li><a href=\"/category/{}\">{}</a></li>",
            category.id,
            escape(&category.name)
        ));
    }
    body.push_str("</ul>");
    layout(nav, "Home", &body)
}

pub fn category_page(nav: &Nav, category: &Category, books: &[Book]) -> Html<String> {
    let body = format!("<h1>{}</h1>{}", escape(&category.name), book_list(books));
    layout(nav, &category.name, &body)
}

pub fn search_page(nav: &Nav, term: &str, books: &[Book]) -> Html<String> {
    let body = format!(
        "<h1>Results for &quot;{}&quot;</h1>{}",
        escape(term),
        book_list(books)
    );
    layout(nav, "Search", &body)
}

pub fn book_detail_page(nav: &Nav, book: &BookDetail) -> Html<String> {
    let mut body = format!("<h1>{}</h1>", escape(&book.title));
    body.push_str(&format!(
        "<p class=\"category\">Category: <a href=\"/category/{}\">{}</a></p>",
        book.category_id,
        escape(&book.category_name)
    ));
    if let Some(author) = book.author.as_deref() {
        body.push_str(&format!("<p class=\"author\">by {}</p>", escape(author)));
    }
    if let Some(price) = book.price {
        body.push_str(&format!("<p class=\"price\">${:.2}</p>", price));
    }
    if let Some(description) = book.description.as_deref() {
        body.push_str(&format!("<p class=\"description\">{}</p>", escape(description)));
    }
    body.push_str(&format!(
        "<form action=\"/add-to-cart/{}\" method=\"post\">\
         <button type=\"submit\">Add to cart</button></form>",
        book.id
    ));
    layout(nav, &book.title, &body)
}

/// Generic error view: the failure message inside the shared chrome.
pub fn error_page(nav: &Nav, message: &str) -> Html<String> {
    let body = format!(
        "<h1>Something went wrong</h1><p class=\"error\">{}</p>\
         <p><a href=\"/\">Back to the storefront</a></p>",
        escape(message)
    );
    layout(nav, "Error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn empty_nav() -> Nav {
        Nav {
            categories: Vec::new(),
            cart_count: 0,
        }
    }

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("plain title"), "plain title");
    }

    #[test]
    fn layout_shows_cart_count() {
        let nav = Nav {
            categories: vec![Category {
                id: 1,
                name: "Fiction".to_string(),
            }],
            cart_count: 3,
        };
        let Html(page) = layout(&nav, "Home", "<p>hi</p>");
        assert!(page.contains("Cart (3)"));
        assert!(page.contains("/category/1"));
        assert!(page.contains("Fiction"));
    }

    #[test]
    fn book_titles_are_escaped_in_listings() {
        let books = vec![Book {
            id: 7,
            category_id: 1,
            title: "<Dune>".to_string(),
            author: None,
            description: None,
            price: None,
        }];
        let listing = book_list(&books);
        assert!(listing.contains("&lt;Dune&gt;"));
        assert!(!listing.contains("<Dune>"));
        assert!(listing.contains("/add-to-cart/7"));
    }

    #[test]
    fn empty_listing_renders_placeholder() {
        assert!(book_list(&[]).contains("No books found."));
    }

    #[test]
    fn error_page_keeps_chrome() {
        let Html(page) = error_page(&empty_nav(), "Category with id 9 not found");
        assert!(page.contains("Something went wrong"));
        assert!(page.contains("Category with id 9 not found"));
        assert!(page.contains("Cart (0)"));
    }
}
