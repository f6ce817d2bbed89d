#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Listing page markup for (text, author, author href) quotes
pub fn listing(quotes: &[(&str, &str, &str)], next: Option<&str>) -> String {
    let mut html = String::from("<html><body><div class=\"col-md-8\">");
    for (text, author, href) in quotes {
        html.push_str(&format!(
            r#"<div class="quote">
                <span class="text">{text}</span>
                <span>by <small class="author">{author}</small>
                <a href="{href}">(about)</a></span>
                <div class="tags">Tags:
                    <a class="tag" href="/tag/life/page/1/">life</a>
                    <a class="tag" href="/tag/humor/page/1/">humor</a>
                </div>
            </div>"#
        ));
    }
    if let Some(next) = next {
        html.push_str(&format!(
            r#"<nav><ul class="pager">
                <li class="next"><a href="{next}">Next <span aria-hidden="true">&rarr;</span></a></li>
            </ul></nav>"#
        ));
    }
    html.push_str("</div></body></html>");
    html
}

/// Author page markup
pub fn author_page(name: &str, born: &str, location: &str) -> String {
    format!(
        r#"<html><body><div class="author-details">
            <h3 class="author-title">{name}
            </h3>
            <p><strong>Born:</strong> <span class="author-born-date">{born}</span>
            <span class="author-born-location">in {location}</span></p>
            <div class="author-description">
                {name} wrote things.
            </div>
        </div></body></html>"#
    )
}

/// Serve `body` as HTML at `route`, expecting exactly `times` requests
pub async fn serve(server: &MockServer, route: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8"))
        .expect(times)
        .mount(server)
        .await;
}

/// Two listing pages (2 + 1 quotes) whose quotes reference two distinct authors
pub async fn mount_two_page_site(server: &MockServer, author_fetches: u64) {
    serve(
        server,
        "/",
        listing(
            &[
                ("“The world as we have created it is a process of our thinking.”", "Albert Einstein", "/author/Albert-Einstein"),
                ("“It is our choices, Harry, that show what we truly are.”", "J.K. Rowling", "/author/J-K-Rowling"),
            ],
            Some("/page/2/"),
        ),
        1,
    )
    .await;
    serve(
        server,
        "/page/2/",
        listing(
            &[("“Try not to become a man of success.”", "Albert Einstein", "/author/Albert-Einstein")],
            None,
        ),
        1,
    )
    .await;
    serve(
        server,
        "/author/Albert-Einstein",
        author_page("Albert Einstein", "March 14, 1879", "Ulm, Germany"),
        author_fetches,
    )
    .await;
    serve(
        server,
        "/author/J-K-Rowling",
        author_page("J.K. Rowling", "July 31, 1965", "Yate, South Gloucestershire, England, The United Kingdom"),
        author_fetches,
    )
    .await;
}
