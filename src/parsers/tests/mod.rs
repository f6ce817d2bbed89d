
/// Listing page markup in the shape quotes.toscrape.com serves
pub(super) const LISTING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Quotes to Scrape</title></head>
<body>
<div class="container">
  <div class="row header-box">
    <div class="col-md-8"><h1><a href="/" style="text-decoration: none">Quotes to Scrape</a></h1></div>
  </div>
  <div class="row">
    <div class="col-md-8">
      <div class="quote" itemscope itemtype="http://schema.org/CreativeWork">
        <span class="text" itemprop="text">“The world as we have created it is a process of our thinking. It cannot be changed without changing our thinking.”</span>
        <span>by <small class="author" itemprop="author">Albert Einstein</small>
        <a href="/author/Albert-Einstein">(about)</a>
        </span>
        <div class="tags">
            Tags:
            <meta class="keywords" itemprop="keywords" content="change,deep-thoughts,thinking,world" />
            <a class="tag" href="/tag/change/page/1/">change</a>
            <a class="tag" href="/tag/deep-thoughts/page/1/">deep-thoughts</a>
            <a class="tag" href="/tag/thinking/page/1/">thinking</a>
            <a class="tag" href="/tag/world/page/1/">world</a>
        </div>
      </div>
      <div class="quote" itemscope itemtype="http://schema.org/CreativeWork">
        <span class="text" itemprop="text">“It is our choices, Harry, that show what we truly are, far more than our abilities.”</span>
        <span>by <small class="author" itemprop="author">J.K. Rowling</small>
        <a href="/author/J-K-Rowling">(about)</a>
        </span>
        <div class="tags">
            Tags:
            <a class="tag" href="/tag/abilities/page/1/">abilities</a>
            <a class="tag" href="/tag/choices/page/1/">choices</a>
        </div>
      </div>
      <div class="quote" itemscope itemtype="http://schema.org/CreativeWork">
        <span class="text" itemprop="text">“A day without sunshine is like, you know, night.”</span>
        <span>by <small class="author" itemprop="author">Steve Martin</small>
        <a href="/author/Steve-Martin">(about)</a>
        </span>
        <div class="tags">
            Tags:
        </div>
      </div>
      <nav>
        <ul class="pager">
            <li class="next">
                <a href="/page/2/">Next <span aria-hidden="true">&rarr;</span></a>
            </li>
        </ul>
      </nav>
    </div>
  </div>
</div>
</body>
</html>"#;

/// Listing page past the last one: no quotes, no pager
pub(super) const EMPTY_LISTING_PAGE: &str = r#"<html><body>
<div class="col-md-8">
    No quotes found!
    <nav><ul class="pager"><li class="previous"><a href="/page/10/">Previous</a></li></ul></nav>
</div>
</body></html>"#;

/// Author detail page markup
pub(super) const AUTHOR_PAGE: &str = r#"<html><body>
<div class="container">
  <div class="author-details">
    <h3 class="author-title">Albert Einstein
    </h3>
    <p><strong>Born:</strong> <span class="author-born-date">March 14, 1879</span>
    <span class="author-born-location">in Ulm, Germany</span></p>
    <p><strong>Description:</strong></p>
    <div class="author-description">
        In 1879, Albert Einstein was born in Ulm, Germany.
        He completed his Ph.D. at the University of Zurich by 1909.
    </div>
  </div>
</div>
</body></html>"#;
