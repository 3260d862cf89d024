//! HTML page chrome around rendered fragments.
//!
//! Every interpolated value is escaped except the content fragment, which
//! comes from the renderer or the tree builder and is already safe.

use std::fmt::Write;

use mdoc_assets::{NAV_SCRIPT, STYLESHEET};
use mdoc_renderer::escape_html;
use mdoc_site::PageRenderResult;

/// Write the shared document head up to and including `<body>`.
fn write_head(out: &mut String, title: &str) {
    let _ = writeln!(
        out,
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n\
         <link rel=\"stylesheet\" href=\"/static/{STYLESHEET}\">\n\
         </head>\n\
         <body>",
        escape_html(title)
    );
}

fn write_footer(out: &mut String, site_title: &str) {
    let _ = writeln!(
        out,
        "<footer class=\"site-footer\">{}</footer>",
        escape_html(site_title)
    );
}

/// Render the index page listing the corpus.
pub(crate) fn index_page(site_title: &str, tree_html: &str) -> String {
    let mut out = String::with_capacity(tree_html.len() + 1024);
    write_head(&mut out, &format!("Index - {site_title}"));

    let _ = writeln!(
        out,
        "<nav class=\"nav-buttons\">\n\
         <span class=\"nav-title\">{}</span>\n\
         </nav>\n\
         <main class=\"content index-content\">\n\
         <h1>File Index</h1>\n\
         {tree_html}\n\
         </main>",
        escape_html(site_title)
    );

    write_footer(&mut out, site_title);
    out.push_str("</body>\n</html>\n");
    out
}

/// Render a document page with navigation and print header.
pub(crate) fn document_page(site_title: &str, page: &PageRenderResult) -> String {
    let mut out = String::with_capacity(page.html.len() + 2048);
    write_head(&mut out, &format!("{} - {site_title}", page.title));

    let _ = writeln!(
        out,
        "<nav class=\"nav-buttons\">\n\
         <button type=\"button\" class=\"nav-btn\" data-nav-back>Back</button>\n\
         <a href=\"/\" class=\"nav-btn\">Home</a>\n\
         <span class=\"current-path\">/{}</span>\n\
         </nav>",
        escape_html(&page.path)
    );

    out.push_str("<header class=\"print-header\">\n");
    let _ = writeln!(
        out,
        "<h1 class=\"print-title\">{}</h1>",
        escape_html(&page.title)
    );
    if let Some(author) = &page.author {
        let _ = writeln!(
            out,
            "<p class=\"print-author\">{}</p>",
            escape_html(author)
        );
    }
    out.push_str("</header>\n");

    let _ = writeln!(out, "<main class=\"content\">\n{}</main>", page.html);

    write_footer(&mut out, site_title);
    let _ = writeln!(
        out,
        "<script src=\"/static/{NAV_SCRIPT}\"></script>\n</body>\n</html>"
    );
    out
}
