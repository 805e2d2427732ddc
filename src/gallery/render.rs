//! HTML page generation.
//!
//! Pure string building: no templating engine, three small pages. Every value
//! interpolated into markup goes through [`escape_html`] first, so a
//! maliciously named directory or config entry renders as text, never as
//! markup.

use chrono::{Datelike, NaiveDate};

/// One rendered gallery entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Raw directory name; becomes the link target `<dir>/`.
    pub dir: String,
    /// Background image reference (relative path or data URI).
    pub background: String,
    /// Visible tile text.
    pub display_name: String,
}

/// Escape a value for inclusion in HTML text or attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Footer date: day.month.year without leading zeros, e.g. "7.3.2025".
pub fn footer_date(date: NaiveDate) -> String {
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}

fn page_head(title: &str) -> String {
    format!(
        concat!(
            "<head>\n",
            "    <meta charset=\"UTF-8\">\n",
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
            "    <title>{title}</title>\n",
            "    <link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">\n",
            "    <link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>\n",
            "    <script src=\"https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4\"></script>\n",
            "    <link href=\"https://fonts.googleapis.com/css2?family=Raleway:ital,wght@0,100..900;1,100..900&display=swap\" rel=\"stylesheet\">\n",
            "</head>"
        ),
        title = escape_html(title),
    )
}

fn render_tile(tile: &Tile) -> String {
    format!(
        concat!(
            "    <a href=\"{href}/\" class=\"folder-link relative h-[150px] w-[250px] bg-cover bg-center text-white shadow-lg rounded-lg overflow-hidden\" style=\"background-image: url('{background}');\">\n",
            "        <div class=\"absolute inset-0 bg-black/25 hover:bg-black/40 transition-all duration-300\"></div>\n",
            "        <span class=\"absolute bottom-2 left-0 w-full text-center text-lg\">{name}</span>\n",
            "    </a>\n"
        ),
        href = escape_html(&tile.dir),
        background = escape_html(&tile.background),
        name = escape_html(&tile.display_name),
    )
}

/// Render the full gallery page.
pub fn gallery_page(title: &str, heading: &str, tiles: &[Tile], date: NaiveDate) -> String {
    let mut tile_markup = String::new();
    for tile in tiles {
        tile_markup.push_str(&render_tile(tile));
    }

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "{head}\n",
            "<body>\n",
            "    <h1 class=\"text-4xl text-center font-bold my-[40px]\">{heading}</h1>\n",
            "    <div class=\"flex flex-wrap justify-center gap-4 p-4\">\n",
            "{tiles}",
            "    </div>\n",
            "    <footer class=\"text-center text-gray-500 mt-10 text-sm\">\n",
            "        Auto-generated on {date}\n",
            "    </footer>\n",
            "</body>\n",
            "</html>\n"
        ),
        head = page_head(title),
        heading = escape_html(heading),
        tiles = tile_markup,
        date = footer_date(date),
    )
}

/// Render the 403 denial page, echoing the rejected address.
pub fn denied_page(address: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "{head}\n",
            "<body class=\"bg-gray-50 font-sans\">\n",
            "    <div class=\"container mx-auto px-4 py-20 text-center\">\n",
            "        <h1 class=\"text-4xl font-bold text-red-600 mb-6\">Access Denied</h1>\n",
            "        <p class=\"text-xl mb-4\">You are not authorized to view this website.</p>\n",
            "        <p class=\"text-gray-600\">Your IP: {address}</p>\n",
            "    </div>\n",
            "</body>\n",
            "</html>\n"
        ),
        head = page_head("Access Denied"),
        address = escape_html(address),
    )
}

/// Render the 500 page shown when the gallery root cannot be read.
pub fn error_page() -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "{head}\n",
            "<body class=\"bg-gray-50 font-sans\">\n",
            "    <div class=\"container mx-auto px-4 py-20 text-center\">\n",
            "        <h1 class=\"text-4xl font-bold text-red-600 mb-6\">Something went wrong</h1>\n",
            "        <p class=\"text-xl\">The gallery could not be read. Try again later.</p>\n",
            "    </div>\n",
            "</body>\n",
            "</html>\n"
        ),
        head = page_head("Error"),
    )
}
