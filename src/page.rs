//! Headless model of the widget's page: one handle per DOM region, each with a
//! `display` style and its inner content.

use std::fmt::Write;

/// Element ids the page markup is expected to carry.
pub mod ids {
    pub const SEARCH_INPUT: &str = "search-input";
    pub const SEARCH_BUTTON: &str = "search-button";
    pub const RESULTS: &str = "results";
    pub const LOADING: &str = "loading";
    pub const ERRORS: &str = "errors";
    pub const ENHANCED_SECTION: &str = "enhanced-section";
    pub const ENHANCED_CONTENT: &str = "enhanced-content";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    Block,
    #[default]
    None,
}

impl Display {
    pub fn as_css(&self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::None => "none",
        }
    }
}

/// Region content. `Text` behaves like `textContent` and is escaped when
/// serialised, `Markup` like `innerHTML`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Markup(String),
}

impl Default for Content {
    fn default() -> Self {
        Content::Markup(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    id: &'static str,
    display: Display,
    content: Content,
}

impl Region {
    pub fn new(id: &'static str) -> Self {
        Region {
            id,
            display: Display::None,
            content: Content::default(),
        }
    }

    pub fn visible(id: &'static str) -> Self {
        Region {
            display: Display::Block,
            ..Region::new(id)
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn display(&self) -> Display {
        self.display
    }

    pub fn is_visible(&self) -> bool {
        self.display == Display::Block
    }

    pub fn show(&mut self) {
        self.display = Display::Block;
    }

    pub fn hide(&mut self) {
        self.display = Display::None;
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    pub fn set_markup(&mut self, markup: impl Into<String>) {
        self.content = Content::Markup(markup.into());
    }

    /// Appends markup, converting text content to its escaped form first.
    pub fn append_markup(&mut self, markup: &str) {
        let mut html = self.inner_html();
        html.push_str(markup);
        self.content = Content::Markup(html);
    }

    pub fn clear(&mut self) {
        self.content = Content::default();
    }

    pub fn inner_html(&self) -> String {
        match &self.content {
            Content::Text(text) => escape_html(text),
            Content::Markup(markup) => markup.clone(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div id=\"{}\" style=\"display: {}\">{}</div>",
            self.id,
            self.display.as_css(),
            self.inner_html()
        )
    }
}

/// Which panel currently owns the page, derived from region visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    Loading,
    Error,
    Results,
}

/// Handles to every region the controller touches, built once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    input_value: String,
    pub button: Region,
    pub results: Region,
    pub loading: Region,
    pub errors: Region,
    pub enhanced_section: Region,
    pub enhanced_content: Region,
}

impl Default for SearchPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchPage {
    pub fn new() -> Self {
        let mut button = Region::visible(ids::SEARCH_BUTTON);
        button.set_text("Search");
        SearchPage {
            input_value: String::new(),
            button,
            results: Region::new(ids::RESULTS),
            loading: Region::new(ids::LOADING),
            errors: Region::new(ids::ERRORS),
            enhanced_section: Region::new(ids::ENHANCED_SECTION),
            enhanced_content: Region::visible(ids::ENHANCED_CONTENT),
        }
    }

    /// Current value of the search input.
    pub fn query(&self) -> &str {
        &self.input_value
    }

    pub fn set_query(&mut self, value: impl Into<String>) {
        self.input_value = value.into();
    }

    pub fn panel_state(&self) -> PanelState {
        if self.loading.is_visible() {
            PanelState::Loading
        } else if self.errors.is_visible() {
            PanelState::Error
        } else if self.results.is_visible() {
            PanelState::Results
        } else {
            PanelState::Idle
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let _ = writeln!(
            html,
            "<input id=\"{}\" type=\"text\" value=\"{}\">",
            ids::SEARCH_INPUT,
            escape_html(&self.input_value)
        );
        let _ = writeln!(html, "{}", self.button.to_html());
        let _ = writeln!(html, "{}", self.loading.to_html());
        let _ = writeln!(html, "{}", self.errors.to_html());
        let _ = writeln!(
            html,
            "<div id=\"{}\" style=\"display: {}\">{}</div>",
            self.enhanced_section.id(),
            self.enhanced_section.display().as_css(),
            self.enhanced_content.to_html()
        );
        let _ = writeln!(html, "{}", self.results.to_html());
        html
    }
}

pub fn escape_html(text: &str) -> String {
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
