use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

pub const KEYWORDS: &[&str] = &[
    "import", "from", "def", "async", "await", "try", "except", "if", "else", "return", "for",
    "in", "not",
];

pub const KEYWORD_CLASS: &str = "keyword";
pub const STRING_CLASS: &str = "string";
pub const COMMENT_CLASS: &str = "comment";

// Stand-in for inserted markup bytes. Not a quote, `#`, newline or word char.
const MASK: &str = "\u{1}";

fn keyword_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alternation = KEYWORDS.join("|");
        Regex::new(&format!(r"\b(?:{alternation})\b")).expect("keyword pattern")
    })
}

fn string_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#""(?:\\[^\r\n]|[^"\\\r\n])*"|'(?:\\[^\r\n]|[^'\\\r\n])*'"#)
            .expect("string pattern")
    })
}

fn comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#[^\r\n]*").expect("comment pattern"))
}

struct Marked {
    html: String,
    masked: String,
}

impl Marked {
    fn new(source: &str) -> Self {
        Self {
            html: source.to_string(),
            masked: source.to_string(),
        }
    }

    fn wrap_matches(&mut self, re: &Regex, class: &str) {
        let ranges: Vec<Range<usize>> = re.find_iter(&self.masked).map(|m| m.range()).collect();
        if ranges.is_empty() {
            return;
        }

        let open = format!(r#"<span class="{class}">"#);
        let close = "</span>";
        let open_mask = MASK.repeat(open.len());
        let close_mask = MASK.repeat(close.len());

        let mut html = String::with_capacity(self.html.len() + ranges.len() * 32);
        let mut masked = String::with_capacity(html.capacity());
        let mut cursor = 0;
        for range in ranges {
            html.push_str(&self.html[cursor..range.start]);
            masked.push_str(&self.masked[cursor..range.start]);

            html.push_str(&open);
            html.push_str(&self.html[range.clone()]);
            html.push_str(close);

            masked.push_str(&open_mask);
            masked.push_str(&self.masked[range.clone()]);
            masked.push_str(&close_mask);

            cursor = range.end;
        }
        html.push_str(&self.html[cursor..]);
        masked.push_str(&self.masked[cursor..]);

        self.html = html;
        self.masked = masked;
    }
}

// Sequential passes, not a lexer: a keyword inside a string stays a keyword.
// Only the tags a pass inserts are hidden from the passes after it.
pub fn highlight(source: &str) -> String {
    let mut marked = Marked::new(source);
    marked.wrap_matches(keyword_re(), KEYWORD_CLASS);
    marked.wrap_matches(string_re(), STRING_CLASS);
    marked.wrap_matches(comment_re(), COMMENT_CLASS);
    marked.html
}
