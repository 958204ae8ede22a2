// src/render.rs
//! Rendering adapter: turns a segment sequence into inline HTML the dashboard
//! can drop into a review card. This is the only place highlighter output
//! touches presentation; it never mutates the text beyond HTML escaping.

use crate::highlight::{Polarity, Segment};

const POSITIVE_CLASS: &str = "bg-blue-100 text-slate-900 rounded px-0.5";
const NEGATIVE_CLASS: &str = "bg-red-100 text-slate-900 rounded px-0.5";

/// Render segments as inline HTML: lexicon hits become `<mark>` spans colored
/// by polarity, plain segments are emitted as escaped text.
pub fn to_html(segments: &[Segment]) -> String {
    let mut out = String::new();
    for seg in segments {
        match seg.label {
            Polarity::None => {
                html_escape::encode_text_to_string(&seg.text, &mut out);
            }
            Polarity::Positive => mark(&mut out, &seg.text, POSITIVE_CLASS),
            Polarity::Negative => mark(&mut out, &seg.text, NEGATIVE_CLASS),
        }
    }
    out
}

fn mark(out: &mut String, text: &str, class: &str) {
    out.push_str(r#"<mark class=""#);
    out.push_str(class);
    out.push_str(r#"">"#);
    html_escape::encode_text_to_string(text, out);
    out.push_str("</mark>");
}
