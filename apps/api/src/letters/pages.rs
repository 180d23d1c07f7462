//! Server-rendered HTML for the upload form and the result page.

use crate::letters::upload::{CV_FIELD, JOB_DESCRIPTION_FIELD};

const PAGE_STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
pre{white-space:pre-wrap;background:#f6f6f6;padding:1rem;border-radius:4px}\
label{display:block;margin:1rem 0 .25rem}";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{PAGE_STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

pub fn index_page() -> String {
    let form = format!(
        "<h1>Cover Letter Generator</h1>\n\
         <p>Upload your CV and the job description as plain text (or PDF) files.</p>\n\
         <form method=\"post\" action=\"/\" enctype=\"multipart/form-data\">\n\
         <label for=\"{CV_FIELD}\">CV</label>\n\
         <input type=\"file\" id=\"{CV_FIELD}\" name=\"{CV_FIELD}\" required>\n\
         <label for=\"{JOB_DESCRIPTION_FIELD}\">Job description</label>\n\
         <input type=\"file\" id=\"{JOB_DESCRIPTION_FIELD}\" name=\"{JOB_DESCRIPTION_FIELD}\" required>\n\
         <p><button type=\"submit\">Generate cover letter</button></p>\n\
         </form>"
    );
    layout("Cover Letter Generator", &form)
}

pub fn result_page(filename: &str, letter: &str) -> String {
    let body = format!(
        "<h1>Your Cover Letter</h1>\n<pre>{letter}</pre>\n\
         <p><a href=\"/download/{filename}\">Download</a> · <a href=\"/\">Generate another</a></p>",
        letter = escape_html(letter),
        filename = escape_html(filename),
    );
    layout("Your Cover Letter", &body)
}

fn escape_html(text: &str) -> String {
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
