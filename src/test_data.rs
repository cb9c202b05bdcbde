#[cfg(test)]
pub const POST_FULLY_DELIMITED: &str = "---
Title: Hello, blogchain
Date: 24.12.2023
Author: Jane Doe
---

# Hello

This is the *first* post.
";

#[cfg(test)]
pub const POST_CLOSING_DELIMITER_ONLY: &str = "title: Second post
date: 01.01.24
lang: de_DE
---
Body of the second post.
";

#[cfg(test)]
pub fn post_source(title: &str, date: &str, extra_header: &str) -> String {
    format!("---\ntitle: {}\ndate: {}\n{}---\n\nBody of {}.\n", title, date, extra_header, title)
}
