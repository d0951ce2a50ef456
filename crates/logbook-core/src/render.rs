//! Changelog document emission

use crate::types::{Category, SectionMap};

/// Boilerplate document header emitted by `prepare`.
///
/// Any existing header is replaced wholesale; documents produced by the
/// release cycle always carry exactly this text.
pub const HEADER: &str = "\
# Changelog

All notable changes to this project will be documented in this file.

The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.0.0/),
and this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html).

";

/// Render the document produced by `prepare`: boilerplate header, the
/// new version section with a TBD date, then the prior releases.
///
/// No Unreleased heading is written; `fresh_unreleased` recreates one
/// after the release is merged back.
pub fn render_release(version: &str, sections: &SectionMap, rest: &str) -> String {
    let mut output = String::new();

    output.push_str(HEADER);
    output.push_str(&format!("## [{}] - TBD\n\n", version));

    for (category, content) in sections.iter() {
        output.push_str(&format!("### {}\n\n", category));
        output.push_str(content);
        output.push_str("\n\n");
    }

    output.push_str(rest);
    output
}

/// Empty Unreleased scaffolding inserted by `reset`: the heading plus
/// one empty subsection per canonical category.
pub fn fresh_unreleased() -> String {
    let mut block = String::from("## Unreleased\n\n");
    for category in Category::ALL {
        block.push_str(&format!("### {}\n\n", category));
    }
    block
}
