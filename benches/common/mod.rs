//! Common utilities for pathrank benchmarks
//!
//! Generates a deterministic, source-tree-shaped path corpus so bench runs
//! are comparable across machines.

#![allow(dead_code)]

const TOP_DIRS: &[&str] = &[
    "base",
    "chrome/browser",
    "chrome/browser/ui/views",
    "content/renderer",
    "net/http",
    "third_party/skia/src/core",
    "ui/gfx",
];

const STEMS: &[&str] = &[
    "scoped_ptr",
    "ScopedHandle",
    "tab_strip_model",
    "TabContents",
    "http_stream_parser",
    "render_view_impl",
    "SkCanvas",
    "layout_manager",
    "url_request_job",
    "message_loop",
];

const SUFFIXES: &[&str] = &["", "_unittest", "_browsertest", "_impl", "_win", "_mac"];

const EXTS: &[&str] = &["h", "cc", "mm"];

/// `size` distinct paths spread over a few directory trees.
pub fn generate_paths(size: usize) -> Vec<String> {
    (0..size)
        .map(|i| {
            let dir = TOP_DIRS[i % TOP_DIRS.len()];
            let stem = STEMS[(i / TOP_DIRS.len()) % STEMS.len()];
            let suffix = SUFFIXES[(i / 7) % SUFFIXES.len()];
            let ext = EXTS[i % EXTS.len()];
            format!("{dir}/sub{}/{stem}{suffix}{}.{ext}", i % 97, i)
        })
        .collect()
}

/// Queries of increasing length and selectivity.
pub fn sample_queries() -> Vec<&'static str> {
    vec!["s", "sp", "sptr", "tabstrip", "rvi", "httpsp", "zzzz"]
}
