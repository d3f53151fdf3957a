//! Benchmarks for outline scanning and lookups
//!
//! Run with: cargo bench --bench scan

use pragma_outline::cancel::CancelToken;
use pragma_outline::outline::{classify, scan, scan_cancellable, OutlineIndex};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Header-like source with `classes` classes, each holding a few members
fn generate_header(classes: usize) -> String {
    let mut text = String::from("#pragma region Headers\n#include <vector>\n#pragma endregion\n\n");
    text.push_str("#pragma region namespace app\n#pragma region Classes\n");
    for i in 0..classes {
        text.push_str(&format!(
            "#pragma region class Widget{i}\n\
             class Widget{i}\n\
             {{\n\
             public:\n\
             #pragma region Methods\n\
             #pragma region method Draw\n\
             \x20   void Draw();\n\
             #pragma endregion\n\
             #pragma region method Resize\n\
             \x20   void Resize(int w, int h);\n\
             #pragma endregion\n\
             #pragma endregion\n\
             private:\n\
             #pragma region Fields\n\
             \x20   int m_width;\n\
             \x20   int m_height;\n\
             #pragma endregion\n\
             #pragma endregion\n\
             }};\n\n"
        ));
    }
    text.push_str("#pragma endregion\n#pragma endregion\n");
    text
}

// ============================================================================
// Scanning
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn scan_header(bencher: divan::Bencher, classes: usize) {
    let source = generate_header(classes);
    bencher.bench(|| scan(divan::black_box(&source)));
}

#[divan::bench(args = [10, 100, 1000])]
fn scan_with_token(bencher: divan::Bencher, classes: usize) {
    let source = generate_header(classes);
    let token = CancelToken::new();
    bencher.bench(|| scan_cancellable(divan::black_box(&source), &token));
}

#[divan::bench(args = ["Methods", "method", "Enum", "object-like", "Unknown"])]
fn classify_tag(tag: &str) {
    let description = match tag {
        "Enum" => "Classes",
        "object-like" => "macro VERSION",
        _ => "Draw",
    };
    divan::black_box(classify(tag, description));
}

// ============================================================================
// Index
// ============================================================================

#[divan::bench(args = [100, 1000])]
fn replace_all(bencher: divan::Bencher, classes: usize) {
    let entries = scan(&generate_header(classes));
    let mut index = OutlineIndex::new();
    bencher.bench_local(|| index.replace_all(divan::black_box(entries.clone())));
}

#[divan::bench(args = [100, 1000])]
fn nearest_lookup(bencher: divan::Bencher, classes: usize) {
    let source = generate_header(classes);
    let lines = source.lines().count();
    let mut index = OutlineIndex::new();
    index.replace_all(scan(&source));

    bencher.bench(|| {
        for line in (1..lines).step_by(7) {
            divan::black_box(index.nearest_at_or_before(line));
        }
    });
}
