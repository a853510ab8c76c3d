// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_line_prefix_article(repeats: usize) -> String {
    let base = "# Title\n## Section with ^example.com/docs^\nParagraph with *bold*, ~italic~ and `code`.\n- Item\n-- Nested item\n--- Deeper item\n- Another item\n@@ img/photo.png\n\n";
    base.repeat(repeats)
}

#[allow(dead_code)]
pub fn generate_paired_article(repeats: usize) -> String {
    let base = "#Heading# with *bold* and ~italic~\n-item one- --item two--\n$img/a.png$ @Docs=https://example.com/docs@\n```let x = 1;```\n";
    format!("#Benchmark#\n{}", base.repeat(repeats))
}

#[allow(dead_code)]
pub fn generate_manifest(entries: usize) -> String {
    (0..entries)
        .map(|i| format!("Article {i}-Category {}-img/{i}.png-Preview text {i}", i % 7))
        .collect::<Vec<_>>()
        .join("|")
}
