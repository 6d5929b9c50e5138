//! Integration tests for `mdhtml build` and `mdhtml render`.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn mdhtml_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mdhtml"))
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn temp_out(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("mdhtml-build-test").join(name);
    // Clean up from previous runs
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn build_site(out: &PathBuf) -> std::process::ExitStatus {
    Command::new(mdhtml_bin())
        .args([
            "build",
            "--config",
            fixture("site/mdhtml.json").to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
            "--quiet",
        ])
        .status()
        .expect("failed to run mdhtml build")
}

#[test]
fn build_produces_mirrored_file_tree() {
    let out = temp_out("tree");
    assert!(build_site(&out).success(), "mdhtml build should succeed");

    assert!(out.join("index.html").exists(), "index.html should exist");
    assert!(out.join("blog/majesty.html").exists(), "blog/majesty.html should exist");
    assert!(
        out.join("images/rivendell.txt").exists(),
        "non-markdown files should be copied"
    );
    assert!(!out.join("index.md").exists(), "markdown sources are not copied");

    let _ = fs::remove_dir_all(&out);
}

#[test]
fn build_fills_template() {
    let out = temp_out("template");
    assert!(build_site(&out).success());

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("<title>Tolkien Fan Club</title>"));
    assert!(index.contains(
        r#"<article><div><h1>Tolkien Fan Club</h1><p><b>I like Tolkien</b>. Read my <a href="/blog/majesty">first post here</a></p><blockquote><p>All that is gold does not glitter</p></blockquote></div></article>"#
    ));

    let post = fs::read_to_string(out.join("blog/majesty.html")).unwrap();
    assert!(post.contains(r#"<title>The Unparalleled Majesty of "The Lord of the Rings"</title>"#));
    assert!(post.contains(
        r#"<p><img src="/images/rivendell.txt" alt="LOTR image artistmonkeys">LOTR image artistmonkeys</img></p>"#
    ));
    assert!(post.contains(
        "<ol><li>The Fellowship of the Ring</li><li>The Two Towers</li><li>The Return of the King</li></ol>"
    ));
    assert!(post.contains(
        "<pre><code>\nfunc main() {\n    fmt.Println(\"Hello, World!\")\n}\n</code></pre>"
    ));

    let copied = fs::read_to_string(out.join("images/rivendell.txt")).unwrap();
    assert_eq!(copied, "not really an image\n");

    let _ = fs::remove_dir_all(&out);
}

#[test]
fn build_fails_on_unclosed_formatting() {
    let root = temp_out("broken");
    let content = root.join("content");
    fs::create_dir_all(&content).unwrap();
    fs::write(content.join("bad.md"), "This **never closes\n").unwrap();

    let output = Command::new(mdhtml_bin())
        .args([
            "build",
            "--content",
            content.to_str().unwrap(),
            "--out",
            root.join("public").to_str().unwrap(),
            "--quiet",
        ])
        .output()
        .expect("failed to run mdhtml build");

    assert!(!output.status.success(), "build should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad.md"), "error should name the file: {stderr}");
    assert!(stderr.contains("Unclosed formatting"), "error should name the cause: {stderr}");

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn render_prints_fragment() {
    let output = Command::new(mdhtml_bin())
        .args(["render", fixture("single.md").to_str().unwrap()])
        .output()
        .expect("failed to run mdhtml render");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "<div><h1>Single</h1><p>A <i>lone</i> page.</p></div>");
}

#[test]
fn render_json_lists_blocks() {
    let output = Command::new(mdhtml_bin())
        .args(["render", fixture("single.md").to_str().unwrap(), "--format", "json"])
        .output()
        .expect("failed to run mdhtml render");

    assert!(output.status.success());
    let blocks: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(blocks[0]["block_type"]["kind"], "heading");
    assert_eq!(blocks[0]["block_type"]["level"], 1);
    assert_eq!(blocks[1]["block_type"]["kind"], "paragraph");
    assert_eq!(blocks[1]["text"], "A _lone_ page.");
}

#[test]
fn render_page_sets_title() {
    let output = Command::new(mdhtml_bin())
        .args([
            "render",
            fixture("single.md").to_str().unwrap(),
            "--format",
            "page",
            "--title",
            "Override",
        ])
        .output()
        .expect("failed to run mdhtml render");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<title>Override</title>"));
}
