//! End-to-end render pipeline tests against an on-disk template directory.

use std::fs;

use anyhow::Result;
use serde_json::json;
use tempfile::TempDir;

use renderguard::{DirSource, Pipeline, RenderError};

const INDEX_HTML: &str = r#"{% import "footer.html" as footer -%}
<html>
<body>
<h1>{{ Title }}</h1>
{{ footer::footer(year=Year) }}
</body>
</html>
"#;

const FOOTER_HTML: &str =
    "{%- macro footer(year) -%}<footer>&copy; {{ year }}</footer>{%- endmacro -%}";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

fn static_dir() -> Result<TempDir> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("index.html"), INDEX_HTML)?;
    fs::write(dir.path().join("footer.html"), FOOTER_HTML)?;
    Ok(dir)
}

#[test]
fn strict_render_end_to_end() -> Result<()> {
    init_tracing();
    let dir = static_dir()?;
    let pipeline = Pipeline::new(DirSource::new(dir.path())?);

    let mut out = Vec::new();
    pipeline.render(
        &["index.html", "footer.html"],
        &json!({"Title": "Hello, World!", "Year": "2025"}),
        &mut out,
        true,
    )?;

    let out = String::from_utf8(out)?;
    assert!(out.contains("Hello, World!"));
    assert!(out.contains("2025"));
    Ok(())
}

#[test]
fn executing_the_partial_first_yields_empty_output() -> Result<()> {
    init_tracing();
    let dir = static_dir()?;
    let pipeline = Pipeline::new(DirSource::new(dir.path())?);

    // The macro-only footer produces no output when executed directly, the
    // classic symptom of a template set ordered partial-first.
    let mut out = Vec::new();
    let err = pipeline
        .render(
            &["footer.html", "index.html"],
            &json!({"Title": "Hello, World!", "Year": "2025"}),
            &mut out,
            true,
        )
        .unwrap_err();

    match err {
        RenderError::EmptyOutput {
            name,
        } => assert_eq!(name, "footer.html"),
        other => panic!("expected EmptyOutput, got {:?}", other),
    }
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn dropped_field_is_caught_in_strict_mode() -> Result<()> {
    init_tracing();
    let dir = tempfile::tempdir()?;
    // Template only ever prints the title; the year is silently dropped.
    fs::write(dir.path().join("index.html"), "<h1>{{ Title }}</h1>")?;
    let pipeline = Pipeline::new(DirSource::new(dir.path())?);

    let data = json!({"Title": "Hello, World!", "Year": "2025"});

    // Lax mode lets the omission through.
    let mut out = Vec::new();
    pipeline.render(&["index.html"], &data, &mut out, false)?;
    assert_eq!(out, b"<h1>Hello, World!</h1>");

    // Strict mode names the dropped leaf.
    let mut out = Vec::new();
    let err = pipeline.render(&["index.html"], &data, &mut out, true).unwrap_err();
    assert!(err.is_missing_data());
    match err {
        RenderError::MissingData {
            path,
        } => assert_eq!(path, "Year"),
        other => panic!("expected MissingData, got {:?}", other),
    }
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn integer_fields_never_fail_the_guard() -> Result<()> {
    init_tracing();
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("index.html"), "<h1>{{ Title }}</h1>")?;
    let pipeline = Pipeline::new(DirSource::new(dir.path())?);

    // Visits is numeric and never rendered; strict mode must not object.
    let mut out = Vec::new();
    pipeline.render(
        &["index.html"],
        &json!({"Title": "Hello, World!", "Visits": 12345}),
        &mut out,
        true,
    )?;
    assert_eq!(out, b"<h1>Hello, World!</h1>");
    Ok(())
}

#[test]
fn nested_data_is_validated_through_partials() -> Result<()> {
    init_tracing();
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("list.html"),
        "{% for item in Items %}<li>{{ item.Name }}</li>{% endfor %}",
    )?;
    let pipeline = Pipeline::new(DirSource::new(dir.path())?);

    let mut out = Vec::new();
    pipeline.render(
        &["list.html"],
        &json!({"Items": [{"Name": "first"}, {"Name": "second"}]}),
        &mut out,
        true,
    )?;

    let out = String::from_utf8(out)?;
    assert!(out.contains("first"));
    assert!(out.contains("second"));
    Ok(())
}

#[test]
fn unknown_template_identifier_is_a_resolve_error() -> Result<()> {
    init_tracing();
    let dir = static_dir()?;
    let pipeline = Pipeline::new(DirSource::new(dir.path())?);

    let mut out = Vec::new();
    let err = pipeline
        .render(&["nope.html"], &json!({"Title": "x"}), &mut out, false)
        .unwrap_err();
    match err {
        RenderError::Resolve {
            name, ..
        } => assert_eq!(name, "nope.html"),
        other => panic!("expected Resolve, got {:?}", other),
    }
    Ok(())
}
