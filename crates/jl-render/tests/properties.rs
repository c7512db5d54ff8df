use jl_render::*;
use serde_json::json;

fn ctx() -> RenderContext {
    RenderContext::default()
}

fn raw(bytes: &[u8]) -> FieldValue<'_> {
    FieldValue::raw(bytes)
}

#[test]
fn test_default_text_is_identity() {
    for s in ["", "plain", "{not json}", "line\nbreak", "\"quoted\""] {
        assert_eq!(render_default(&ctx(), &FieldValue::text(s)), s);
    }
}

#[test]
fn test_default_raw_matches_describe() {
    let cases: [&[u8]; 6] = [b"42", b"true", b"null", br#"["a",1]"#, br#"{"k":"v"}"#, br#""s""#];
    for bytes in cases {
        let decoded: serde_json::Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(render_default(&ctx(), &raw(bytes)), describe(&decoded));
    }
}

#[test]
fn test_default_invalid_raw_is_raw_text() {
    insta::assert_snapshot!(render_default(&ctx(), &raw(b"{\"a\":")), @r#"{"a":"#);
    insta::assert_snapshot!(render_default(&ctx(), &raw(b"")), @"");
}

#[test]
fn test_error_record_renders_multiline() {
    let record = ErrorRecord {
        error: "boom".to_string(),
        stack: "a\nb".to_string(),
    };
    assert_eq!(render_error(&ctx(), &FieldValue::from(&record)), "\n  boom\n\ta\n\tb");
}

#[test]
fn test_error_falls_back_to_default() {
    let decoded = json!({"error": "boom", "stack": "a\nb"});
    let values = [
        FieldValue::text("boom"),
        raw(br#"{"error":"boom","stack":"a"}"#),
        raw(b"not json"),
        FieldValue::from(&decoded),
    ];
    for value in values {
        assert_eq!(render_error(&ctx(), &value), render_default(&ctx(), &value));
    }
}

#[test]
fn test_error_record_recognised_from_raw_span() {
    let record = ErrorRecord::from_raw(br#"{"error":"boom","stack":"x\ny"}"#).unwrap();
    assert_eq!(render_error(&ctx(), &FieldValue::from(&record)), "\n  boom\n\tx\n\ty");
}

#[test]
fn test_trace() {
    assert_eq!(render_trace(&ctx(), &raw(br#"["x","y"]"#)), "\nx\ny");
    insta::assert_snapshot!(render_trace(&ctx(), &raw(b"[\"x\"")), @"");
    insta::assert_snapshot!(render_trace(&ctx(), &raw(b"[]")), @"");
    insta::assert_snapshot!(render_trace(&ctx(), &FieldValue::text("x")), @"");
}

#[test]
fn test_exception() {
    let bytes = br#"{"file":"f.go","trace":["l1","l2"]}"#;
    assert_eq!(render_exception(&ctx(), &raw(bytes)), "f.go\nl1\nl2");
    insta::assert_snapshot!(render_exception(&ctx(), &raw(b"{}")), @"");
    insta::assert_snapshot!(render_exception(&ctx(), &raw(b"garbage")), @"");
    insta::assert_snapshot!(render_exception(&ctx(), &FieldValue::text("f.go")), @"");
}

#[test]
fn test_extra() {
    insta::assert_snapshot!(render_extra(&ctx(), &raw(br#"{"class":"Foo","line":42}"#)), @"Foo:42");
    insta::assert_snapshot!(render_extra(&ctx(), &raw(br#""bare-class""#)), @"bare-class");
    insta::assert_snapshot!(render_extra(&ctx(), &raw(b"[1,2]")), @"");
    insta::assert_snapshot!(render_extra(&ctx(), &raw(b"7")), @"");
    insta::assert_snapshot!(render_extra(&ctx(), &FieldValue::text("Foo")), @"");
}

#[test]
fn test_extra_line_zero_and_negative() {
    insta::assert_snapshot!(render_extra(&ctx(), &raw(br#"{"class":"A","line":0}"#)), @"A:0");
    insta::assert_snapshot!(render_extra(&ctx(), &raw(br#"{"class":"A","line":-12}"#)), @"A:-12");
}

#[test]
fn test_level() {
    insta::assert_snapshot!(render_level(&ctx(), &raw(br#""WARNING""#)), @"WARN");
    insta::assert_snapshot!(render_level(&ctx(), &raw(br#""CRITICAL""#)), @"CRIT");
    insta::assert_snapshot!(render_level(&ctx(), &raw(br#""INFO""#)), @"INFO");
    insta::assert_snapshot!(render_level(&ctx(), &raw(br#""warning""#)), @"warning");
    insta::assert_snapshot!(render_level(&ctx(), &FieldValue::text("WARNING")), @"");
}

#[test]
fn test_strategies_are_deterministic() {
    let decoded = json!({"b": 1, "a": [true, null]});
    let values = [
        FieldValue::text("t"),
        raw(br#"{"file":"f","trace":["1"]}"#),
        raw(b"{broken"),
        FieldValue::from(&decoded),
    ];
    for renderer in Renderer::ALL {
        for value in &values {
            let first = renderer.render(&ctx(), value);
            let second = renderer.render(&ctx(), value);
            assert_eq!(first, second, "{} not deterministic", renderer);
        }
    }
}

#[test]
fn test_context_does_not_change_output() {
    let styled = RenderContext::new().with_color(false).with_width(40);
    let bytes = br#"{"class":"Foo","line":1}"#;
    for renderer in Renderer::ALL {
        assert_eq!(
            renderer.render(&styled, &raw(bytes)),
            renderer.render(&ctx(), &raw(bytes))
        );
    }
}

#[test]
fn test_render_fn_matches_renderer() {
    let render: RenderFn = Renderer::Exception.as_fn();
    let bytes = br#"{"file":"a.rb","trace":["x"]}"#;
    assert_eq!(render(&ctx(), &raw(bytes)), "a.rb\nx");
}

#[test]
fn test_config_driven_field_rendering() -> Result<()> {
    let config = RenderConfig::from_toml_str("[fields]\nwhere = \"extra\"\n")?;
    let renderers = config.field_renderers();
    let where_ = raw(br#"{"class":"Svc","line":9}"#);
    insta::assert_snapshot!(renderers.render_field(&ctx(), "where", &where_), @"Svc:9");
    insta::assert_snapshot!(renderers.render_field(&ctx(), "level", &raw(br#""WARNING""#)), @"WARN");
    Ok(())
}

#[test]
fn test_exception_keeps_fields_that_decode() {
    insta::assert_snapshot!(render_exception(&ctx(), &raw(br#"{"file":"f.go","trace":5}"#)), @"f.go");
    assert_eq!(render_exception(&ctx(), &raw(br#"{"file":7,"trace":["l1"]}"#)), "\nl1");
}

#[test]
fn test_extra_null_shapes() {
    insta::assert_snapshot!(render_extra(&ctx(), &raw(b"null")), @":0");
    insta::assert_snapshot!(render_extra(&ctx(), &raw(br#"{"class":null,"line":3}"#)), @":3");
}
