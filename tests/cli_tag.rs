//! Integration tests for `requirekit tag`

mod common;

use common::*;

fn standalone_env(debug: bool) -> TestEnv {
    TestEnv::builder()
        .with_config(&config_with(
            &format!("debug = {}", debug),
            "[require.standalone_modules.common]\nout = \"common-built.js\"\n\n[require.standalone_modules.skin]\nout = \"skin-built.js\"\nrelative_baseurl = \"skin\"\nentry_file_name = \"skin.js\"\ndevel_tag = \"separate_tag\"\n",
        ))
        .build()
}

#[test]
fn tag_plain_module_uses_loader_with_data_main() {
    let env = TestEnv::builder().build();

    let result = env.run(&["tag", "main"]);

    assert!(result.success, "tag failed: {}", result.stderr);
    assert_eq!(
        result.stdout.trim(),
        r#"<script type="text/javascript" src="/static/js/require.js" data-main="/static/js/main.js"></script>"#
    );
}

#[test]
fn tag_standalone_in_production_points_at_bundle() {
    let env = standalone_env(false);

    let result = env.run(&["tag", "common"]);

    assert!(result.success, "tag failed: {}", result.stderr);
    assert_eq!(
        result.stdout.trim(),
        r#"<script type="text/javascript" src="/static/js/common-built.js"></script>"#
    );
}

#[test]
fn tag_standalone_in_debug_uses_loader() {
    let env = standalone_env(true);

    let result = env.run(&["tag", "common"]);

    assert!(result.success, "tag failed: {}", result.stderr);
    assert_eq!(
        result.stdout.trim(),
        r#"<script type="text/javascript" src="/static/js/require.js" data-main="/static/js/common.js"></script>"#
    );
}

#[test]
fn tag_separate_tag_style_renders_two_tags() {
    let env = standalone_env(true);

    let result = env.run(&["tag", "skin"]);

    assert!(result.success, "tag failed: {}", result.stderr);
    assert_eq!(
        result.stdout.trim(),
        concat!(
            r#"<script type="text/javascript" src="/static/js/require.js"></script>"#,
            r#"<script type="text/javascript" src="/static/js/skin/skin.js"></script>"#
        )
    );
}

#[test]
fn tag_flags_override_configured_debug() {
    let env = standalone_env(true);

    let production = env.run(&["tag", "common", "--no-debug"]);
    assert!(production.stdout.contains("common-built.js"));

    let env = standalone_env(false);
    let debug = env.run(&["tag", "common", "--debug"]);
    assert!(debug.stdout.contains("data-main"));
}

#[test]
fn tag_env_var_overrides_configured_debug() {
    let env = standalone_env(false);

    let result = env.run_with_env(&["tag", "common"], &[("REQUIREKIT_DEBUG", "1")]);

    assert!(result.success, "tag failed: {}", result.stderr);
    assert!(result.stdout.contains("data-main"), "stdout: {}", result.stdout);
}

#[test]
fn tag_debug_flags_conflict() {
    let env = TestEnv::builder().build();

    let result = env.run(&["tag", "main", "--debug", "--no-debug"]);

    assert!(!result.success);
}

#[test]
fn tag_json_event() {
    let env = TestEnv::builder().build();

    let result = env.run(&["--json", "tag", "main"]);

    assert!(result.success, "tag failed: {}", result.stderr);
    let events = result.json_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "tag");
    assert_eq!(events[0]["module"], "main");
    assert!(events[0]["html"].as_str().unwrap().contains("data-main"));
}

#[test]
fn unknown_config_key_warns() {
    let env = TestEnv::builder()
        .with_config(&config_with("baseurl = \"lib\"", ""))
        .build();

    let result = env.run(&["tag", "main"]);

    assert!(result.success, "tag failed: {}", result.stderr);
    assert!(
        result.stderr.contains("unknown key 'baseurl'"),
        "stderr: {}",
        result.stderr
    );
    assert!(result.stderr.contains("did you mean 'base_url'?"));
}

#[test]
fn explicit_missing_config_fails() {
    let env = TestEnv::builder().build();

    let result = env.run(&["--config", "nope.toml", "tag", "main"]);

    assert!(!result.success);
    assert!(result.stderr.contains("nope.toml"), "stderr: {}", result.stderr);
}
