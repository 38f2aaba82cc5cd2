//! End-to-end tests of the build command against a fake bundler.

#![cfg(unix)]

mod common;

use lng_cli::cli::BuildArgs;
use lng_cli::commands::build;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn args(root: &std::path::Path) -> BuildArgs {
    BuildArgs {
        cwd: Some(root.to_path_buf()),
        ..BuildArgs::default()
    }
}

#[tokio::test]
#[serial]
async fn test_full_build() {
    common::clear_env();
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    common::app(root);
    common::bundler(root, common::FAKE_BUNDLER);

    build::execute(args(root)).await.unwrap();

    let out = root.join("build");
    assert_eq!(
        fs::read_to_string(out.join("appBundle.js")).unwrap().trim(),
        "var APP_com_example_demo_app = {};"
    );
    assert!(out.join("appBundle.es5.js").is_file());
    assert_eq!(
        fs::read_to_string(out.join("polyfills.js")).unwrap(),
        "/* a */\n/* b */"
    );

    // support files, static assets and project documents
    assert!(out.join("index.html").is_file());
    assert!(out.join("static/images/logo.png").is_file());
    assert!(out.join("settings.json").is_file());
    assert!(out.join("metadata.json").is_file());
    assert!(!out.join("src").exists());

    let es6_args = fs::read_to_string(out.join("appBundle.js.args")).unwrap();
    assert!(es6_args.contains("configs/rollup.es6.config.js"));
    assert!(es6_args.contains("src/index.js"));
    assert!(!es6_args.contains("--no-sourcemap"));
    let es5_args = fs::read_to_string(out.join("appBundle.es5.js.args")).unwrap();
    assert!(es5_args.contains("configs/rollup.es5.config.js"));

    let gitignore = fs::read_to_string(root.join(".gitignore")).unwrap();
    let lines: Vec<&str> = gitignore.lines().collect();
    for entry in ["node_modules", "dist", "releases", ".tmp", "build"] {
        assert!(lines.contains(&entry), "missing {entry} in .gitignore");
    }
}

#[tokio::test]
#[serial]
async fn test_es6_only_without_sourcemaps() {
    common::clear_env();
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    common::app(root);
    common::bundler(root, common::FAKE_BUNDLER);

    build::execute(BuildArgs {
        es6: true,
        no_sourcemaps: true,
        ..args(root)
    })
    .await
    .unwrap();

    let out = root.join("build");
    assert!(out.join("appBundle.js").is_file());
    assert!(!out.join("appBundle.es5.js").exists());
    assert!(!out.join("polyfills.js").exists());
    let es6_args = fs::read_to_string(out.join("appBundle.js.args")).unwrap();
    assert!(es6_args.ends_with("--no-sourcemap\n"));
}

#[tokio::test]
#[serial]
async fn test_missing_metadata_and_settings_do_not_abort() {
    common::clear_env();
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    common::app(root);
    common::bundler(root, common::FAKE_BUNDLER);
    fs::remove_file(root.join("metadata.json")).unwrap();
    fs::remove_file(root.join("settings.json")).unwrap();

    build::execute(args(root)).await.unwrap();

    let out = root.join("build");
    assert!(!out.join("metadata.json").exists());
    assert!(!out.join("settings.json").exists());
    assert_eq!(
        fs::read_to_string(out.join("appBundle.js")).unwrap().trim(),
        "var APP = {};"
    );
}

#[tokio::test]
#[serial]
async fn test_bundler_failure_aborts_build() {
    common::clear_env();
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    common::app(root);
    common::bundler(root, common::FAILING_BUNDLER);

    let err = build::execute(args(root)).await.unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("Error while creating ES6 bundle"));
    assert!(msg.contains("Could not resolve entry module"));
    assert!(!root.join("build/polyfills.js").exists());
}

#[tokio::test]
#[serial]
async fn test_rebuild_replaces_previous_output() {
    common::clear_env();
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    common::app(root);
    common::bundler(root, common::FAKE_BUNDLER);
    fs::create_dir_all(root.join("build")).unwrap();
    fs::write(root.join("build/stale.js"), "old").unwrap();

    build::execute(args(root)).await.unwrap();
    build::execute(args(root)).await.unwrap();

    assert!(!root.join("build/stale.js").exists());
    let gitignore = fs::read_to_string(root.join(".gitignore")).unwrap();
    assert_eq!(gitignore.matches("releases").count(), 1);
}

#[tokio::test]
#[serial]
async fn test_custom_build_folder_and_src_copy() {
    common::clear_env();
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    common::app(root);
    common::bundler(root, common::FAKE_BUNDLER);

    std::env::set_var("LNG_BUILD_FOLDER", "out");
    let result = build::execute(BuildArgs {
        copy_src: true,
        ..args(root)
    })
    .await;
    common::clear_env();
    result.unwrap();

    assert!(root.join("out/appBundle.js").is_file());
    assert!(root.join("out/src/index.js").is_file());
    assert!(!root.join("build").exists());

    let gitignore = fs::read_to_string(root.join(".gitignore")).unwrap();
    let lines: Vec<&str> = gitignore.lines().collect();
    assert!(lines.contains(&"out"));
    assert!(!lines.contains(&"dist"));
}

#[tokio::test]
#[serial]
async fn test_missing_sdk_fails_before_bundling() {
    common::clear_env();
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    common::app(root);
    common::bundler(root, common::FAKE_BUNDLER);
    fs::remove_dir_all(root.join("node_modules")).unwrap();

    assert!(build::execute(args(root)).await.is_err());
    assert!(!root.join("build/appBundle.js").exists());
}

#[tokio::test]
#[serial]
async fn test_missing_static_folder_does_not_abort() {
    common::clear_env();
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    common::app(root);
    common::bundler(root, common::FAKE_BUNDLER);
    fs::remove_dir_all(root.join("static")).unwrap();

    build::execute(args(root)).await.unwrap();

    let out = root.join("build");
    assert!(!out.join("static").exists());
    assert!(out.join("appBundle.js").is_file());
    assert!(out.join("appBundle.es5.js").is_file());
}

#[tokio::test]
#[serial]
async fn test_build_folder_holding_the_app_is_rejected() {
    common::clear_env();
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("app");
    fs::create_dir_all(&root).unwrap();
    common::app(&root);
    common::bundler(&root, common::FAKE_BUNDLER);
    fs::write(temp.path().join("neighbour.txt"), "keep").unwrap();

    for out_dir in [".", ".."] {
        let err = build::execute(BuildArgs {
            out_dir: Some(out_dir.into()),
            ..args(&root)
        })
        .await
        .unwrap_err();
        assert!(err.to_string().contains("build_folder"), "{out_dir}: {err}");
    }

    assert!(root.join("package.json").is_file());
    assert!(root.join("src/index.js").is_file());
    assert!(temp.path().join("neighbour.txt").is_file());
}
