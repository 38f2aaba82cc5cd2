//! Fixture helpers shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Bundler stand-in: writes `var <name> = {};` to the `--file` argument
/// and records its arguments next to the bundle.
pub const FAKE_BUNDLER: &str = r#"#!/bin/sh
args="$*"
while [ $# -gt 0 ]; do
  case "$1" in
    --file) out="$2"; shift 2 ;;
    --name) name="$2"; shift 2 ;;
    *) shift ;;
  esac
done
echo "var $name = {};" > "$out"
echo "$args" > "$out.args"
"#;

pub const FAILING_BUNDLER: &str = "#!/bin/sh\necho 'Error: Could not resolve entry module' >&2\nexit 1\n";

/// Lay out a small app using the current SDK.
pub fn app(root: &Path) {
    fs::write(
        root.join("package.json"),
        r#"{ "name": "demo", "dependencies": { "@lightningjs/sdk": "^5.0.0" } }"#,
    )
    .unwrap();
    fs::write(
        root.join("metadata.json"),
        r#"{ "identifier": "com.example.demo-app", "version": "1.0.0" }"#,
    )
    .unwrap();
    fs::write(
        root.join("settings.json"),
        r#"{ "appSettings": { "stage": { "clearColor": "0x00000000" } }, "platformSettings": {} }"#,
    )
    .unwrap();
    fs::write(root.join(".gitignore"), "node_modules\n").unwrap();

    fs::create_dir_all(root.join("static/images")).unwrap();
    fs::write(root.join("static/images/logo.png"), "png").unwrap();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/index.js"), "export default {}").unwrap();
    fs::create_dir_all(root.join("configs")).unwrap();
    fs::write(root.join("configs/rollup.es6.config.js"), "").unwrap();
    fs::write(root.join("configs/rollup.es5.config.js"), "").unwrap();

    let support = root.join("node_modules/@lightningjs/sdk/support");
    fs::create_dir_all(support.join("polyfills")).unwrap();
    fs::write(support.join("index.html"), "<html></html>").unwrap();
    fs::write(support.join("polyfills/a.js"), "/* a */").unwrap();
    fs::write(support.join("polyfills/b.js"), "/* b */").unwrap();
}

/// Install an executable script at `<root>/bin/rollup`.
#[cfg(unix)]
pub fn bundler(root: &Path, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(root.join("bin")).unwrap();
    let path = root.join("bin/rollup");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    fs::write(root.join("lng.config.json"), r#"{ "bundler": "bin/rollup" }"#).unwrap();
}

pub fn clear_env() {
    for key in ["LNG_BUILD_FOLDER", "LNG_SOURCEMAPS", "LNG_TARGETS", "LNG_BUNDLER"] {
        std::env::remove_var(key);
    }
}
