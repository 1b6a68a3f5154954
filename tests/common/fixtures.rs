//! Reusable test content.
//!
//! The optimizer used in tests is a POSIX shell script installed as `r.js`
//! and launched through the custom runtime `["sh"]`. It understands the
//! arguments requirekit passes and "optimizes" by copying:
//!
//! - main build (`dir=` given): copies `appDir` into `dir`, sources the
//!   profile from inside `dir`, then writes `build.txt`
//! - standalone build (`out=` given): concatenates `almond.js` and the
//!   included entry into `out`, then sources the profile
//!
//! Profiles are shell snippets, so a test can bundle files or `exit 3` to
//! simulate an optimizer failure. Every invocation is appended to
//! `invocations.log` next to the script.

use std::fs;
use std::path::Path;

/// Stand-in for r.js
pub const FAKE_OPTIMIZER: &str = r#"log="$(dirname "$0")/invocations.log"
echo "$*" >> "$log"
if [ "$1" != "-o" ]; then
    echo "usage: r.js -o profile [key=value ...]" >&2
    exit 2
fi
profile="$2"
shift 2
dir=""; appDir=""; out=""; include=""; baseUrl=""; name=""; logLevel=""
for arg in "$@"; do
    case "$arg" in
        dir=*) dir="${arg#dir=}" ;;
        appDir=*) appDir="${arg#appDir=}" ;;
        out=*) out="${arg#out=}" ;;
        include=*) include="${arg#include=}" ;;
        baseUrl=*) baseUrl="${arg#baseUrl=}" ;;
        name=*) name="${arg#name=}" ;;
        logLevel=*) logLevel="${arg#logLevel=}" ;;
    esac
done
if [ ! -f "$profile" ]; then
    echo "profile not found: $profile" >&2
    exit 2
fi
if [ -z "$logLevel" ]; then
    echo "Optimizing with $profile"
fi
if [ -n "$out" ]; then
    case "$include" in
        *.js) entry="$include" ;;
        *) entry="$include.js" ;;
    esac
    mkdir -p "$(dirname "$out")"
    cat "$baseUrl/$name.js" "$baseUrl/$entry" > "$out" || exit 1
    . "$profile"
else
    mkdir -p "$dir"
    cp -R "$appDir"/. "$dir"/ || exit 1
    . "$profile"
    echo "Tracing dependencies" > "$dir/build.txt"
fi
exit 0
"#;

/// Loader shim stand-in
pub const ALMOND_JS: &str = "/* almond */\n";

/// Loader stand-in
pub const REQUIRE_JS: &str = "/* require.js */\n";

/// Profile that changes nothing
pub const NOOP_PROFILE: &str = ":\n";

/// Profile that bundles `js/util.js` and `js/main.js` into `js/main-built.js`
pub const BUNDLE_PROFILE: &str = r#"cat "$dir/js/util.js" "$dir/js/main.js" > "$dir/js/main-built.js"
"#;

/// Profile that fails the build
pub const FAILING_PROFILE: &str = "echo 'optimizer exploded' >&2\nexit 3\n";

pub const MAIN_JS: &str = "require(['util'], function (util) { util.run(); });\n";
pub const UTIL_JS: &str = "define({ run: function () {} });\n";

/// Install the stand-in optimizer and default resources into `dir`
pub fn write_fake_resources(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("r.js"), FAKE_OPTIMIZER).unwrap();
    fs::write(dir.join("almond.js"), ALMOND_JS).unwrap();
    fs::write(dir.join("require.js"), REQUIRE_JS).unwrap();
    fs::write(dir.join("app.build.js"), NOOP_PROFILE).unwrap();
    fs::write(dir.join("module.build.js"), NOOP_PROFILE).unwrap();
}

/// Lines of the invocation log, one per optimizer run
pub fn read_invocations(resources: &Path) -> Vec<String> {
    fs::read_to_string(resources.join("invocations.log"))
        .map(|log| log.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Write `content` at `relative` below `root`, creating parents
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
