use std::{
    env, fs,
    path::{Path, PathBuf},
};

use vergen_gix::{Emitter, GixBuilder};

include!("../build_common.rs");

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    process_readme_for_rustdoc(&manifest_dir);

    // Packagers building from a tarball can pin the SHA without git.
    println!("cargo:rerun-if-env-changed=PATHRIP_BUILD_SHA_SHORT");
    if let Some(sha) = env::var("PATHRIP_BUILD_SHA_SHORT")
        .ok()
        .and_then(|raw| short_hex(&raw))
    {
        emit_fallback_sha(Some(&sha));
        return;
    }

    // Git probing is best effort: the build never fails because of it.
    let Some(repo_root) = find_repo_root(Path::new(&manifest_dir)) else {
        emit_fallback_sha(None);
        return;
    };

    let git = match GixBuilder::default()
        .repo_path(Some(repo_root))
        .sha(true)
        .build()
    {
        Ok(git) => git,
        Err(err) => {
            println!("cargo:warning=pathrip-build-info: vergen-gix config failed: {err}");
            emit_fallback_sha(None);
            return;
        }
    };

    if let Err(err) = Emitter::default()
        .add_instructions(&git)
        .and_then(|e| e.emit())
    {
        println!("cargo:warning=pathrip-build-info: vergen-gix emit failed: {err}");
        emit_fallback_sha(None);
    }
}

// `env!("VERGEN_GIT_SHA")` in the crate must always resolve.
fn emit_fallback_sha(sha_short: Option<&str>) {
    let sha = sha_short.unwrap_or("unknown");
    println!("cargo:rustc-env=VERGEN_GIT_SHA={sha}");
}

fn short_hex(raw: &str) -> Option<String> {
    let candidate: String = raw.trim().chars().take(7).collect();
    (candidate.len() == 7 && candidate.chars().all(|c| c.is_ascii_hexdigit())).then_some(candidate)
}

fn find_repo_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
