use vergen::{Emitter, RustcBuilder};

fn main() {
    // Always rerun when this build script changes.
    println!("cargo:rerun-if-changed=build.rs");

    // Best-effort toolchain probing via vergen, but NEVER fail the build.
    // If probing fails we emit an explicit fallback so `env!()` never fails.
    let rustc = match RustcBuilder::default().semver(true).build() {
        Ok(rustc) => rustc,
        Err(err) => {
            println!("cargo:warning=whispercheck-probe: vergen rustc config failed: {err}");
            emit_fallback();
            return;
        }
    };

    if let Err(err) = Emitter::default()
        .add_instructions(&rustc)
        .and_then(|e| e.emit())
    {
        println!("cargo:warning=whispercheck-probe: vergen emit failed: {err}");
        emit_fallback();
    }
}

fn emit_fallback() {
    // This env var is consumed via `env!()`. It MUST always be set, or
    // compilation will fail.
    println!("cargo:rustc-env=VERGEN_RUSTC_SEMVER=unknown");
}
