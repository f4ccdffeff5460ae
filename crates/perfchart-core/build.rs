// File: crates/perfchart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager depends on.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry calls (RegOpenKeyExW and friends) made by the DirectWrite font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
