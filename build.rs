//! Minify the WGSL shader.

use std::path::Path;

use naga::{
    back::wgsl::WriterFlags,
    valid::{Capabilities, ValidationFlags, Validator},
};

/// Validate a WGSL shader and write a minified version of it to file.
fn minify_wgsl(source: impl AsRef<Path>, target: impl AsRef<Path>) {
    // Read the source WGSL
    let source = std::fs::read_to_string(source).expect("Error reading WGSL shader file");

    // Parse into NAGA module
    let mut module = naga::front::wgsl::parse_str(&source).expect("Error compiling WGSL shader");

    // Create the validator, WebGL must be able to run it
    let info = Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .expect("Error while validating WGSL shader");

    // Optimize shader, removing unused stuff
    naga::compact::compact(&mut module);

    // Compile back into WGSL
    let output = naga::back::wgsl::write_string(&module, &info, WriterFlags::empty())
        .expect("Error converting WGSL module back to WGSL code");

    // Minify the WGSL
    let output = wgsl_minifier::minify_wgsl_source(&output);

    std::fs::write(target, output).expect("Error writing minified WGSL shader to file");
}

fn main() {
    // Rerun build script if the shader changed
    println!("cargo::rerun-if-changed=shaders/present.wgsl");

    let out_dir_str = std::env::var_os("OUT_DIR").expect("OUT_DIR not set by cargo");
    let out_dir = Path::new(&out_dir_str);

    minify_wgsl("shaders/present.wgsl", out_dir.join("present.wgsl"));
}
