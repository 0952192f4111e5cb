//! Build a demo for the web and serve it, `cargo run-wasm --example shapes`.

fn main() {
    cargo_run_wasm::run_wasm_with_css("body { margin: 0px; background: black; }");
}
