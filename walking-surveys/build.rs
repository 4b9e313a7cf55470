use std::env;
use std::fs;
use std::path::Path;

/// Bundled datasets and the JSON written in their place when a fixture is
/// missing, so the app still builds (with an empty map).
const DATASETS: [(&str, &str); 3] = [
    ("street_locations.json", "[]"),
    ("street_attributes.json", "{}"),
    ("chart_data.json", "{}"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy each fixture to OUT_DIR for include_str
    for (name, fallback) in DATASETS {
        let src = Path::new("../fixtures").join(name);
        let dest = Path::new(&out_dir).join(name);
        if src.exists() {
            fs::copy(&src, &dest).unwrap();
        } else {
            println!("cargo:warning=fixtures/{} not found, bundling an empty dataset", name);
            fs::write(&dest, fallback).unwrap();
        }
        println!("cargo:rerun-if-changed=../fixtures/{}", name);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
