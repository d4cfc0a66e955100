//! Minimal GPU name tool

use std::process;

fn main() {
    let name = gpuname::get_gpu_name();
    if name.is_empty() {
        eprintln!("unknown_gpu");
        process::exit(1);
    }
    println!("{}", name);
}
