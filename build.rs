use std::fs;

fn main() {
    // Validate the built-in style config at compile time
    let config_path = "src/default_config.json";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.json");

    if let Err(e) = serde_json::from_str::<serde_json::Value>(&content) {
        panic!("Invalid default_config.json: {}", e);
    }
}
