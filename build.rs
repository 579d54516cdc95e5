use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Cargar variables de entorno desde .env si existe
    // (BACKEND_URL, LOGIN_PATH, REGISTER_PATH, PRODUCTS_PATH, REQUEST_TIMEOUT_SECONDS, ENABLE_LOGGING)
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE (se aceptan comillas simples o dobles alrededor del valor)
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches(|c| c == '"' || c == '\'');

                    // Las variables del entorno real tienen prioridad
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Backend en el mismo origen (/login, /register, /produkty).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    for key in [
        "BACKEND_URL",
        "LOGIN_PATH",
        "REGISTER_PATH",
        "PRODUCTS_PATH",
        "REQUEST_TIMEOUT_SECONDS",
        "ENABLE_LOGGING",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
