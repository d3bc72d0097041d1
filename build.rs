use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");

    // Exportar las variables de .env como rustc-env para que option_env!
    // las vea en tiempo de compilación
    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No se encontró .env, se usan los valores por defecto. Copia .env.example a .env para configurar el servidor.");
        return;
    }

    println!("cargo:rerun-if-changed=.env");

    if let Ok(contents) = fs::read_to_string(env_file) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                // Las variables ya definidas en el entorno tienen prioridad
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    }
}
