use std::error::Error;
use std::path::Path;

/// Ruta fija del catálogo básico, relativa al directorio del programa
/// (un nivel arriba, igual que los scripts de migración del backend)
pub const DEFAULT_CATALOG_PATH: &str = "../public/embler/inventario/c_embler.json";

/// Verifica que un archivo exista
pub fn file_exists(path: &str) -> bool {
    Path::new(path).exists()
}

/// Calcula el tamaño de un archivo en bytes
pub fn get_file_size(path: &str) -> Result<u64, Box<dyn Error>> {
    let metadata = std::fs::metadata(path)?;
    Ok(metadata.len())
}

/// Formatea bytes en formato legible (KB, MB, GB)
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
