use std::error::Error;
use std::process;

use crate::commands::generate::{self, BATCH_SIZE};
use crate::file_utils;
use crate::models::{ProductRecord, SqlRow};
use crate::progress::ProgressTracker;

/// Conteos de calidad de datos del catálogo
#[derive(Debug, Default, PartialEq)]
pub struct CatalogStats {
    pub total: usize,
    pub emitibles: usize,
    pub sin_nombre: usize,
    pub claves_null: usize,
}

impl CatalogStats {
    pub fn add(&mut self, record: &ProductRecord) {
        self.total += 1;

        match SqlRow::from_record(record) {
            Some(row) => {
                self.emitibles += 1;
                if row.clave.is_none() {
                    self.claves_null += 1;
                }
            }
            None => self.sin_nombre += 1,
        }
    }
}

/// Reporte de calidad previo a la migración. Solo lectura: no genera archivos.
pub fn inspect_catalog(input_path: &str) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Catalog Inspection - Pre-migration Report                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("📄 File: {}", input_path);

    if !file_utils::file_exists(input_path) {
        eprintln!("❌ Archivo no encontrado: {}", input_path);
        process::exit(1);
    }

    let size = file_utils::get_file_size(input_path)?;
    println!("💾 Tamaño: {}", file_utils::format_bytes(size));
    println!();

    let products = generate::load_catalog(input_path)?;

    println!("🔍 Revisando registros...");
    let mut progress = ProgressTracker::new(10_000);
    let mut stats = CatalogStats::default();

    for record in &products {
        stats.add(record);
        progress.update(stats.total as u64);
    }
    progress.finish();

    let descarte_pct = if stats.total > 0 {
        (stats.sin_nombre as f64 / stats.total as f64) * 100.0
    } else {
        0.0
    };

    println!();
    println!("📊 RESUMEN:");
    println!("   Total de productos:         {}", stats.total);
    println!("   Filas a emitir:             {}", stats.emitibles);
    println!("   Descartados (sin nombre):   {} ({:.2}%)", stats.sin_nombre, descarte_pct);
    println!("   Claves vacías (quedan NULL): {}", stats.claves_null);
    println!("   Lotes a generar:            {} ({} registros por lote)",
             generate::batch_count(stats.total), BATCH_SIZE);

    if stats.sin_nombre > 0 {
        println!();
        println!("⚠️  {} registros sin Nombre serán excluidos del seed", stats.sin_nombre);
    } else {
        println!();
        println!("✅ Todos los registros tienen Nombre");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_stats() {
        let json = r#"[
            {"Clave":"A1","Nombre":"Bolt O'Ring"},
            {"Clave":"","Nombre":"  "},
            {"Nombre":"Nut"},
            {"Clave":"B2"},
            {"Clave":"  ","Nombre":"Arandela"}
        ]"#;

        let records: Vec<ProductRecord> = serde_json::from_str(json).unwrap();
        let mut stats = CatalogStats::default();
        for record in &records {
            stats.add(record);
        }

        assert_eq!(stats.total, 5);
        assert_eq!(stats.emitibles, 3);
        assert_eq!(stats.sin_nombre, 2);
        // "Nut" sin Clave y "Arandela" con Clave en blanco quedan NULL
        assert_eq!(stats.claves_null, 2);
    }

    #[test]
    fn test_catalog_stats_vacio() {
        let stats = CatalogStats::default();
        assert_eq!(stats, CatalogStats { total: 0, emitibles: 0, sin_nombre: 0, claves_null: 0 });
    }
}
