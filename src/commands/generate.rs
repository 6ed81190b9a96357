use std::error::Error;
use std::fs;
use std::process;

use crate::file_utils::{self, DEFAULT_CATALOG_PATH};
use crate::models::{ProductRecord, SqlRow};

/// Registros por archivo SQL generado
pub const BATCH_SIZE: usize = 500;

/// Tabla destino del seed
const TABLE_NAME: &str = "product_basic_catalog";

/// Prefijo de los archivos generados en el directorio actual
const OUTPUT_PREFIX: &str = "insert_basic_catalog_batch_";

/// Genera los archivos SQL del catálogo básico en lotes de 500 registros.
/// Un archivo por lote, sobrescribiendo corridas anteriores; misma entrada
/// produce exactamente los mismos bytes.
pub fn generate_inserts(args: &[String]) -> Result<(), Box<dyn Error>> {
    let input_path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_CATALOG_PATH);
    let output_prefix = args.get(3).map(String::as_str).unwrap_or(OUTPUT_PREFIX);

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  SQL Batch Generator - Catálogo Básico                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("📄 Input:  {}", input_path);
    println!("📋 Tabla:  {}", TABLE_NAME);
    println!("📦 Lotes:  {} registros por archivo", BATCH_SIZE);
    println!();

    let products = load_catalog(input_path)?;
    println!("📊 Total de productos: {}", products.len());

    let total_batches = batch_count(products.len());
    let mut total_rows = 0usize;
    let mut empty_batches = 0usize;

    for (batch_idx, batch) in products.chunks(BATCH_SIZE).enumerate() {
        let batch_num = batch_idx + 1;
        let start_record = batch_idx * BATCH_SIZE + 1;
        let end_record = batch_idx * BATCH_SIZE + batch.len();

        println!("📦 Generando lote {}/{} ({} productos)...",
                 batch_num, total_batches, batch.len());

        let rows: Vec<SqlRow> = batch.iter().filter_map(SqlRow::from_record).collect();

        let output_file = format!("{}{:03}.sql", output_prefix, batch_num);
        let content = render_batch(batch_num, start_record, end_record, &rows);
        fs::write(&output_file, content)?;

        total_rows += rows.len();
        if rows.is_empty() {
            empty_batches += 1;
            println!("⚠️  Lote {} vacío (sin productos válidos)", batch_num);
        } else {
            println!("✅ Generado {} con {} productos", output_file, rows.len());
        }
    }

    println!();
    println!("🎉 Generación completada: {} archivos SQL creados", total_batches);
    println!("📊 Filas emitidas: {} | Descartadas (sin nombre): {}",
             total_rows, products.len() - total_rows);
    if empty_batches > 0 {
        println!("⚠️  Lotes sin productos válidos: {}", empty_batches);
    }

    Ok(())
}

/// Carga el catálogo completo en memoria como arreglo JSON de objetos.
/// Archivo inexistente termina el proceso sin efectos secundarios; JSON
/// malformado propaga el error de parseo hasta main.
pub fn load_catalog(input_path: &str) -> Result<Vec<ProductRecord>, Box<dyn Error>> {
    if !file_utils::file_exists(input_path) {
        eprintln!("❌ Archivo no encontrado: {}", input_path);
        eprintln!("💡 Asegúrate de que el catálogo existe en {}", DEFAULT_CATALOG_PATH);
        process::exit(1);
    }

    println!("📂 Leyendo {}...", input_path);
    let content = fs::read_to_string(input_path)?;
    let products: Vec<ProductRecord> = serde_json::from_str(&content)?;

    Ok(products)
}

/// Cantidad de lotes: división hacia arriba sobre BATCH_SIZE
pub fn batch_count(total_records: usize) -> usize {
    (total_records + BATCH_SIZE - 1) / BATCH_SIZE
}

/// Construye el contenido completo de un archivo de lote.
/// El rango del encabezado usa los límites del lote ANTES de filtrar.
fn render_batch(batch_num: usize, start_record: usize, end_record: usize, rows: &[SqlRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!("-- Lote {} del catálogo básico\n", batch_num));
    out.push_str(&format!("-- Productos {} a {}\n\n", start_record, end_record));

    if rows.is_empty() {
        // Sin filas válidas no se emite INSERT; el archivo sigue siendo SQL válido
        out.push_str("-- No hay productos válidos en este lote\n");
        return out;
    }

    out.push_str(&format!("INSERT INTO {} (clave, nombre, is_active) VALUES\n", TABLE_NAME));
    let values: Vec<String> = rows.iter().map(SqlRow::to_value_tuple).collect();
    out.push_str(&values.join(",\n"));
    out.push_str(";\n");

    out
}
