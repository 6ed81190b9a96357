use std::env;
use std::error::Error;

// Importar módulos locales
mod commands;
mod file_utils;
mod models;
mod progress;
mod sql;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        help();
        return Ok(());
    }

    let command = &args[1];

    match command.as_str() {
        "generate" => {
            if args.len() > 4 {
                eprintln!("Usage: sql_batch_tools generate [input.json] [output_prefix]");
                return Ok(());
            }
            commands::generate::generate_inserts(&args)?;
        },
        "inspect" => {
            if args.len() != 3 {
                eprintln!("❌ Error: inspect requires 1 argument");
                eprintln!("Usage: sql_batch_tools inspect <input.json>");
                return Ok(());
            }
            commands::inspection::inspect_catalog(&args[2])?;
        },
        "help" => {
            help();
        },
        _ => {
            eprintln!("Unknown command: {}", command);
            help();
        }
    }

    Ok(())
}

fn help() {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  SQL Batch Tools - Catalog Migration                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("Version {} (Build #{} - {})",
        env!("SQL_BATCH_TOOLS_VERSION"), env!("BUILD_NUMBER"), env!("BUILD_DATE"));
    println!();
    println!("Commands:");
    println!("  generate [input.json] [output_prefix]");
    println!("    Genera archivos SQL de INSERT para product_basic_catalog");
    println!("    - Lotes de 500 registros, un archivo .sql por lote");
    println!("    - Archivos en el directorio actual: insert_basic_catalog_batch_NNN.sql");
    println!("    - Registros sin Nombre se descartan; Clave vacía queda como NULL");
    println!();
    println!("  inspect <input.json>");
    println!("    Reporte de calidad de datos previo a la migración");
    println!("    - Total de productos, filas a emitir, descartados, claves NULL");
    println!("    - No escribe archivos");
    println!();
    println!("EXAMPLES:");
    println!();
    println!("  # Generar lotes desde la ruta fija del catálogo básico");
    println!("  sql_batch_tools generate");
    println!();
    println!("  # Generar lotes desde un export puntual");
    println!("  sql_batch_tools generate exports/c_embler_2024.json");
    println!();
    println!("  # Revisar calidad de datos antes de generar");
    println!("  sql_batch_tools inspect ../public/embler/inventario/c_embler.json");
    println!();
    println!("NOTES:");
    println!("  - Input por defecto: {}", file_utils::DEFAULT_CATALOG_PATH);
    println!("  - Los archivos generados se sobrescriben en cada corrida");
    println!("  - La salida es determinística: misma entrada, mismos bytes");
}
