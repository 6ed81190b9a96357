use serde::Deserialize;

use crate::sql;

/// Registro del catálogo básico (c_embler.json)
/// Solo Clave y Nombre son relevantes para el seed; el resto de campos se ignora
#[derive(Debug, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "Clave", default)]
    pub clave: Option<String>,
    #[serde(rename = "Nombre", default)]
    pub nombre: Option<String>,
}

/// Fila lista para emitir en el INSERT multi-fila
#[derive(Debug, Clone, PartialEq)]
pub struct SqlRow {
    pub clave: Option<String>,
    pub nombre: String,
}

impl SqlRow {
    /// Aplica la regla de limpieza del catálogo:
    /// - Nombre ausente o en blanco descarta el registro completo
    /// - Clave ausente o en blanco queda como NULL (no descarta)
    pub fn from_record(record: &ProductRecord) -> Option<SqlRow> {
        let nombre = record.nombre.as_deref()?.trim();
        if nombre.is_empty() {
            return None;
        }

        let clave = record
            .clave
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(str::to_string);

        Some(SqlRow {
            clave,
            nombre: nombre.to_string(),
        })
    }

    /// Tupla de valores para el INSERT: (clave, nombre, true)
    pub fn to_value_tuple(&self) -> String {
        let clave_sql = match &self.clave {
            Some(clave) => sql::quote_literal(clave),
            None => "NULL".to_string(),
        };

        format!("({}, {}, true)", clave_sql, sql::quote_literal(&self.nombre))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(clave: Option<&str>, nombre: Option<&str>) -> ProductRecord {
        ProductRecord {
            clave: clave.map(str::to_string),
            nombre: nombre.map(str::to_string),
        }
    }

    #[test]
    fn test_nombre_ausente_descarta() {
        assert!(SqlRow::from_record(&record(Some("A1"), None)).is_none());
        assert!(SqlRow::from_record(&record(Some("A1"), Some(""))).is_none());
        assert!(SqlRow::from_record(&record(Some("A1"), Some("   "))).is_none());
    }

    #[test]
    fn test_nombre_se_recorta() {
        let row = SqlRow::from_record(&record(None, Some("  Tornillo  "))).unwrap();
        assert_eq!(row.nombre, "Tornillo");
    }

    #[test]
    fn test_clave_vacia_queda_null() {
        // Clave en blanco NO descarta el registro, solo queda como NULL
        let row = SqlRow::from_record(&record(Some(""), Some("Tuerca"))).unwrap();
        assert!(row.clave.is_none());

        let row = SqlRow::from_record(&record(Some("  "), Some("Tuerca"))).unwrap();
        assert!(row.clave.is_none());

        let row = SqlRow::from_record(&record(None, Some("Tuerca"))).unwrap();
        assert!(row.clave.is_none());
    }

    #[test]
    fn test_tupla_con_clave() {
        let row = SqlRow::from_record(&record(Some("A1"), Some("Bolt O'Ring"))).unwrap();
        assert_eq!(row.to_value_tuple(), "('A1', 'Bolt O''Ring', true)");
    }

    #[test]
    fn test_tupla_sin_clave() {
        let row = SqlRow::from_record(&record(None, Some("Nut"))).unwrap();
        assert_eq!(row.to_value_tuple(), "(NULL, 'Nut', true)");
    }

    #[test]
    fn test_deserializa_claves_exactas() {
        // Claves por nombre exacto (case-sensitive); campos extra se ignoran
        let json = r#"[
            {"Clave": "A1", "Nombre": "Bolt", "Precio": 12.5},
            {"clave": "B2", "nombre": "minusculas"},
            {"Nombre": "Sin clave"},
            {"Clave": null, "Nombre": null}
        ]"#;

        let records: Vec<ProductRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].clave.as_deref(), Some("A1"));
        assert_eq!(records[0].nombre.as_deref(), Some("Bolt"));
        // "clave"/"nombre" en minúsculas no cuentan
        assert!(records[1].clave.is_none());
        assert!(records[1].nombre.is_none());
        assert!(records[2].clave.is_none());
        assert_eq!(records[2].nombre.as_deref(), Some("Sin clave"));
        assert!(records[3].clave.is_none());
        assert!(records[3].nombre.is_none());
    }
}
