/// Escapado de literales SQL para el seed del catálogo.
/// Regla exacta: duplicar comillas simples y envolver en comillas simples.

/// Duplica cada comilla simple del valor ('' por ')
pub fn escape_quotes(value: &str) -> String {
    value.replace('\'', "''")
}

/// Valor escapado y envuelto en comillas simples, listo para incrustar
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", escape_quotes(value))
}
