use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::parser::ParseError;

/// Nodo neutro de una descripción declarativa (deserializado de JSON).
///
/// `type` decide qué acción construye el registro; los atributos son valores
/// JSON crudos y cada adaptador los interpreta. El orden de atributos se
/// conserva tal como vino en el documento.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub attributes: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    pub children: Vec<Entity>,
}

impl Entity {
    /// Atributo obligatorio, como valor JSON crudo.
    pub fn get_attr(&self, name: &str) -> Result<&serde_json::Value, ParseError> {
        self.attributes
            .get(name)
            .ok_or_else(|| ParseError::MissingAttribute { entity: self.type_name.clone(),
                                                          attribute: name.to_string() })
    }

    /// Atributo obligatorio que debe ser una cadena.
    pub fn get_attr_str(&self, name: &str) -> Result<&str, ParseError> {
        self.get_attr(name)?
            .as_str()
            .ok_or_else(|| ParseError::InvalidAttribute { entity: self.type_name.clone(),
                                                          attribute: name.to_string(),
                                                          expected: "string" })
    }

    /// Atributo opcional que, de estar presente, debe ser una cadena.
    pub fn opt_attr_str(&self, name: &str) -> Result<Option<&str>, ParseError> {
        match self.attributes.get(name) {
            None => Ok(None),
            Some(v) => v.as_str()
                        .map(Some)
                        .ok_or_else(|| ParseError::InvalidAttribute { entity: self.type_name.clone(),
                                                                      attribute: name.to_string(),
                                                                      expected: "string" }),
        }
    }

    /// Atributo opcional booleano.
    pub fn opt_attr_bool(&self, name: &str) -> Result<Option<bool>, ParseError> {
        match self.attributes.get(name) {
            None => Ok(None),
            Some(v) => v.as_bool()
                        .map(Some)
                        .ok_or_else(|| ParseError::InvalidAttribute { entity: self.type_name.clone(),
                                                                      attribute: name.to_string(),
                                                                      expected: "bool" }),
        }
    }
}
