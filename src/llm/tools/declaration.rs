//! Tool declaration helpers using JSON Schema generation

use schemars::{gen::SchemaSettings, JsonSchema};

use crate::llm::core::types::{FunctionDeclaration, ToolDeclaration};

/// Create a strict function declaration from a type that implements JsonSchema
///
/// The schema is generated inline (no `$ref`/`definitions`) and stripped of
/// the `$schema` and `title` keys, which the provider rejects in strict mode.
/// Doc comments on the argument fields become property descriptions.
///
/// # Example
///
/// ```ignore
/// use schemars::JsonSchema;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, JsonSchema)]
/// #[serde(deny_unknown_fields)]
/// struct WeatherArgs {
///     /// City and country e.g. Bogotá, Colombia
///     location: String,
/// }
///
/// let decl = create_tool_declaration::<WeatherArgs>(
///     "get_weather",
///     "Returns current weather data for a city"
/// );
/// ```
pub fn create_tool_declaration<T: JsonSchema>(
    name: impl Into<String>,
    description: impl Into<String>,
) -> ToolDeclaration {
    let generator = SchemaSettings::draft07()
        .with(|settings| {
            settings.inline_subschemas = true;
            settings.meta_schema = None;
        })
        .into_generator();
    let schema = generator.into_root_schema_for::<T>();

    let mut parameters = serde_json::to_value(&schema).unwrap_or_else(|_| {
        serde_json::json!({ "type": "object", "properties": {} })
    });
    if let Some(object) = parameters.as_object_mut() {
        object.remove("$schema");
        object.remove("title");
        object.remove("definitions");
    }

    ToolDeclaration::Function(FunctionDeclaration {
        name: name.into(),
        description: description.into(),
        parameters,
        strict: true,
    })
}
