//! Rust struct rendering
//!
//! This module assembles the generated source text. Struct and field
//! names are converted with `heck`; Rust keywords become raw identifiers
//! (with a serde rename pointing back at the wire name when serde derives
//! are requested).

use heck::{ToPascalCase, ToSnakeCase};

use rowshape_core::{
    Presence, Projection, Result, Shape, ShapeField, ShapeKind, ShapeTy, insert_shape,
    projected_shape, row_shape, update_shape,
};
use rowshape_types::{ScalarType, Schema, Table};

/// Options for code generation
#[derive(Debug, Clone, Default)]
pub struct CodegenOptions {
    /// Extra module documentation appended to the generated header
    pub module_doc: Option<String>,
    /// Whether to derive `serde::Serialize` / `serde::Deserialize`
    pub derive_serde: bool,
}

/// Result of code generation
#[derive(Debug, Clone, Default)]
pub struct GeneratedTypes {
    /// The generated Rust source code
    pub code: String,
    /// Struct names that were generated, in emission order
    pub structs: Vec<String>,
    /// Any warnings during generation
    pub warnings: Vec<String>,
}

/// Generate Row/Insert/Update structs for every table in the schema.
#[must_use]
pub fn generate_types(schema: &Schema, options: &CodegenOptions) -> GeneratedTypes {
    let mut emitter = Emitter::new(options);

    for table in &schema.tables {
        if table.columns.is_empty() {
            emitter
                .warnings
                .push(format!("table `{}` has no columns", table.name()));
        }
        emitter.emit_table(table);
    }

    emitter.finish(options)
}

/// Generate the struct family for a projected shape.
///
/// `root_name` names the outermost struct; nested relation structs are
/// named by appending the relation name in PascalCase. Projection
/// references to unknown columns or relations surface as the derivation
/// error.
pub fn generate_projected(
    schema: &Schema,
    table: &Table,
    projection: &Projection,
    root_name: &str,
    options: &CodegenOptions,
) -> Result<GeneratedTypes> {
    let shape = projected_shape(schema, table, projection)?;

    let mut emitter = Emitter::new(options);
    emitter.emit_projected(&shape, &root_name.to_pascal_case());
    Ok(emitter.finish(options))
}

// =============================================================================
// Emitter
// =============================================================================

struct Emitter {
    body: String,
    structs: Vec<String>,
    warnings: Vec<String>,
    needs_json: bool,
    derive_serde: bool,
}

impl Emitter {
    fn new(options: &CodegenOptions) -> Self {
        Self {
            body: String::new(),
            structs: Vec::new(),
            warnings: Vec::new(),
            needs_json: false,
            derive_serde: options.derive_serde,
        }
    }

    fn emit_table(&mut self, table: &Table) {
        let base = table.name().to_pascal_case();

        let row = row_shape(table);
        self.emit_struct(
            &format!("{base}Row"),
            &format!("Row shape for `{}`.", table.name()),
            &row,
        );

        let insert = insert_shape(table);
        self.emit_struct(
            &format!("{base}Insert"),
            &format!(
                "Insert payload for `{}`. Engine-generated columns are omitted.",
                table.name()
            ),
            &insert,
        );

        let update = update_shape(table);
        self.emit_struct(
            &format!("{base}Update"),
            &format!("Update payload for `{}`. All fields are optional.", table.name()),
            &update,
        );
    }

    fn emit_projected(&mut self, shape: &Shape, name: &str) {
        // Emit nested structs first so every referenced name is defined
        // above its use.
        for field in &shape.fields {
            if let Some(nested) = field.ty.as_nested() {
                let nested_name = format!("{name}{}", field.name().to_pascal_case());
                self.emit_projected(nested, &nested_name);
            }
        }

        self.emit_struct(
            name,
            &format!("Projected shape over `{}`.", shape.table),
            shape,
        );
    }

    fn emit_struct(&mut self, name: &str, doc: &str, shape: &Shape) {
        self.body.push_str(&format!("/// {doc}\n"));
        if self.derive_serde {
            self.body.push_str(
                "#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]\n",
            );
        } else {
            self.body.push_str("#[derive(Debug, Clone)]\n");
        }
        self.body.push_str(&format!("pub struct {name} {{\n"));

        for field in &shape.fields {
            if field.is_forbidden() {
                continue;
            }
            self.emit_field(name, field, shape.kind);
        }

        self.body.push_str("}\n\n");
        self.structs.push(name.to_string());
    }

    fn emit_field(&mut self, struct_name: &str, field: &ShapeField, kind: ShapeKind) {
        let (ident, renamed) = field_ident(field.name());

        if self.derive_serde {
            if renamed {
                self.body
                    .push_str(&format!("    #[serde(rename = \"{}\")]\n", field.name()));
            }
            if matches!(kind, ShapeKind::Insert | ShapeKind::Update)
                && field.presence == Presence::Optional
            {
                self.body
                    .push_str("    #[serde(default, skip_serializing_if = \"Option::is_none\")]\n");
            }
        }

        let ty = self.field_type(struct_name, field, kind);
        self.body.push_str(&format!("    pub {ident}: {ty},\n"));
    }

    fn field_type(&mut self, struct_name: &str, field: &ShapeField, kind: ShapeKind) -> String {
        match &field.ty {
            ShapeTy::Scalar(scalar) => {
                if *scalar == ScalarType::Json {
                    self.needs_json = true;
                }
                let base = scalar.rust_type();
                let optional = match kind {
                    ShapeKind::Row | ShapeKind::Projected => field.nullable,
                    ShapeKind::Insert | ShapeKind::Update => {
                        // omission and explicit null collapse into one Option
                        field.presence == Presence::Optional || field.nullable
                    }
                };
                if optional {
                    format!("Option<{base}>")
                } else {
                    base.to_string()
                }
            }
            ShapeTy::Many(_) => {
                let nested = format!("{struct_name}{}", field.name().to_pascal_case());
                format!("Vec<{nested}>")
            }
            ShapeTy::One(_) => {
                let nested = format!("{struct_name}{}", field.name().to_pascal_case());
                format!("Option<{nested}>")
            }
        }
    }

    fn finish(self, options: &CodegenOptions) -> GeneratedTypes {
        let mut code = String::new();

        code.push_str("//! Auto-generated type shapes from a schema description\n");
        code.push_str("//!\n");
        code.push_str("//! Do not edit by hand; regenerate when the schema changes.\n");
        if let Some(doc) = &options.module_doc {
            code.push_str("//!\n");
            for line in doc.lines() {
                code.push_str("//! ");
                code.push_str(line);
                code.push('\n');
            }
        }
        code.push('\n');

        if self.needs_json {
            code.push_str("/// JSON document values as carried by the wire format.\n");
            code.push_str("pub type Json = serde_json::Value;\n\n");
        }

        code.push_str(&self.body);

        GeneratedTypes {
            code,
            structs: self.structs,
            warnings: self.warnings,
        }
    }
}

// =============================================================================
// Identifiers
// =============================================================================

/// Keywords that need a raw identifier in field position.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "yield",
];

/// Keywords that cannot be raw identifiers at all.
const UNRAWABLE: &[&str] = &["self", "Self", "super", "crate"];

/// Convert a column name to a Rust field identifier.
///
/// Returns the identifier and whether it differs from the wire name (in
/// which case serde output needs a rename attribute).
fn field_ident(name: &str) -> (String, bool) {
    let snake = name.to_snake_case();

    if UNRAWABLE.contains(&snake.as_str()) {
        return (format!("{snake}_"), true);
    }
    if KEYWORDS.contains(&snake.as_str()) {
        return (format!("r#{snake}"), snake != name);
    }
    if snake.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return (format!("_{snake}"), true);
    }

    (snake.clone(), snake != name)
}
