//! Default text emitter.
//!
//! Renders descriptors into JavaScript-flavored source. Payload-free
//! constructors become tag constants, payload constructors become
//! functions building `{ TAG, _0.. }` objects, converters become shallow
//! copies or switch tables. The absent case of a partial reverse
//! converter renders as `undefined`; total (opaque) reverse converters
//! carry no default branch.

use std::fmt::Write;

use bridgegen_decl::EncodedValue;

use crate::descriptor::{BodyShape, Derived, GeneratedFn};
use crate::encoding::{EncodingMode, EncodingTable};
use crate::render::Emitter;

/// Default emitter producing JavaScript-flavored source text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEmitter;

impl TextEmitter {
    /// Creates a new text emitter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn emit_derived(&self, output: &mut String, derived: &Derived) {
        if let Some(alias) = &derived.opaque_alias {
            let _ = writeln!(
                output,
                "/** @typedef {{*}} {alias} Constructed only by {}ToExternal. */",
                derived.decl
            );
            output.push('\n');
        }
        for f in &derived.fns {
            self.emit_fn(output, f);
        }
    }

    fn emit_fn(&self, output: &mut String, f: &GeneratedFn) {
        match &f.body {
            BodyShape::ConstructorTag { index } => {
                let _ = writeln!(output, "const {} = {index};", f.name);
            }
            BodyShape::ConstructorApply { index, arity } => {
                let params = param_list(*arity);
                let _ = writeln!(output, "function {}({params}) {{", f.name);
                let mut payload = String::new();
                for i in 0..*arity {
                    let _ = write!(payload, ", _{i}: a{i}");
                }
                let _ = writeln!(output, "  return {{ TAG: {index}{payload} }};");
                output.push_str("}\n");
            }
            BodyShape::FieldProjection { field } => {
                let _ = writeln!(output, "function {}(value) {{", f.name);
                let _ = writeln!(output, "  return value.{field};");
                output.push_str("}\n");
            }
            BodyShape::RecordToObject { fields, .. }
            | BodyShape::RecordFromObject { fields, .. } => {
                // Shallow copy both ways; reading only the declared
                // fields is what ignores extras on the way in.
                let _ = writeln!(output, "function {}(value) {{", f.name);
                output.push_str("  return {\n");
                for field in fields {
                    let _ = writeln!(output, "    {field}: value.{field},");
                }
                output.push_str("  };\n}\n");
            }
            BodyShape::EnumToValue { table, .. } => {
                let _ = writeln!(output, "function {}(value) {{", f.name);
                output.push_str("  switch (value) {\n");
                for (index, (name, value)) in table.iter().enumerate() {
                    let _ = writeln!(
                        output,
                        "    case {}: return {};",
                        internal_literal(table, index, name),
                        external_literal(value)
                    );
                }
                output.push_str("  }\n}\n");
            }
            BodyShape::EnumFromValue { table, total } => {
                let _ = writeln!(output, "function {}(value) {{", f.name);
                output.push_str("  switch (value) {\n");
                for (index, (name, value)) in table.iter().enumerate() {
                    let _ = writeln!(
                        output,
                        "    case {}: return {};",
                        external_literal(value),
                        internal_literal(table, index, name)
                    );
                }
                if !total {
                    output.push_str("    default: return undefined;\n");
                }
                output.push_str("  }\n}\n");
            }
        }
        output.push('\n');
    }
}

impl Emitter for TextEmitter {
    fn emit(&self, derived: &[Derived]) -> String {
        let mut output = String::from("// Generated by bridgegen. Do not edit.\n\n");
        let mut exports = Vec::new();

        for d in derived {
            self.emit_derived(&mut output, d);
            exports.extend(d.fns.iter().filter(|f| f.exported).map(|f| f.name.clone()));
        }

        output.push_str("module.exports = {\n");
        for name in &exports {
            let _ = writeln!(output, "  {name},");
        }
        output.push_str("};\n");
        output
    }
}

/// Internal representation literal of a constructor: the declaration
/// index for ordinary variants, the tag string for polymorphic ones.
fn internal_literal(table: &EncodingTable, index: usize, name: &str) -> String {
    match table.mode() {
        EncodingMode::Int => index.to_string(),
        EncodingMode::Str => format!("\"{name}\""),
    }
}

fn external_literal(value: &EncodedValue) -> String {
    value.to_string()
}

fn param_list(arity: usize) -> String {
    (0..arity)
        .map(|i| format!("a{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}
