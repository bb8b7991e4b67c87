//! Serialise chunk mappings into a static PHP class.

use crate::models::PathMapping;

/// Tool name recorded in the generated file header.
pub const GENERATOR_NAME: &str = "webpack-php-manifest";

/// Render a PHP class with one static array member per section.
///
/// Sections are emitted in the order given and entries in mapping order. Keys and values are
/// wrapped in single quotes verbatim; a `'` inside either produces invalid PHP.
pub fn render_php_class(class_name: &str, sections: &[(&str, &PathMapping)]) -> String {
  let mut out = String::from("<?php\n");
  out.push_str(&class_comment(class_name));
  out.push_str(&format!("class {class_name} {{"));

  for (name, mapping) in sections {
    out.push_str(&render_static_array(name, mapping));
  }

  out.push_str("\n}\n");
  out
}

fn class_comment(class_name: &str) -> String {
  format!("/** \n* Built by {GENERATOR_NAME} \n* Class {class_name}\n*/\n")
}

fn render_static_array(name: &str, mapping: &PathMapping) -> String {
  let mut out = format!("\n  static ${name} = [");
  for (key, value) in mapping.iter() {
    out.push_str(&format!("\n    '{key}' => '{value}',"));
  }
  out.push_str("\n  ];");
  out
}
