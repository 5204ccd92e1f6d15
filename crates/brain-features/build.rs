//! Build script for brain-features - generates the default catalog and its
//! typed accessors from `catalog/default.txt`.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[path = "src/naming.rs"]
mod naming;

const CATALOG_FILE: &str = "catalog/default.txt";
const VERSION_MARKER: &str = "catalog-version:";

fn main() {
    println!("cargo:rerun-if-changed={CATALOG_FILE}");
    println!("cargo:rerun-if-changed=src/naming.rs");

    let source = std::fs::read_to_string(CATALOG_FILE)
        .unwrap_or_else(|e| panic!("could not read {CATALOG_FILE}: {e}"));
    let catalog = parse_catalog(&source);

    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").expect("OUT_DIR not set"));
    write_generated(&out_dir.join("catalog.rs"), &render(&catalog));
}

struct Catalog {
    version: u32,
    tags: Vec<String>,
}

fn parse_catalog(source: &str) -> Catalog {
    let mut version = 0;
    let mut tags = Vec::new();

    for line in source.lines().map(str::trim) {
        if let Some(comment) = line.strip_prefix('#') {
            if let Some(v) = comment.trim().strip_prefix(VERSION_MARKER) {
                version = v
                    .trim()
                    .parse()
                    .unwrap_or_else(|e| panic!("bad {VERSION_MARKER} value {v:?}: {e}"));
            }
            continue;
        }
        if !line.is_empty() {
            tags.push(line.to_string());
        }
    }

    Catalog { version, tags }
}

/// Accessor name -> tag, in first-seen order. Later duplicates replace the tag.
fn typed_accessors(tags: &[String]) -> Vec<(String, &str)> {
    let mut order: Vec<(String, &str)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for tag in tags.iter().map(String::as_str) {
        let name = naming::to_accessor_name(
            tag,
            naming::DEFAULT_VERB,
            Some(naming::DISABLE_PREFIX),
        );
        if !naming::is_identifier(&name) {
            println!("cargo:warning=catalog tag {tag:?} has no typed accessor ({name:?} is not an identifier)");
            continue;
        }
        match index.get(&name) {
            Some(&i) => order[i].1 = tag,
            None => {
                index.insert(name.clone(), order.len());
                order.push((name, tag));
            }
        }
    }

    order
}

fn render(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("// @generated by build.rs from catalog/default.txt\n\n");

    out.push_str("/// Tags of the default catalog in file order, duplicates included.\n");
    out.push_str("pub const DEFAULT_CATALOG: &[&str] = &[\n");
    for tag in &catalog.tags {
        let _ = writeln!(out, "    {tag:?},");
    }
    out.push_str("];\n\n");

    out.push_str("/// Version header of the default catalog.\n");
    let _ = writeln!(
        out,
        "pub const DEFAULT_CATALOG_VERSION: u32 = {};\n",
        catalog.version
    );

    out.push_str("/// One typed accessor per tag of [`DEFAULT_CATALOG`].\n");
    out.push_str("///\n");
    out.push_str("/// Each method reports whether its tag's capability is enabled, re-reading\n");
    out.push_str("/// the disabled list on every call.\n");
    out.push_str("#[allow(non_snake_case)]\n");
    out.push_str("pub trait CatalogAccessors {\n");
    out.push_str("    /// Registry the accessors query.\n");
    out.push_str("    fn feature_tags(&self) -> &FeatureTags;\n");
    for (name, tag) in typed_accessors(&catalog.tags) {
        let _ = write!(
            out,
            "\n    /// `{tag}`\n    fn {name}(&self, is_guest: bool) -> bool {{\n        self.feature_tags().is_enabled({tag:?}, is_guest)\n    }}\n"
        );
    }
    out.push_str("}\n");

    out
}

fn write_generated(path: &Path, contents: &str) {
    // Avoid touching the file when nothing changed, to keep rebuilds quiet.
    if std::fs::read_to_string(path).is_ok_and(|old| old == contents) {
        return;
    }
    std::fs::write(path, contents)
        .unwrap_or_else(|e| panic!("could not write {}: {e}", path.display()));
}
