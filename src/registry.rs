//! The fixed template registry and the output-name derivation rule.
//!
//! Every value here is a compile-time constant: the tool has no
//! configuration surface. Destination directories are relative to the
//! project root the expander is pointed at.

use std::ops::RangeInclusive;

/// Directory the `.template` files load from
pub const TEMPLATE_PATH: &str = "templates";

/// Destination for generated library sources
pub const SRC_PATH: &str = "src/com/vladris/poke";

/// Destination for generated TypeGuard marker classes
pub const SRC_DETAILS_PATH: &str = "src/com/vladris/poke/details";

/// Destination for generated test sources
pub const TEST_PATH: &str = "test/com/vladris/poke";

/// Number of type parameters a generated construct supports
pub const ARITIES: RangeInclusive<u8> = 1..=8;

/// A template identifier paired with its destination directory.
///
/// Entries are processed independently; their order only determines
/// which outputs exist when a later entry aborts the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Template file name, extension included (`Variant.java` loads
    /// `templates/Variant.java.template`)
    pub template: &'static str,
    /// Directory the rendered files are written to, relative to the
    /// project root
    pub output_dir: &'static str,
}

/// The full registry: one entry per template the tool knows about
pub const REGISTRY: [RegistryEntry; 3] = [
    RegistryEntry {
        template: "TypeGuard.java",
        output_dir: SRC_DETAILS_PATH,
    },
    RegistryEntry {
        template: "Variant.java",
        output_dir: SRC_PATH,
    },
    RegistryEntry {
        template: "VariantTest.java",
        output_dir: TEST_PATH,
    },
];

/// Derive the output file name for a template identifier at a given
/// arity.
///
/// The identifier splits into stem and extension at the last dot. A
/// stem ending in `Test` marks a test-source template: the suffix is
/// stripped and reinserted after the arity digit, so
/// `VariantTest.java` at arity 3 becomes `Variant3Test.java` while
/// `Variant.java` becomes `Variant3.java`.
pub fn output_file_name(template: &str, arity: u8) -> String {
    let (stem, ext) = match template.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (template, None),
    };

    let (stem, role_suffix) = match stem.strip_suffix("Test") {
        Some(stripped) => (stripped, "Test"),
        None => (stem, ""),
    };

    match ext {
        Some(ext) => format!("{stem}{arity}{role_suffix}.{ext}"),
        None => format!("{stem}{arity}{role_suffix}"),
    }
}
