//! # Directory Listing and Lookup
//!
//! [`Node::entries()`] and [`Node::get()`] are pure functions of the node's
//! parameters. Nothing is cached: the namespace has on the order of 10^12
//! prefix directories, so only the nodes along a walked path are ever built.
//!
//! `get(name)` returns a node exactly when `name` appears in `entries()`,
//! with one extension: the root also accepts any 1-12 digit prefix or any
//! 13-digit code directly, not only the ten single digits it lists.

use cnpfs_core::{Cnp, CnpField};

use crate::node::{Node, Prefix};

/// Entries of a valid code's directory, in listing order.
pub const FINAL_ENTRIES: [&str; 12] = [
    "valid",
    "nationalitate",
    "sex",
    "an",
    "luna",
    "numeLuna",
    "zi",
    "judet",
    "judetNumeric",
    "nnn",
    "name",
    "schimba",
];

/// Name of the leaf holding a prefix or code.
pub const NAME_ENTRY: &str = "name";

/// Name of the alteration directory under a valid code.
pub const CHANGES_ENTRY: &str = "schimba";

fn digits() -> impl Iterator<Item = String> {
    (0..=9).map(|d| d.to_string())
}

fn is_digit_entry(name: &str) -> bool {
    name.len() == 1 && name.bytes().all(|b| b.is_ascii_digit())
}

impl Node {
    /// Names of this node's children, in display order. Empty for leaves and
    /// symlinks.
    pub fn entries(&self) -> Vec<String> {
        match self {
            Self::Root => digits().collect(),
            Self::Partial(_) => std::iter::once(NAME_ENTRY.to_string())
                .chain(digits())
                .collect(),
            Self::Final(cnp) => {
                if cnp.is_valid() {
                    FINAL_ENTRIES.iter().map(ToString::to_string).collect()
                } else {
                    vec![FINAL_ENTRIES[0].to_string()]
                }
            }
            Self::Changes(_) => CnpField::all()
                .iter()
                .map(|f| f.as_str().to_string())
                .collect(),
            Self::Choices { cnp, field } => cnp.choices(*field),
            Self::Leaf(_) | Self::Symlink(_) => Vec::new(),
        }
    }

    /// Look up one child by name. `None` for unknown names and for
    /// non-directories.
    pub fn get(&self, name: &str) -> Option<Node> {
        match self {
            Self::Root => root_child(name),
            Self::Partial(prefix) => partial_child(prefix, name),
            Self::Final(cnp) => final_child(cnp, name),
            Self::Changes(cnp) => CnpField::from_name(name).map(|field| Self::Choices {
                cnp: cnp.clone(),
                field,
            }),
            Self::Choices { cnp, field } => cnp
                .alter_choice(*field, name)
                .ok()
                .map(|altered| Self::Symlink(format!("/{altered}"))),
            Self::Leaf(_) | Self::Symlink(_) => None,
        }
    }
}

fn root_child(name: &str) -> Option<Node> {
    if let Some(prefix) = Prefix::new(name) {
        return Some(Node::Partial(prefix));
    }
    let cnp = Cnp::new(name);
    cnp.is_well_formed().then_some(Node::Final(cnp))
}

/// A prefix directory chooses the next digit. Each digit is a symlink to the
/// absolute path one digit longer, so the walk re-enters at the root and
/// lands on a `Partial` or, at 13 digits, a `Final` node.
fn partial_child(prefix: &Prefix, name: &str) -> Option<Node> {
    if name == NAME_ENTRY {
        return Some(Node::Leaf(prefix.to_string()));
    }
    is_digit_entry(name).then(|| Node::Symlink(format!("/{prefix}{name}")))
}

fn final_child(cnp: &Cnp, name: &str) -> Option<Node> {
    let leaf = |text: String| Some(Node::Leaf(text));
    let valid = cnp.is_valid();
    if name == "valid" {
        return leaf(if valid { "da" } else { "nu" }.to_string());
    }
    if !valid {
        return None;
    }
    match name {
        "nationalitate" => leaf(cnp.nationality()?.to_string()),
        "sex" => leaf(cnp.sex()?.to_string()),
        "an" => leaf(cnp.birth_year()?.to_string()),
        "luna" => leaf(cnp.month()?.to_string()),
        "numeLuna" => leaf(cnp.month_name()?.to_string()),
        "zi" => leaf(cnp.day()?.to_string()),
        "judet" => leaf(cnp.county()?.name().to_string()),
        "judetNumeric" => leaf(cnp.county_code()?.to_string()),
        "nnn" => leaf(cnp.sequence()?.to_string()),
        NAME_ENTRY => leaf(cnp.to_string()),
        CHANGES_ENTRY => Some(Node::Changes(cnp.clone())),
        _ => None,
    }
}
