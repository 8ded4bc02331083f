//! Choosing which directories receive a barrel and which modules it holds.

use barrelgen_config::LocationMode;
use barrelgen_core::{Directory, Location};

/// Directories of `root` that receive a barrel under `mode`, in walk order.
pub fn destinations(root: &Directory, mode: LocationMode) -> Vec<&Directory> {
    match mode {
        LocationMode::Top => vec![root],
        LocationMode::Below => root.directories.iter().collect(),
        LocationMode::All => root.walk(),
        LocationMode::Replace => root
            .walk()
            .into_iter()
            .filter(|directory| directory.barrel.is_some())
            .collect(),
        LocationMode::Branch => root
            .walk()
            .into_iter()
            .filter(|directory| !directory.directories.is_empty())
            .collect(),
    }
}

/// Modules re-exported by a barrel in `directory`.
///
/// `local` limits them to the directory itself; otherwise the whole subtree
/// is included.
pub fn barrel_modules(directory: &Directory, local: bool) -> Vec<Location> {
    if local {
        directory.files.clone()
    } else {
        directory.modules()
    }
}
