use serde::Serialize;

use super::{Convention, Kind, Location};

/// Owned, read-only view of one canonical node and its subtree.
///
/// This is what leaves the pipeline: the inventory builder reads assets, it
/// never sees the arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub kind: Kind,
    pub name: String,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Convention>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Asset>,
}

impl Asset {
    pub fn child(&self, kind: Kind) -> Option<&Asset> {
        self.children.iter().find(|c| c.kind == kind)
    }

    pub fn child_name(&self, kind: Kind) -> Option<&str> {
        self.child(kind).map(|c| c.name.as_str())
    }

    pub fn has_child(&self, kind: Kind) -> bool {
        self.child(kind).is_some()
    }

    /// Follows a chain of kinds from this asset, e.g. `[Mode, BlockSize]`.
    pub fn path(&self, kinds: &[Kind]) -> Option<&Asset> {
        kinds.iter().try_fold(self, |asset, kind| asset.child(*kind))
    }

    /// Every asset of `kind` in this subtree, including `self`.
    pub fn find_all(&self, kind: Kind) -> Vec<&Asset> {
        let mut out = Vec::new();
        self.collect(kind, &mut out);
        out
    }

    fn collect<'a>(&'a self, kind: Kind, out: &mut Vec<&'a Asset>) {
        if self.kind == kind {
            out.push(self);
        }
        for child in &self.children {
            child.collect(kind, out);
        }
    }

    /// True when no asset in the subtree has two children of the same kind.
    pub fn has_unique_child_kinds(&self) -> bool {
        let mut kinds: Vec<Kind> = self.children.iter().map(|c| c.kind).collect();
        kinds.sort();
        kinds.dedup();
        kinds.len() == self.children.len()
            && self.children.iter().all(|c| c.has_unique_child_kinds())
    }
}
